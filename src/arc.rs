//! The arc type shared by both generators.

/// A single directed arc in the generated network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub from: u64,
    pub to: u64,
    pub cost: i64,
    pub capacity: i64,
}
