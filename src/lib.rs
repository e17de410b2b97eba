//! NETGEN network flow problem generator (Rust port).
//!
//! A faithful translation of the classic NETGEN generator (Klingman, Napier, Stutz, 1974)
//! with BCJL overflow fixes, plus a simpler grid-based variant sharing the same
//! pseudo-random generator and DIMACS writer.

pub mod arc;
pub mod cli;
pub mod error;
pub mod grid;
pub mod index_list;
pub mod logging;
pub mod netgen;
pub mod params;
pub mod random;
pub mod writer;

pub use arc::Arc;
pub use error::{GridError, NetgenError};
pub use grid::GridResult;
pub use netgen::NetgenResult;
pub use params::{GridParams, NetgenParams, ProblemType};
pub use random::RngKind;

/// Generate a NETGEN network flow problem from validated parameters.
///
/// # Errors
/// Returns [`NetgenError`] if generation fails internally.
pub fn generate(params: &NetgenParams) -> Result<NetgenResult, NetgenError> {
    netgen::generate(params)
}

/// Generate a grid network flow problem from validated parameters.
///
/// # Errors
/// Returns [`GridError`] if generation fails internally.
pub fn generate_grid(params: &GridParams) -> Result<GridResult, GridError> {
    grid::generate(params)
}
