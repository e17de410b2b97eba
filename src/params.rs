//! Validated parameter records for the NETGEN and grid generators.

use rand::Rng as _;

use crate::error::{GridError, NetgenError};
use crate::random::RngKind;

/// Problem type detected from parameters, or forced by an explicit override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemType {
    MinCostFlow,
    MaxFlow,
    Assignment,
}

impl ProblemType {
    /// The DIMACS problem-line keyword for this type (`min`, `max`, `asn`).
    pub fn dimacs_keyword(self) -> &'static str {
        match self {
            ProblemType::MinCostFlow => "min",
            ProblemType::MaxFlow => "max",
            ProblemType::Assignment => "asn",
        }
    }
}

/// Parameters for the NETGEN network generator.
///
/// Construct via [`NetgenParams::new`], which validates every invariant up
/// front; the core generator never has to guard against malformed input.
#[derive(Debug, Clone)]
pub struct NetgenParams {
    pub seed: i64,
    pub nodes: i64,
    pub sources: i64,
    pub sinks: i64,
    pub density: i64,
    pub mincost: i64,
    pub maxcost: i64,
    pub supply: i64,
    pub tsources: i64,
    pub tsinks: i64,
    pub hicost: i64,
    pub capacitated: i64,
    pub mincap: i64,
    pub maxcap: i64,
    pub rng_kind: RngKind,
    pub type_override: Option<ProblemType>,
}

impl NetgenParams {
    /// Validate and freeze a parameter record.
    ///
    /// If `seed <= 0`, a seed is drawn uniformly from `1..=99_999_999` using
    /// a system-entropy generator before the record is frozen.
    ///
    /// # Errors
    /// Returns [`NetgenError::InvalidParameter`] naming the first violated
    /// invariant.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seed: i64,
        nodes: i64,
        sources: i64,
        sinks: i64,
        density: i64,
        mincost: i64,
        maxcost: i64,
        supply: i64,
        tsources: i64,
        tsinks: i64,
        hicost: i64,
        capacitated: i64,
        mincap: i64,
        maxcap: i64,
        rng_kind: RngKind,
        type_override: Option<ProblemType>,
    ) -> Result<Self, NetgenError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> NetgenError {
            NetgenError::InvalidParameter {
                field,
                reason: reason.into(),
            }
        }

        for (field, v) in [
            ("nodes", nodes),
            ("sources", sources),
            ("sinks", sinks),
            ("density", density),
            ("supply", supply),
            ("tsources", tsources),
            ("tsinks", tsinks),
            ("mincap", mincap),
            ("maxcap", maxcap),
        ] {
            if v < 0 {
                return Err(invalid(field, "must be >= 0"));
            }
        }
        if sources + sinks > nodes {
            return Err(invalid("sources", "sources + sinks must be <= nodes"));
        }
        if density < nodes {
            return Err(invalid("density", "must be >= nodes"));
        }
        if mincost > maxcost {
            return Err(invalid("mincost", "must be <= maxcost"));
        }
        if mincap > maxcap {
            return Err(invalid("mincap", "must be <= maxcap"));
        }
        if tsources > sources {
            return Err(invalid("tsources", "must be <= sources"));
        }
        if tsinks > sinks {
            return Err(invalid("tsinks", "must be <= sinks"));
        }
        for (field, v) in [("hicost", hicost), ("capacitated", capacitated)] {
            if !(0..=100).contains(&v) {
                return Err(invalid(field, "must be in 0..=100"));
            }
        }

        let seed = if seed <= 0 {
            rand::thread_rng().gen_range(1..=99_999_999)
        } else {
            seed
        };

        Ok(NetgenParams {
            seed,
            nodes,
            sources,
            sinks,
            density,
            mincost,
            maxcost,
            supply,
            tsources,
            tsinks,
            hicost,
            capacitated,
            mincap,
            maxcap,
            rng_kind,
            type_override,
        })
    }

    /// Classify the problem type per the parameter record, honoring
    /// `type_override` when present.
    pub fn problem_type(&self) -> ProblemType {
        if let Some(t) = self.type_override {
            return t;
        }
        if (self.sources - self.tsources) + (self.sinks - self.tsinks) == self.nodes
            && (self.sources - self.tsources) == (self.sinks - self.tsinks)
            && self.sources == self.supply
        {
            ProblemType::Assignment
        } else if self.mincost == 1 && self.maxcost == 1 {
            ProblemType::MaxFlow
        } else {
            ProblemType::MinCostFlow
        }
    }
}

/// Parameters for the grid network generator.
#[derive(Debug, Clone)]
pub struct GridParams {
    pub seed: i64,
    pub rows: i64,
    pub cols: i64,
    pub skeleton: i64,
    pub diagonal: bool,
    pub reverse: bool,
    pub wrap: bool,
    pub mincost: i64,
    pub maxcost: i64,
    pub supply: i64,
    pub hicost: i64,
    pub capacitated: i64,
    pub mincap: i64,
    pub maxcap: i64,
    pub rng_kind: RngKind,
    /// Grid networks have no source/sink counts to classify from (unlike
    /// `spec.md` §4.3), so the problem type is simply chosen up front,
    /// mirroring the historic generator's explicit `problem` index.
    pub problem_type: ProblemType,
}

impl GridParams {
    /// Validate and freeze a grid parameter record.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidParameter`] naming the first violated
    /// invariant.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        seed: i64,
        rows: i64,
        cols: i64,
        skeleton: i64,
        diagonal: bool,
        reverse: bool,
        wrap: bool,
        mincost: i64,
        maxcost: i64,
        supply: i64,
        hicost: i64,
        capacitated: i64,
        mincap: i64,
        maxcap: i64,
        rng_kind: RngKind,
        problem_type: ProblemType,
    ) -> Result<Self, GridError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> GridError {
            GridError::InvalidParameter {
                field,
                reason: reason.into(),
            }
        }

        if rows <= 0 {
            return Err(invalid("rows", "must be > 0"));
        }
        if cols <= 0 {
            return Err(invalid("cols", "must be > 0"));
        }
        if skeleton < 1 || skeleton > rows {
            return Err(invalid("skeleton", "must be in 1..=rows"));
        }
        if mincost > maxcost {
            return Err(invalid("mincost", "must be <= maxcost"));
        }
        if mincap > maxcap {
            return Err(invalid("mincap", "must be <= maxcap"));
        }
        if supply < 0 {
            return Err(invalid("supply", "must be >= 0"));
        }
        for (field, v) in [("hicost", hicost), ("capacitated", capacitated)] {
            if !(0..=100).contains(&v) {
                return Err(invalid(field, "must be in 0..=100"));
            }
        }

        let seed = if seed <= 0 {
            rand::thread_rng().gen_range(1..=99_999_999)
        } else {
            seed
        };

        Ok(GridParams {
            seed,
            rows,
            cols,
            skeleton,
            diagonal,
            reverse,
            wrap,
            mincost,
            maxcost,
            supply,
            hicost,
            capacitated,
            mincap,
            maxcap,
            rng_kind,
            problem_type,
        })
    }

    /// Total node count: `rows * cols` interior nodes plus master source and sink.
    pub fn total_nodes(&self) -> i64 {
        self.rows * self.cols + 2
    }
}
