//! Grid network generator: a much simpler, purely deterministic layout that
//! shares the RNG and DIMACS writer with the NETGEN generator.
//!
//! Node numbering: node 1 is the master source, node `rows*cols+2` is the
//! master sink, and the interior node at 0-based grid position `(i, j)` is
//! `i*cols + j + 2`.

use tracing::debug;

use crate::arc::Arc;
use crate::error::GridError;
use crate::params::GridParams;
use crate::random::Rng;

/// Result of a grid generation run.
#[derive(Debug, Clone)]
pub struct GridResult {
    pub arcs: Vec<Arc>,
    /// Supply (positive) or demand (negative) at each node, 0-indexed.
    pub supply: Vec<i64>,
}

fn interior(i: i64, cols: i64, j: i64) -> u64 {
    (i * cols + j + 2) as u64
}

/// Generate a grid network flow problem from validated parameters.
pub fn generate(params: &GridParams) -> Result<GridResult, GridError> {
    let _span = tracing::debug_span!(
        "grid::generate",
        rows = params.rows,
        cols = params.cols,
        skeleton = params.skeleton,
        problem_type = ?params.problem_type
    )
    .entered();
    debug!("starting grid generation");

    let rows = params.rows;
    let cols = params.cols;
    let total_nodes = params.total_nodes();
    let master_source = 1u64;
    let master_sink = total_nodes as u64;

    let mut rng = Rng::new(params.rng_kind, params.seed);
    let mut arcs: Vec<Arc> = Vec::new();
    let mut supply: Vec<i64> = vec![0; total_nodes as usize];

    // Master source arcs, one per row.
    for i in 0..rows {
        arcs.push(Arc {
            from: master_source,
            to: interior(i, cols, 0),
            cost: 0,
            capacity: params.supply,
        });
    }

    // East arcs (i,j) -> (i,j+1). Skeleton rows get the hicost/capacitated
    // treatment described in the data model; others draw both cost and cap.
    for i in 0..rows {
        for j in 0..cols - 1 {
            let (cost, cap) = if i < params.skeleton {
                skeleton_arc(params, &mut rng)
            } else {
                random_arc(params, &mut rng)
            };
            arcs.push(Arc {
                from: interior(i, cols, j),
                to: interior(i, cols, j + 1),
                cost,
                capacity: cap,
            });
        }
    }

    // West arcs (reverse direction of east).
    if params.reverse {
        for i in 0..rows {
            for j in 0..cols - 1 {
                let (cost, cap) = random_arc(params, &mut rng);
                arcs.push(Arc {
                    from: interior(i, cols, j + 1),
                    to: interior(i, cols, j),
                    cost,
                    capacity: cap,
                });
            }
        }
    }

    // South arcs (i,j) -> (i+1,j), plus wraparound (rows-1,j) -> (0,j).
    for j in 0..cols {
        for i in 0..rows - 1 {
            let (cost, cap) = random_arc(params, &mut rng);
            arcs.push(Arc {
                from: interior(i, cols, j),
                to: interior(i + 1, cols, j),
                cost,
                capacity: cap,
            });
        }
        if params.wrap {
            let (cost, cap) = random_arc(params, &mut rng);
            arcs.push(Arc {
                from: interior(rows - 1, cols, j),
                to: interior(0, cols, j),
                cost,
                capacity: cap,
            });
        }
    }

    // North arcs (reverse direction of south).
    if params.reverse {
        for j in 0..cols {
            for i in 0..rows - 1 {
                let (cost, cap) = random_arc(params, &mut rng);
                arcs.push(Arc {
                    from: interior(i + 1, cols, j),
                    to: interior(i, cols, j),
                    cost,
                    capacity: cap,
                });
            }
            if params.wrap {
                let (cost, cap) = random_arc(params, &mut rng);
                arcs.push(Arc {
                    from: interior(0, cols, j),
                    to: interior(rows - 1, cols, j),
                    cost,
                    capacity: cap,
                });
            }
        }
    }

    // SE diagonals (i,j) -> (i+1,j+1), with wraparound to row 0.
    if params.diagonal {
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let (cost, cap) = random_arc(params, &mut rng);
                arcs.push(Arc {
                    from: interior(i, cols, j),
                    to: interior(i + 1, cols, j + 1),
                    cost,
                    capacity: cap,
                });
            }
        }
        if params.wrap {
            for j in 0..cols - 1 {
                let (cost, cap) = random_arc(params, &mut rng);
                arcs.push(Arc {
                    from: interior(rows - 1, cols, j),
                    to: interior(0, cols, j + 1),
                    cost,
                    capacity: cap,
                });
            }
        }

        // NE diagonals (i+1,j) -> (i,j+1).
        for i in 0..rows - 1 {
            for j in 0..cols - 1 {
                let (cost, cap) = random_arc(params, &mut rng);
                arcs.push(Arc {
                    from: interior(i + 1, cols, j),
                    to: interior(i, cols, j + 1),
                    cost,
                    capacity: cap,
                });
            }
        }

        // NW/SW diagonals, only when arcs run in the reverse direction too.
        if params.reverse {
            for i in 0..rows - 1 {
                for j in 0..cols - 1 {
                    let (cost, cap) = random_arc(params, &mut rng);
                    arcs.push(Arc {
                        from: interior(i, cols, j + 1),
                        to: interior(i + 1, cols, j),
                        cost,
                        capacity: cap,
                    });
                }
            }
            for i in 0..rows - 1 {
                for j in 0..cols - 1 {
                    let (cost, cap) = random_arc(params, &mut rng);
                    arcs.push(Arc {
                        from: interior(i + 1, cols, j + 1),
                        to: interior(i, cols, j),
                        cost,
                        capacity: cap,
                    });
                }
            }
        }
    }

    // Master sink arcs, one per row.
    for i in 0..rows {
        arcs.push(Arc {
            from: interior(i, cols, cols - 1),
            to: master_sink,
            cost: 0,
            capacity: params.supply,
        });
    }

    supply[0] = rows * params.supply;
    supply[(total_nodes - 1) as usize] = -rows * params.supply;

    debug!(arc_count = arcs.len(), "finished grid generation");
    Ok(GridResult { arcs, supply })
}

/// Skeleton-row arc cost/capacity rule (east arcs on rows `< skeleton`).
fn skeleton_arc(params: &GridParams, rng: &mut Rng) -> (i64, i64) {
    let cost = if rng.next(1, 100) <= params.hicost {
        params.maxcost
    } else {
        rng.next(params.mincost, params.maxcost)
    };
    let cap = if rng.next(1, 100) <= params.capacitated {
        if params.skeleton == 1 {
            params.supply
        } else {
            params.supply.div_ceil(params.skeleton)
        }
    } else {
        params.supply
    };
    (cost, cap)
}

/// Non-skeleton arc cost/capacity: both drawn uniformly from their ranges.
fn random_arc(params: &GridParams, rng: &mut Rng) -> (i64, i64) {
    let cost = rng.next(params.mincost, params.maxcost);
    let cap = rng.next(params.mincap, params.maxcap);
    (cost, cap)
}
