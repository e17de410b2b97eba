//! DIMACS flow-format writer, shared by both generators.
//!
//! Every line is terminated with `\n`, including the last — callers writing
//! to a file strip exactly one trailing newline byte to match historic
//! NETGEN behavior; callers printing to a terminal keep it as-is.

use std::io::{self, Write};

use crate::arc::Arc;
use crate::grid::GridResult;
use crate::netgen::NetgenResult;
use crate::params::{GridParams, NetgenParams, ProblemType};

/// Write the DIMACS comment header describing the NETGEN parameters used.
pub fn write_netgen_header(w: &mut impl Write, params: &NetgenParams) -> io::Result<()> {
    writeln!(w, "c NETGEN flow network generator")?;
    writeln!(w, "c  ---------------------------")?;
    writeln!(w, "c   Random seed:          {:10}", params.seed)?;
    writeln!(w, "c   Number of nodes:      {:10}", params.nodes)?;
    writeln!(w, "c   Source nodes:         {:10}", params.sources)?;
    writeln!(w, "c   Sink nodes:           {:10}", params.sinks)?;
    writeln!(w, "c   Number of arcs:       {:10}", params.density)?;
    writeln!(w, "c   Minimum arc cost:     {:10}", params.mincost)?;
    writeln!(w, "c   Maximum arc cost:     {:10}", params.maxcost)?;
    writeln!(w, "c   Total supply:         {:10}", params.supply)?;
    writeln!(w, "c   Transshipment -")?;
    writeln!(w, "c     Sources:            {:10}", params.tsources)?;
    writeln!(w, "c     Sinks:              {:10}", params.tsinks)?;
    writeln!(w, "c   Skeleton arcs -")?;
    writeln!(w, "c     With max cost:      {:10}%", params.hicost)?;
    writeln!(w, "c     Capacitated:        {:10}%", params.capacitated)?;
    writeln!(w, "c   Minimum arc capacity: {:10}", params.mincap)?;
    writeln!(w, "c   Maximum arc capacity: {:10}", params.maxcap)?;
    Ok(())
}

/// Write the DIMACS comment header describing the grid parameters used.
pub fn write_grid_header(w: &mut impl Write, params: &GridParams) -> io::Result<()> {
    writeln!(w, "c Grid flow network generator")?;
    writeln!(w, "c  ---------------------------")?;
    writeln!(w, "c   Random seed:          {:10}", params.seed)?;
    writeln!(w, "c   Rows:                 {:10}", params.rows)?;
    writeln!(w, "c   Columns:              {:10}", params.cols)?;
    writeln!(w, "c   Skeleton rows:        {:10}", params.skeleton)?;
    writeln!(w, "c   Diagonal arcs:        {:10}", params.diagonal)?;
    writeln!(w, "c   Reverse arcs:         {:10}", params.reverse)?;
    writeln!(w, "c   Wraparound:           {:10}", params.wrap)?;
    writeln!(w, "c   Minimum arc cost:     {:10}", params.mincost)?;
    writeln!(w, "c   Maximum arc cost:     {:10}", params.maxcost)?;
    writeln!(w, "c   Supply per row:       {:10}", params.supply)?;
    writeln!(w, "c   Skeleton max cost:    {:10}%", params.hicost)?;
    writeln!(w, "c   Capacitated:          {:10}%", params.capacitated)?;
    writeln!(w, "c   Minimum arc capacity: {:10}", params.mincap)?;
    writeln!(w, "c   Maximum arc capacity: {:10}", params.maxcap)?;
    Ok(())
}

fn write_network(
    w: &mut impl Write,
    problem_type: ProblemType,
    num_nodes: i64,
    supply: &[i64],
    arcs: &[Arc],
) -> io::Result<()> {
    let num_arcs = arcs.len();
    match problem_type {
        ProblemType::Assignment => {
            writeln!(w, "c")?;
            writeln!(w, "c  *** Assignment ***")?;
            writeln!(w, "c")?;
            writeln!(w, "p asn {num_nodes} {num_arcs}")?;
            for (i, &s) in supply.iter().enumerate() {
                if s > 0 {
                    writeln!(w, "n {}", i + 1)?;
                }
            }
            for arc in arcs {
                writeln!(w, "a {} {} {}", arc.from, arc.to, arc.cost)?;
            }
        }
        ProblemType::MaxFlow => {
            writeln!(w, "c")?;
            writeln!(w, "c  *** Maximum flow ***")?;
            writeln!(w, "c")?;
            writeln!(w, "p max {num_nodes} {num_arcs}")?;
            for (i, &s) in supply.iter().enumerate() {
                if s > 0 {
                    writeln!(w, "n {} s", i + 1)?;
                } else if s < 0 {
                    writeln!(w, "n {} t", i + 1)?;
                }
            }
            for arc in arcs {
                writeln!(w, "a {} {} {}", arc.from, arc.to, arc.capacity)?;
            }
        }
        ProblemType::MinCostFlow => {
            writeln!(w, "c")?;
            writeln!(w, "c  *** Minimum cost flow ***")?;
            writeln!(w, "c")?;
            writeln!(w, "p min {num_nodes} {num_arcs}")?;
            for (i, &s) in supply.iter().enumerate() {
                if s != 0 {
                    writeln!(w, "n {} {}", i + 1, s)?;
                }
            }
            for arc in arcs {
                writeln!(w, "a {} {} 0 {} {}", arc.from, arc.to, arc.capacity, arc.cost)?;
            }
        }
    }
    Ok(())
}

/// Write complete DIMACS output for a NETGEN run: header, blank line, network.
pub fn write_netgen(
    w: &mut impl Write,
    params: &NetgenParams,
    result: &NetgenResult,
) -> io::Result<()> {
    write_netgen_header(w, params)?;
    writeln!(w)?;
    write_network(
        w,
        params.problem_type(),
        params.nodes,
        &result.supply,
        &result.arcs,
    )
}

/// Write complete DIMACS output for a grid run: header, blank line, network.
pub fn write_grid(w: &mut impl Write, params: &GridParams, result: &GridResult) -> io::Result<()> {
    write_grid_header(w, params)?;
    writeln!(w)?;
    write_network(
        w,
        params.problem_type,
        params.total_nodes(),
        &result.supply,
        &result.arcs,
    )
}

/// Generate and format a NETGEN run as a DIMACS string.
pub fn netgen_to_string(params: &NetgenParams, result: &NetgenResult) -> String {
    let mut buf = Vec::new();
    write_netgen(&mut buf, params, result).expect("writing to Vec should not fail");
    String::from_utf8(buf).expect("DIMACS output is ASCII")
}

/// Generate and format a grid run as a DIMACS string.
pub fn grid_to_string(params: &GridParams, result: &GridResult) -> String {
    let mut buf = Vec::new();
    write_grid(&mut buf, params, result).expect("writing to Vec should not fail");
    String::from_utf8(buf).expect("DIMACS output is ASCII")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netgen;
    use crate::params::ProblemType;
    use crate::random::RngKind;

    #[test]
    fn mincost_output_has_expected_shape() {
        let params = NetgenParams::new(
            1, 10, 3, 3, 30, 10, 99, 1000, 0, 0, 0, 100, 100, 1000, RngKind::Netgen, None,
        )
        .unwrap();
        let result = netgen::generate(&params).unwrap();
        let text = netgen_to_string(&params, &result);
        assert!(text.contains("p min 10 30"));
        assert!(text.lines().any(|l| l.starts_with("a ") && l.split(' ').count() == 5));
    }

    #[test]
    fn maxflow_output_omits_cost_field() {
        let params = NetgenParams::new(
            1, 10, 3, 3, 30, 1, 1, 1000, 0, 0, 0, 100, 100, 1000, RngKind::Netgen, None,
        )
        .unwrap();
        let result = netgen::generate(&params).unwrap();
        let text = netgen_to_string(&params, &result);
        assert!(text.contains("p max 10 30"));
        for line in text.lines().filter(|l| l.starts_with("a ")) {
            assert_eq!(line.split(' ').count(), 4);
        }
    }

    #[test]
    fn assignment_output_has_asn_problem_line() {
        let params = NetgenParams::new(
            1, 6, 3, 3, 9, 10, 99, 3, 0, 0, 0, 100, 100, 1000, RngKind::Netgen, None,
        )
        .unwrap();
        let result = netgen::generate(&params).unwrap();
        let text = netgen_to_string(&params, &result);
        assert!(text.starts_with("c ") || text.contains("c "));
        assert!(text.contains("p asn 6"));
    }

    #[test]
    fn output_parses_as_dimacs_lines() {
        let params = NetgenParams::new(
            1, 10, 3, 3, 30, 10, 99, 1000, 0, 0, 0, 100, 100, 1000, RngKind::Netgen, None,
        )
        .unwrap();
        let result = netgen::generate(&params).unwrap();
        let text = netgen_to_string(&params, &result);
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let tag = &line[0..1];
            assert!(["c", "p", "n", "a"].contains(&tag), "unexpected line: {line}");
        }
    }

    #[test]
    fn grid_output_has_expected_problem_line() {
        let params = crate::params::GridParams::new(
            1, 3, 4, 1, true, false, false, 10, 99, 1000, 0, 100, 100, 1000, RngKind::Netgen,
            ProblemType::MinCostFlow,
        )
        .unwrap();
        let result = crate::grid::generate(&params).unwrap();
        let text = grid_to_string(&params, &result);
        assert!(text.contains(&format!("p min {} ", params.total_nodes())));
    }
}
