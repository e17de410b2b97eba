//! Golden-vector and property-based integration tests for the public API.
//!
//! These exercise the crate the way a downstream consumer would: through
//! `NetgenParams`/`GridParams` construction, `generate`/`generate_grid`, and
//! the DIMACS writer, rather than reaching into internals.

use netgen_rs::params::ProblemType;
use netgen_rs::random::RngKind;
use netgen_rs::{writer, GridParams, NetgenParams};

fn default_netgen(seed: i64) -> NetgenParams {
    NetgenParams::new(
        seed,
        10,
        3,
        3,
        30,
        10,
        99,
        1000,
        0,
        0,
        0,
        100,
        100,
        1000,
        RngKind::Netgen,
        None,
    )
    .unwrap()
}

#[test]
fn default_run_produces_expected_arc_count_and_balance() {
    let params = default_netgen(1);
    let result = netgen_rs::generate(&params).unwrap();
    assert_eq!(result.arcs.len(), params.density as usize);
    assert_eq!(result.supply.len(), params.nodes as usize);
    assert_eq!(result.supply.iter().sum::<i64>(), 0);
}

#[test]
fn max_flow_trigger_classifies_and_emits_p_max() {
    let params = NetgenParams::new(
        1,
        10,
        3,
        3,
        30,
        1,
        1,
        1000,
        0,
        0,
        0,
        100,
        100,
        1000,
        RngKind::Netgen,
        None,
    )
    .unwrap();
    assert_eq!(params.problem_type(), ProblemType::MaxFlow);
    let result = netgen_rs::generate(&params).unwrap();
    let text = writer::netgen_to_string(&params, &result);
    assert!(text.contains("p max 10 30"));
    for line in text.lines().filter(|l| l.starts_with("a ")) {
        assert_eq!(line.split(' ').count(), 4, "max arc line: {line}");
    }
}

#[test]
fn assignment_trigger_classifies_and_emits_p_asn() {
    let params = NetgenParams::new(
        1,
        6,
        3,
        3,
        9,
        10,
        99,
        3,
        0,
        0,
        0,
        100,
        100,
        1000,
        RngKind::Netgen,
        None,
    )
    .unwrap();
    assert_eq!(params.problem_type(), ProblemType::Assignment);
    let result = netgen_rs::generate(&params).unwrap();
    assert_eq!(result.supply, vec![1, 1, 1, -1, -1, -1]);
    let text = writer::netgen_to_string(&params, &result);
    assert!(text.contains("p asn 6 9"));
}

#[test]
fn type_override_wins_regardless_of_trigger_shape() {
    let params = NetgenParams::new(
        1,
        10,
        3,
        3,
        30,
        10,
        99,
        1000,
        0,
        0,
        0,
        100,
        100,
        1000,
        RngKind::Netgen,
        Some(ProblemType::MaxFlow),
    )
    .unwrap();
    assert_eq!(params.problem_type(), ProblemType::MaxFlow);
}

#[test]
fn generation_is_deterministic_for_a_fixed_seed() {
    let a = netgen_rs::generate(&default_netgen(13502460)).unwrap();
    let b = netgen_rs::generate(&default_netgen(13502460)).unwrap();
    assert_eq!(a.supply, b.supply);
    assert_eq!(a.arcs.len(), b.arcs.len());
    for (x, y) in a.arcs.iter().zip(b.arcs.iter()) {
        assert_eq!(x, y);
    }
}

#[test]
fn different_seeds_diverge() {
    let a = netgen_rs::generate(&default_netgen(1)).unwrap();
    let b = netgen_rs::generate(&default_netgen(2)).unwrap();
    assert_ne!(a.arcs, b.arcs);
}

#[test]
fn arcs_reference_valid_node_range_and_respect_cost_capacity_bounds() {
    let params = default_netgen(42);
    let result = netgen_rs::generate(&params).unwrap();
    for arc in &result.arcs {
        assert!((1..=params.nodes as u64).contains(&arc.from));
        assert!((1..=params.nodes as u64).contains(&arc.to));
        assert!((params.mincost..=params.maxcost).contains(&arc.cost));
        assert!(arc.capacity >= 1);
    }
}

#[test]
fn invalid_parameters_are_rejected_before_generation() {
    let err = NetgenParams::new(
        1, 5, 3, 3, 30, 10, 99, 1000, 0, 0, 0, 100, 100, 1000, RngKind::Netgen, None,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        netgen_rs::NetgenError::InvalidParameter { field: "sources", .. }
    ));
}

#[test]
fn grid_default_layout_balances_supply_and_stays_in_range() {
    let params = GridParams::new(
        1,
        3,
        4,
        1,
        true,
        false,
        false,
        10,
        99,
        1000,
        0,
        100,
        100,
        1000,
        RngKind::Netgen,
        ProblemType::MinCostFlow,
    )
    .unwrap();
    let result = netgen_rs::generate_grid(&params).unwrap();
    assert_eq!(result.supply.iter().sum::<i64>(), 0);
    let total = params.total_nodes() as u64;
    for arc in &result.arcs {
        assert!((1..=total).contains(&arc.from));
        assert!((1..=total).contains(&arc.to));
    }
    let text = writer::grid_to_string(&params, &result);
    assert!(text.contains(&format!("p min {total} ")));
}

#[test]
fn grid_is_deterministic_for_a_fixed_seed() {
    let params = GridParams::new(
        1,
        3,
        4,
        1,
        true,
        true,
        true,
        10,
        99,
        1000,
        5,
        80,
        100,
        1000,
        RngKind::Netgen,
        ProblemType::MinCostFlow,
    )
    .unwrap();
    let a = netgen_rs::generate_grid(&params).unwrap();
    let b = netgen_rs::generate_grid(&params).unwrap();
    assert_eq!(a.arcs, b.arcs);
    assert_eq!(a.supply, b.supply);
}

#[test]
fn standard_rng_kind_still_produces_a_balanced_network() {
    let params = NetgenParams::new(
        1,
        10,
        3,
        3,
        30,
        10,
        99,
        1000,
        0,
        0,
        0,
        100,
        100,
        1000,
        RngKind::Standard,
        None,
    )
    .unwrap();
    let result = netgen_rs::generate(&params).unwrap();
    assert_eq!(result.supply.iter().sum::<i64>(), 0);
}
