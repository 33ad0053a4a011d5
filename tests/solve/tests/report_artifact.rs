//! Solve-report artifact tests: shape, digest binding, file round-trip.

use solve_tests::two_move_board;
use wayfind_tiles::graph::TileGraph;
use wayfind_tiles::report::{build_report, content_digest, DOMAIN_SOLVE_REPORT};
use wayfind_tiles::solve::solve;

/// The digest is recomputable from the artifact bytes alone.
#[test]
fn digest_binds_the_report_bytes() {
    let board = two_move_board();
    let outcome = solve(&TileGraph::new(board));
    let report = build_report(&board, &outcome).unwrap();
    assert_eq!(
        report.digest,
        content_digest(DOMAIN_SOLVE_REPORT, &report.bytes)
    );
}

/// The artifact is valid JSON with the expected surface.
#[test]
fn report_surface_is_complete() {
    let board = two_move_board();
    let outcome = solve(&TileGraph::new(board));
    let report = build_report(&board, &outcome).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&report.bytes).unwrap();
    for key in ["artifact", "version", "start", "solved", "total_cost", "actions", "stats"] {
        assert!(json.get(key).is_some(), "missing report key {key}");
    }
    assert_eq!(json["artifact"], "solve_report");
    assert_eq!(json["version"], 1);
    for key in ["expansions", "admitted", "suppressed", "frontier_high_water"] {
        assert!(json["stats"].get(key).is_some(), "missing stats key {key}");
    }
}

/// Reports written to disk read back byte-identical.
#[test]
fn report_round_trips_through_a_file() {
    let board = two_move_board();
    let outcome = solve(&TileGraph::new(board));
    let report = build_report(&board, &outcome).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solve_report.json");
    std::fs::write(&path, &report.bytes).unwrap();

    let read_back = std::fs::read(&path).unwrap();
    assert_eq!(read_back, report.bytes);
    assert_eq!(
        content_digest(DOMAIN_SOLVE_REPORT, &read_back),
        report.digest
    );
}
