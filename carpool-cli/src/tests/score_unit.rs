//! Unit tests for the `score` command.

use super::helpers::{KAUNAS, VILNIUS, vilnius_to_kaunas, workspace, write_json, write_utf8};
use super::*;
use crate::score::{ScoreArgs, ScoreConfig, execute_score, run_score_with};
use camino::Utf8PathBuf;
use carpool_core::{Route, Stop};
use carpool_deviation::{DeviationEngineConfig, DeviationReport};
use geo::Coord;
use rstest::rstest;
use std::num::NonZeroUsize;

fn two_rider_route() -> Route {
    Route::new(7, VILNIUS, KAUNAS, 40.0)
        .with_capacity(4, 2)
        .with_stops(vec![
            Stop::new(10, Coord { x: 24.9, y: 54.75 }).with_application(1),
            Stop::new(11, Coord { x: 24.3, y: 54.85 }).with_application(2),
        ])
}

#[rstest]
fn converting_score_without_route_errors() {
    let args = ScoreArgs {
        request_path: Some(Utf8PathBuf::from("request.json")),
        ..ScoreArgs::default()
    };

    let err = ScoreConfig::try_from(args).expect_err("missing route should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_ROUTE);
            assert_eq!(env, ENV_SCORE_ROUTE);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_score_without_request_errors() {
    let err = ScoreConfig::try_from(ScoreArgs::default()).expect_err("missing request");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_REQUEST);
            assert_eq!(env, ENV_SCORE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn execute_score_reports_orderings_tried() {
    let (_tmp, root) = workspace();
    let config = ScoreConfig {
        request_path: root.join("request.json"),
        route_path: root.join("route.json"),
        engine: DeviationEngineConfig::default(),
    };
    let request = vilnius_to_kaunas().with_via_points([Coord { x: 24.6, y: 54.8 }]);
    write_json(&config.request_path, &request);
    write_json(&config.route_path, &two_rider_route());

    let report = execute_score(&config).expect("score should succeed");
    assert_eq!(report.orderings_evaluated, 2);
    assert!(!report.truncated);
    assert_eq!(report.best_ordering.len(), 2);
    assert!(report.endpoint_km.abs() < 1e-9);
}

#[rstest]
fn execute_score_honours_the_cap() {
    let (_tmp, root) = workspace();
    let config = ScoreConfig {
        request_path: root.join("request.json"),
        route_path: root.join("route.json"),
        engine: DeviationEngineConfig {
            max_interleavings: NonZeroUsize::MIN,
        },
    };
    let request = vilnius_to_kaunas().with_via_points([Coord { x: 24.6, y: 54.8 }]);
    write_json(&config.request_path, &request);
    write_json(&config.route_path, &two_rider_route());

    let report = execute_score(&config).expect("score should succeed");
    assert_eq!(report.orderings_evaluated, 1);
    assert!(report.truncated);
}

#[rstest]
fn run_score_prints_report() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    let route_path = root.join("route.json");
    write_json(&request_path, &vilnius_to_kaunas());
    write_json(&route_path, &two_rider_route());

    let args = ScoreArgs {
        request_path: Some(request_path),
        route: Some(route_path),
        max_interleavings: None,
    };
    let mut stdout = Vec::new();
    run_score_with(args, &mut stdout).expect("score should succeed");

    let report: DeviationReport =
        serde_json::from_slice(&stdout).expect("output should be a JSON report");
    assert!(report.total_km.abs() < 1e-9);
}

#[rstest]
fn run_score_rejects_a_route_array() {
    let (_tmp, root) = workspace();
    let request_path = root.join("request.json");
    let route_path = root.join("route.json");
    write_json(&request_path, &vilnius_to_kaunas());
    write_utf8(&route_path, b"[]");

    let args = ScoreArgs {
        request_path: Some(request_path),
        route: Some(route_path.clone()),
        max_interleavings: None,
    };
    let err = run_score_with(args, &mut Vec::new()).expect_err("array is not a route");
    match err {
        CliError::ParseInput { field, path, .. } => {
            assert_eq!(field, ARG_ROUTE);
            assert_eq!(path, route_path);
        }
        other => panic!("expected ParseInput, found {other:?}"),
    }
}
