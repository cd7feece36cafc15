//! Behaviour-driven step definitions driving the search CLI scenarios.

use super::helpers::{candidate_routes, vilnius_to_kaunas, workspace, write_json};
use super::*;
use camino::Utf8PathBuf;
use carpool_core::SearchInput;
use carpool_deviation::RankedRoute;
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

use crate::search::run_search_with;

#[derive(Debug)]
struct SearchWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    routes_path: Utf8PathBuf,
    output_path: Utf8PathBuf,
    include_routes: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SearchWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            request_path: root.join("request.json"),
            routes_path: root.join("routes.json"),
            output_path: root.join("ranking.json"),
            include_routes: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            String::from("carpool"),
            String::from("search"),
            self.request_path.to_string(),
        ];
        if *self.include_routes.borrow() {
            argv.extend([
                format!("--{ARG_ROUTES}"),
                self.routes_path.to_string(),
            ]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> SearchWorld {
    SearchWorld::new()
}

#[given("a rider request from Vilnius to Kaunas exists on disk")]
fn rider_request_exists(#[from(world)] world: &SearchWorld) {
    write_json(&world.request_path, &vilnius_to_kaunas());
}

#[given("the rider request has an out of range latitude")]
fn rider_request_out_of_range(#[from(world)] world: &SearchWorld) {
    let request = SearchInput::new(Coord { x: 25.0, y: -91.0 }, Coord { x: 24.0, y: 54.9 });
    write_json(&world.request_path, &request);
}

#[given("candidate routes exist on disk")]
fn candidate_routes_exist(#[from(world)] world: &SearchWorld) {
    write_json(&world.routes_path, &candidate_routes());
}

#[given("I omit the routes path")]
fn omit_routes_path(#[from(world)] world: &SearchWorld) {
    *world.include_routes.borrow_mut() = false;
}

#[given("I ask for the ranking to be written to a file")]
fn ask_for_output_file(#[from(world)] world: &SearchWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_OUTPUT}"),
        world.output_path.to_string(),
    ]);
}

#[given("I cap stop orderings at 0")]
fn cap_orderings_at_zero(#[from(world)] world: &SearchWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_MAX_INTERLEAVINGS}"), String::from("0")]);
}

#[when("I run the search command")]
fn run_search_command(#[from(world)] world: &SearchWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Search(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_search_with(args, &mut *buffer)
        }
        Command::Score(_) => panic!("expected search command"),
    });
    world.result.replace(Some(outcome));
}

#[then("the command prints routes 1 then 2")]
fn command_prints_ranked_routes(#[from(world)] world: &SearchWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let ranked: Vec<RankedRoute> =
        serde_json::from_str(&stdout).expect("output should be a JSON ranking");
    let ids: Vec<_> = ranked.iter().map(|entry| entry.route.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[then("the ranking file lists 2 routes and nothing is printed")]
fn ranking_file_written(#[from(world)] world: &SearchWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");
    assert!(world.stdout.borrow().is_empty());

    let written = std::fs::read_to_string(&world.output_path).expect("ranking file");
    let ranked: Vec<RankedRoute> = serde_json::from_str(&written).expect("ranking JSON");
    assert_eq!(ranked.len(), 2);
}

#[then("the command fails because the routes path is missing")]
fn command_fails_missing_routes(#[from(world)] world: &SearchWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_ROUTES);
            assert_eq!(*env, ENV_SEARCH_ROUTES);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &SearchWorld) {
    match &*world.error() {
        CliError::InvalidSearch { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected InvalidSearch, found {other:?}"),
    }
}

#[then("the command fails because the ordering cap is zero")]
fn command_fails_zero_cap(#[from(world)] world: &SearchWorld) {
    match &*world.error() {
        CliError::ZeroMaxInterleavings { field } => assert_eq!(*field, ARG_MAX_INTERLEAVINGS),
        other => panic!("expected ZeroMaxInterleavings, found {other:?}"),
    }
}

macro_rules! register_search_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/search_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SearchWorld) {
            let _ = world;
        }
    };
}

register_search_scenario!(search_happy_path, "ranking routes from JSON");
register_search_scenario!(search_output_file, "writing the ranking to a file");
register_search_scenario!(search_missing_routes, "rejecting missing route paths");
register_search_scenario!(search_invalid_request, "rejecting invalid rider requests");
register_search_scenario!(search_zero_cap, "rejecting a zero ordering cap");
