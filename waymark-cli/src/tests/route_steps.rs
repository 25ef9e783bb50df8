//! Behaviour-driven step definitions driving the route CLI scenarios.

use super::helpers::Workspace;
use super::*;
use crate::route::{DefaultRouteOptimizerBuilder, RouteOutput, run_route_with};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct RouteWorld {
    workspace: Workspace,
    include_distances: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RouteWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            include_distances: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "waymark".to_owned(),
            "route".to_owned(),
            self.workspace.places().into_string(),
        ];
        if *self.include_distances.borrow() {
            argv.extend([
                format!("--{ARG_DISTANCES}"),
                self.workspace.distances().into_string(),
            ]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn error(&self) -> String {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        format!("{error:?}")
    }
}

#[fixture]
fn world() -> RouteWorld {
    RouteWorld::new()
}

#[given("places and distances exist on disk")]
fn places_and_distances_exist(#[from(world)] world: &RouteWorld) {
    assert!(world.workspace.places().is_file());
    assert!(world.workspace.distances().is_file());
}

#[given("I start at place {id}")]
fn start_at_place(#[from(world)] world: &RouteWorld, id: u64) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_START_ID}"), id.to_string()]);
}

#[given("I select places {ids}")]
fn select_places(#[from(world)] world: &RouteWorld, ids: String) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_SELECT}"), ids]);
}

#[given("I omit the distances path")]
fn omit_distances_path(#[from(world)] world: &RouteWorld) {
    *world.include_distances.borrow_mut() = false;
}

#[when("I run the route command")]
fn run_route_command(#[from(world)] world: &RouteWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Route(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_route_with(args, &DefaultRouteOptimizerBuilder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints a route through {count} places")]
fn command_succeeds(#[from(world)] world: &RouteWorld, count: usize) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let output: RouteOutput = serde_json::from_str(&stdout).expect("output should be route JSON");
    assert_eq!(output.route.len(), count);
    assert_eq!(output.route.first().map(|w| w.id), Some(1));
}

#[then("the command fails because the distances path is missing")]
fn command_fails_missing_distances(#[from(world)] world: &RouteWorld) {
    let borrowed = world.result.borrow();
    let error = borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect_err("expected error");
    match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_DISTANCES),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the start place is unknown")]
fn command_fails_unknown_start(#[from(world)] world: &RouteWorld) {
    let error = world.error();
    assert!(error.contains("UnknownStart"), "got {error}");
}

macro_rules! register_route_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/route_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RouteWorld) {
            let _ = world;
        }
    };
}

register_route_scenario!(route_happy_path, "planning a route from JSON exports");
register_route_scenario!(route_with_selection, "planning a route through a selection");
register_route_scenario!(route_missing_distances, "rejecting missing distance paths");
register_route_scenario!(route_unknown_start, "rejecting unknown start places");
