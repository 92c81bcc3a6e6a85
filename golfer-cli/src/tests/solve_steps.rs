//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::*;
use golfer_core::SolveRequestValidationError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug, Default)]
struct SolveWorld {
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["golfer".to_owned(), "solve".to_owned()];
        argv.extend([format!("--{ARG_MAX_PARALLEL}"), "2".to_owned()]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn push_args<const N: usize>(&self, args: [String; N]) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn stdout(&self) -> String {
        String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8")
    }

    fn expect_error<T>(&self, check: impl FnOnce(&CliError) -> T) -> T {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error)
    }

    fn expect_success(&self) {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::default()
}

#[given("I request {players} players in groups of {size}")]
fn request_instance(#[from(world)] world: &SolveWorld, players: u8, size: u8) {
    world.push_args([
        format!("--{ARG_PLAYERS}"),
        players.to_string(),
        format!("--{ARG_GROUP_SIZE}"),
        size.to_string(),
    ]);
}

#[given("I ask for JSON output")]
fn ask_for_json(#[from(world)] world: &SolveWorld) {
    world.push_args([format!("--{ARG_FORMAT}"), "json".to_owned()]);
}

#[given("I enable dominance pruning")]
fn enable_dominance_pruning(#[from(world)] world: &SolveWorld) {
    world.push_args([format!("--{ARG_PRUNE_DOMINATED_GROUPS}"), "true".to_owned()]);
}

#[given("I omit the player count")]
fn omit_player_count(#[from(world)] world: &SolveWorld) {
    world.push_args([format!("--{ARG_GROUP_SIZE}"), "3".to_owned()]);
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &DefaultSolverBuilder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the schedule {schedule}")]
fn command_prints_schedule(#[from(world)] world: &SolveWorld, schedule: String) {
    world.expect_success();
    let expected = schedule.trim_matches('"');
    let stdout = world.stdout();
    let (_, groups) = stdout
        .split_once("result:\n")
        .expect("output should contain a result section");
    assert_eq!(groups.trim_end(), expected);
}

#[then("the command succeeds and prints a JSON response scoring {score}")]
fn command_prints_json(#[from(world)] world: &SolveWorld, score: u64) {
    world.expect_success();
    let value: serde_json::Value =
        serde_json::from_str(&world.stdout()).expect("output should be JSON solve response");
    assert_eq!(value["score"], score);
    let groups = value["schedule"]["groups"]
        .as_array()
        .expect("groups should be an array");
    assert_eq!(groups.len(), 7);
}

#[then("the command fails because the player count is missing")]
fn command_fails_missing_players(#[from(world)] world: &SolveWorld) {
    world.expect_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAYERS),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the instance is invalid")]
fn command_fails_invalid_instance(#[from(world)] world: &SolveWorld) {
    world.expect_error(|error| match error {
        CliError::InvalidRequest(source) => assert_eq!(
            *source,
            SolveRequestValidationError::TooManyPlayers { count: 17, max: 16 }
        ),
        other => panic!("expected InvalidRequest, found {other:?}"),
    });
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_text_output, "solving an instance with text output");
register_solve_scenario!(solve_json_output, "solving an instance with JSON output");
register_solve_scenario!(solve_missing_players, "rejecting a missing player count");
register_solve_scenario!(solve_oversized_instance, "rejecting oversized instances");
