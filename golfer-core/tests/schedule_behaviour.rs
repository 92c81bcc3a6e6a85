//! Behavioural tests for `Schedule` using rstest-bdd.

use std::cell::RefCell;

use golfer_core::{Move, Schedule, Score, SolveRequestValidationError};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Debug, Default)]
struct ScheduleWorld {
    schedule: RefCell<Option<Schedule>>,
    remembered: RefCell<Option<Schedule>>,
    moves: RefCell<Vec<Move>>,
    request: RefCell<(u8, u8)>,
}

impl ScheduleWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn with_schedule<T>(&self, f: impl FnOnce(&mut Schedule) -> T) -> T {
        let mut slot = self.schedule.borrow_mut();
        f(slot.as_mut().expect("schedule should be created first"))
    }

    fn play(&self, step: Move) {
        self.with_schedule(|schedule| {
            assert!(schedule.is_legal(step), "{step} should be legal");
            schedule.apply(step);
        });
        self.moves.borrow_mut().push(step);
    }
}

#[fixture]
fn world() -> ScheduleWorld {
    ScheduleWorld::default()
}

#[given("an empty schedule for {players} players in groups of {size}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_empty_schedule(world: &ScheduleWorld, players: u8, size: u8) {
    let schedule = Schedule::new(players, size).expect("valid instance");
    world.schedule.replace(Some(schedule));
}

#[given("a request for {players} players in groups of {size}")]
fn given_request(world: &ScheduleWorld, players: u8, size: u8) {
    world.request.replace((players, size));
}

#[when("player {player} opens a group")]
fn when_player_opens_group(world: &ScheduleWorld, player: u8) {
    world.play(Move::OpenGroup(player));
}

#[when("player {player} joins the pending group")]
fn when_player_joins(world: &ScheduleWorld, player: u8) {
    world.play(Move::Append(player));
}

#[when("players {a} and {b} join the pending group")]
fn when_two_players_join(world: &ScheduleWorld, a: u8, b: u8) {
    world.play(Move::Append(a));
    world.play(Move::Append(b));
}

#[when("the pending group is completed by players {a}, {b} and {c}")]
fn when_three_players_join(world: &ScheduleWorld, a: u8, b: u8, c: u8) {
    for player in [a, b, c] {
        world.play(Move::Append(player));
    }
}

#[when("the schedule is remembered")]
fn when_schedule_remembered(world: &ScheduleWorld) {
    let snapshot = world.with_schedule(|schedule| schedule.clone());
    world.remembered.replace(Some(snapshot));
}

#[when("the last two moves are reverted")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_last_two_reverted(world: &ScheduleWorld) {
    for _ in 0..2 {
        let step = world.moves.borrow_mut().pop().expect("a move to revert");
        assert!(world.with_schedule(|schedule| schedule.revert(step)));
    }
}

#[then("the schedule scores {score}")]
fn then_schedule_scores(world: &ScheduleWorld, score: u64) {
    assert_eq!(
        world.with_schedule(|schedule| schedule.score()),
        Score::new(score)
    );
}

#[then("every pair of players has met")]
fn then_every_pair_met(world: &ScheduleWorld) {
    world.with_schedule(|schedule| {
        for a in schedule.players() {
            for b in schedule.players().filter(|b| *b != a) {
                assert!(schedule.has_played(a, b), "{a} and {b} should have met");
            }
        }
    });
}

#[then("player {player} may not join the pending group")]
fn then_player_may_not_join(world: &ScheduleWorld, player: u8) {
    assert!(!world.with_schedule(|schedule| schedule.can_append(player)));
}

#[then("player {player} may join the pending group")]
fn then_player_may_join(world: &ScheduleWorld, player: u8) {
    assert!(world.with_schedule(|schedule| schedule.can_append(player)));
}

#[then("the schedule equals the remembered one")]
fn then_schedule_equals_remembered(world: &ScheduleWorld) {
    let remembered = world.remembered.borrow().clone();
    let current = world.with_schedule(|schedule| schedule.clone());
    assert_eq!(Some(current), remembered);
    assert!(world.with_schedule(|schedule| schedule.played_relation_is_consistent()));
}

#[then("creating the schedule fails with too many players")]
fn then_too_many_players(world: &ScheduleWorld) {
    let (players, size) = *world.request.borrow();
    assert_eq!(
        Schedule::new(players, size),
        Err(SolveRequestValidationError::TooManyPlayers {
            count: players,
            max: 16,
        })
    );
}

#[scenario(path = "tests/features/schedule.feature", index = 0)]
fn filling_a_single_table(world: ScheduleWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/schedule.feature", index = 1)]
fn rematches_are_refused(world: ScheduleWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/schedule.feature", index = 2)]
fn backtracking_restores_schedule(world: ScheduleWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/schedule.feature", index = 3)]
fn oversized_instances_are_rejected(world: ScheduleWorld) {
    let _ = world;
}
