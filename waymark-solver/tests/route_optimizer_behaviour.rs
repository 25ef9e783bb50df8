//! Behavioural tests for `RouteOptimizer` using rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use waymark_core::test_support::{line_instance, unit_square, waypoint};
use waymark_core::{
    DistanceTable, OptimizeError, OptimizeRequest, OptimizeResponse, Optimizer, Strategy,
    Waypoint,
};
use waymark_solver::{OptimizerConfig, RouteOptimizer};

#[derive(Debug, Default)]
struct OptimizerWorld {
    places: RefCell<Vec<Waypoint>>,
    table: RefCell<DistanceTable>,
    config: RefCell<OptimizerConfig>,
    outcome: RefCell<Option<Result<OptimizeResponse, OptimizeError>>>,
}

impl OptimizerWorld {
    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_outcome(&self) -> Result<OptimizeResponse, OptimizeError> {
        self.outcome
            .borrow()
            .clone()
            .expect("outcome should be recorded before assertions")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn expect_response(&self) -> OptimizeResponse {
        self.expect_outcome().expect("expected optimization success")
    }
}

#[fixture]
fn world() -> OptimizerWorld {
    OptimizerWorld::default()
}

#[given("the corners of a unit square")]
fn given_unit_square(world: &OptimizerWorld) {
    let (corners, table) = unit_square();
    world.places.replace(corners);
    world.table.replace(table);
}

#[given("the corners of a unit square without the pair {a} and {b}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn given_unit_square_without(world: &OptimizerWorld, a: u64, b: u64) {
    let (corners, full) = unit_square();
    let mut pruned = DistanceTable::new();
    for ((from, to), km) in full.iter() {
        let dropped = (from, to) == (a, b) || (from, to) == (b, a);
        if !dropped && from < to {
            pruned.insert(from, to, km).expect("valid table entry");
        }
    }
    world.places.replace(corners);
    world.table.replace(pruned);
}

#[given("waypoints on a line at positions {first} and {second}")]
fn given_line(world: &OptimizerWorld, first: f64, second: f64) {
    let (places, table) = line_instance(&[(1, first), (2, second)]);
    world.places.replace(places);
    world.table.replace(table);
}

#[given("an exact threshold of {threshold}")]
fn given_threshold(world: &OptimizerWorld, threshold: usize) {
    world.config.borrow_mut().exact_threshold = threshold;
}

#[when("the route optimizer runs from waypoint {id}")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn when_optimizer_runs(world: &OptimizerWorld, id: u64) {
    let places = world.places.borrow();
    let start = places
        .iter()
        .find(|w| w.id == id)
        .cloned()
        .unwrap_or_else(|| waypoint(id));
    let optimizer =
        RouteOptimizer::with_config(world.config.borrow().clone()).expect("valid config");
    let outcome = optimizer.optimize(&OptimizeRequest::new(&places, &start, &world.table.borrow()));
    world.outcome.replace(Some(outcome));
}

#[then("the route starts at waypoint {id}")]
fn then_starts_at(world: &OptimizerWorld, id: u64) {
    let response = world.expect_response();
    assert_eq!(response.route.start().map(|w| w.id), Some(id));
}

#[then("the route visits {count} waypoints")]
fn then_visits(world: &OptimizerWorld, count: usize) {
    assert_eq!(world.expect_response().route.len(), count);
}

#[then("the route measures {km} kilometres")]
fn then_measures(world: &OptimizerWorld, km: f64) {
    let measured = world.expect_response().route.total_distance_km();
    assert!((measured - km).abs() < 1e-9, "got {measured} km");
}

#[then("the exact strategy was used")]
fn then_exact(world: &OptimizerWorld) {
    assert_eq!(world.expect_response().strategy, Strategy::Exact);
}

#[then("the heuristic strategy was used")]
fn then_heuristic(world: &OptimizerWorld) {
    assert_eq!(world.expect_response().strategy, Strategy::Heuristic);
}

#[then("the optimization fails for lack of a distance")]
#[expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]
fn then_missing_distance(world: &OptimizerWorld) {
    let err = world
        .expect_outcome()
        .expect_err("expected a missing distance");
    assert!(matches!(err, OptimizeError::Distance(_)), "got {err}");
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 0)]
fn square_perimeter(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 1)]
fn heuristic_fallback(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 2)]
fn single_stop(world: OptimizerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/route_optimizer.feature", index = 3)]
fn missing_distance(world: OptimizerWorld) {
    let _ = world;
}
