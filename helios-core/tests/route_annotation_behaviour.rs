//! Behavioural tests for [`annotate_routes`].
//!
//! Weather is supplied through [`StubWeatherProvider`] so no scenario needs
//! network access.

use std::cell::RefCell;

use geo::Coord;
use helios_core::test_support::StubWeatherProvider;
use helios_core::{
    AnnotateError, AnnotatedRoute, CandidateRoute, HazardZone, HazardZones, NoWeather, RiskScorer,
    WeatherError, annotate_routes,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

type RoutesCell = RefCell<Vec<CandidateRoute>>;
type WeatherCell = RefCell<Option<StubWeatherProvider>>;
type HazardsCell = RefCell<HazardZones>;
type ResultCell = RefCell<Option<Result<Vec<AnnotatedRoute>, AnnotateError>>>;

#[fixture]
fn routes() -> RoutesCell {
    RefCell::new(Vec::new())
}

#[fixture]
fn weather() -> WeatherCell {
    RefCell::new(None)
}

#[fixture]
fn hazards() -> HazardsCell {
    RefCell::new(HazardZones::empty())
}

#[fixture]
fn result() -> ResultCell {
    RefCell::new(None)
}

fn short_route() -> CandidateRoute {
    CandidateRoute::new(
        vec![Coord { x: 76.3869, y: 30.3398 }, Coord { x: 76.3950, y: 30.3450 }],
        1_000.0,
        120.0,
    )
}

fn long_route() -> CandidateRoute {
    CandidateRoute::new(
        vec![
            Coord { x: 76.3869, y: 30.3398 },
            Coord { x: 76.5000, y: 30.4000 },
            Coord { x: 76.4100, y: 30.3600 },
        ],
        5_000.0,
        600.0,
    )
}

fn borrowed_scores(result: &ResultCell) -> Vec<f64> {
    let borrowed = result.borrow();
    let annotated = borrowed
        .as_ref()
        .expect("annotation must have run")
        .as_ref()
        .expect("expected annotated routes");
    annotated.iter().map(|route| route.risk_score).collect()
}

// --- Given steps ---

#[given("three candidate routes where the second has no geometry")]
fn three_routes_one_empty(#[from(routes)] routes: &RoutesCell) {
    *routes.borrow_mut() = vec![
        short_route(),
        CandidateRoute::new(Vec::new(), 2_500.0, 300.0),
        long_route(),
    ];
}

#[given("a short and a long candidate route")]
fn short_and_long(#[from(routes)] routes: &RoutesCell) {
    *routes.borrow_mut() = vec![short_route(), long_route()];
}

#[given("candidate routes that all lack geometry")]
fn all_empty(#[from(routes)] routes: &RoutesCell) {
    *routes.borrow_mut() = vec![
        CandidateRoute::new(Vec::new(), 1_000.0, 120.0),
        CandidateRoute::new(Vec::new(), 5_000.0, 600.0),
    ];
}

#[given("a hazard zone at the end of the short route")]
fn hazard_near_short(#[from(hazards)] hazards: &HazardsCell) {
    *hazards.borrow_mut() = HazardZones::new([HazardZone::new(76.3950, 30.3450)]).with_radius(0.001);
}

#[given("a weather service that times out")]
fn weather_times_out(#[from(weather)] weather: &WeatherCell) {
    *weather.borrow_mut() = Some(StubWeatherProvider::with_error(WeatherError::Timeout {
        url: "http://weather.test/data/2.5/weather".to_owned(),
        timeout_secs: 5,
    }));
}

// --- When steps ---

#[when("I annotate the routes")]
fn annotate(
    #[from(routes)] routes: &RoutesCell,
    #[from(weather)] weather: &WeatherCell,
    #[from(hazards)] hazards: &HazardsCell,
    #[from(result)] result: &ResultCell,
) {
    let candidates = routes.borrow();
    let table = hazards.borrow().clone();
    let outcome = match weather.borrow_mut().take() {
        Some(stub) => annotate_routes(&candidates, &RiskScorer::new(stub, table)),
        None => annotate_routes(&candidates, &RiskScorer::new(NoWeather, table)),
    };
    *result.borrow_mut() = Some(outcome);
}

// --- Then steps ---

#[then("two annotated routes are returned")]
fn two_returned(#[from(result)] result: &ResultCell) {
    assert_eq!(borrowed_scores(result).len(), 2);
}

#[then("every risk score lies between 1 and 10")]
fn scores_in_range(#[from(result)] result: &ResultCell) {
    let scores = borrowed_scores(result);
    assert!(
        scores.iter().all(|score| (1.0..=10.0).contains(score)),
        "scores out of range: {scores:?}"
    );
}

#[then("the first route scores 1 and the second scores 10")]
fn short_is_safest(#[from(result)] result: &ResultCell) {
    assert_eq!(borrowed_scores(result), vec![1.0, 10.0]);
}

#[then("the first route scores 10 and the second scores 1")]
fn short_is_riskiest(#[from(result)] result: &ResultCell) {
    assert_eq!(borrowed_scores(result), vec![10.0, 1.0]);
}

#[then("the scores match annotation without weather")]
fn matches_without_weather(
    #[from(routes)] routes: &RoutesCell,
    #[from(result)] result: &ResultCell,
) {
    let baseline = annotate_routes(
        &routes.borrow(),
        &RiskScorer::new(NoWeather, HazardZones::empty()),
    )
    .expect("baseline annotation");
    let borrowed = result.borrow();
    let annotated = borrowed
        .as_ref()
        .expect("annotation must have run")
        .as_ref()
        .expect("expected annotated routes");
    assert_eq!(annotated, &baseline);
}

#[then("no routes available is reported")]
fn no_routes(#[from(result)] result: &ResultCell) {
    let borrowed = result.borrow();
    assert!(
        matches!(&*borrowed, Some(Err(AnnotateError::NoRoutes))),
        "expected NoRoutes, got {borrowed:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/route_annotation.feature", name = $title)]
        fn $fn_name(
            routes: RoutesCell,
            weather: WeatherCell,
            hazards: HazardsCell,
            result: ResultCell,
        ) {
            let _ = (routes, weather, hazards, result);
        }
    };
}

register_scenario!(
    dropping_empty_geometry,
    "dropping a candidate without geometry"
);
register_scenario!(ranking_by_length, "ranking routes by length");
register_scenario!(
    penalising_hazard_proximity,
    "penalising a route near a hazard zone"
);
register_scenario!(
    ignoring_weather_timeout,
    "ignoring a weather service that times out"
);
register_scenario!(
    reporting_no_routes,
    "reporting when no route has geometry"
);
