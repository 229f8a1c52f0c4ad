//! Behavioural tests for loading JSON inputs and annotating them.

use std::cell::RefCell;
use std::fs;

use camino::Utf8PathBuf;
use helios_core::{AnnotatedRoute, HazardZones, NoWeather, RiskScorer, annotate_routes};
use helios_data::{HazardTableError, load_candidate_routes, load_hazard_zones};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::TempDir;

/// Where the hazard table comes from in a scenario.
#[derive(Debug, Default)]
enum HazardSource {
    #[default]
    Builtin,
    File(Utf8PathBuf),
}

/// Scratch directory plus the paths written into it.
struct Workspace {
    dir: TempDir,
    routes: Option<Utf8PathBuf>,
    hazards: HazardSource,
}

impl Workspace {
    fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(self.dir.path().join(name)).expect("utf-8 path");
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

type WorkspaceCell = RefCell<Workspace>;
type OutcomeCell = RefCell<Option<Result<Vec<AnnotatedRoute>, HazardTableError>>>;

#[fixture]
fn workspace() -> WorkspaceCell {
    RefCell::new(Workspace {
        dir: TempDir::new().expect("tempdir"),
        routes: None,
        hazards: HazardSource::default(),
    })
}

#[fixture]
fn outcome() -> OutcomeCell {
    RefCell::new(None)
}

// --- Given steps ---

#[given("a candidate file with one route through a built-in hazard zone")]
fn candidate_file(#[from(workspace)] workspace: &WorkspaceCell) {
    // The first route passes (76.3869, 30.3398); the second stays well east.
    let path = workspace.borrow().write(
        "routes.json",
        r#"[
            {"geometry": [[76.3869, 30.3398], [76.3900, 30.3420]], "distance": 1000.0, "duration": 120.0},
            {"geometry": [[77.5000, 31.5000], [77.5100, 31.5100]], "distance": 1000.0, "duration": 120.0}
        ]"#,
    );
    workspace.borrow_mut().routes = Some(path);
}

#[given("the built-in hazard table")]
fn builtin_table(#[from(workspace)] workspace: &WorkspaceCell) {
    workspace.borrow_mut().hazards = HazardSource::Builtin;
}

#[given("a hazard table file with a single distant zone")]
fn distant_table(#[from(workspace)] workspace: &WorkspaceCell) {
    let path = workspace
        .borrow()
        .write("hazards.json", r#"[{"lon": 0.0, "lat": 0.0}]"#);
    workspace.borrow_mut().hazards = HazardSource::File(path);
}

#[given("a hazard table file with an out-of-range zone")]
fn invalid_table(#[from(workspace)] workspace: &WorkspaceCell) {
    let path = workspace
        .borrow()
        .write("hazards.json", r#"[{"lon": 181.0, "lat": 0.0}]"#);
    workspace.borrow_mut().hazards = HazardSource::File(path);
}

// --- When steps ---

#[when("I load and annotate the candidates")]
fn load_and_annotate(
    #[from(workspace)] workspace: &WorkspaceCell,
    #[from(outcome)] outcome: &OutcomeCell,
) {
    let state = workspace.borrow();
    let routes_path = state.routes.as_ref().expect("candidate file written");
    let routes = load_candidate_routes(routes_path).expect("candidates load");
    let table = match &state.hazards {
        HazardSource::Builtin => Ok(HazardZones::builtin()),
        HazardSource::File(path) => load_hazard_zones(path),
    };
    *outcome.borrow_mut() = Some(table.map(|zones| {
        annotate_routes(&routes, &RiskScorer::new(NoWeather, zones)).expect("routes annotate")
    }));
}

// --- Then steps ---

fn first_score(outcome: &OutcomeCell) -> f64 {
    let borrowed = outcome.borrow();
    let annotated = borrowed
        .as_ref()
        .expect("annotation must have run")
        .as_ref()
        .expect("expected annotated routes");
    assert_eq!(annotated.len(), 2, "expected both routes to be annotated");
    annotated[0].risk_score
}

#[then("the route through the hazard zone scores 10")]
fn hazard_route_scores_ten(#[from(outcome)] outcome: &OutcomeCell) {
    assert_eq!(first_score(outcome), 10.0);
}

#[then("the route through the hazard zone scores 1")]
fn hazard_route_scores_one(#[from(outcome)] outcome: &OutcomeCell) {
    assert_eq!(first_score(outcome), 1.0);
}

#[then("a hazard table error is reported")]
fn hazard_table_error(#[from(outcome)] outcome: &OutcomeCell) {
    let borrowed = outcome.borrow();
    assert!(
        matches!(&*borrowed, Some(Err(HazardTableError::InvalidZone { .. }))),
        "expected InvalidZone, got {borrowed:?}"
    );
}

// --- Scenario registrations ---

macro_rules! register_scenario {
    ($fn_name:ident, $title:literal) => {
        #[scenario(path = "tests/features/offline_annotation.feature", name = $title)]
        fn $fn_name(workspace: WorkspaceCell, outcome: OutcomeCell) {
            let _ = (workspace, outcome);
        }
    };
}

register_scenario!(
    annotating_with_builtin_hazards,
    "annotating a candidate file against the built-in hazard table"
);
register_scenario!(
    annotating_with_custom_hazards,
    "annotating a candidate file against a custom hazard table"
);
register_scenario!(
    rejecting_malformed_hazards,
    "rejecting a malformed hazard table"
);
