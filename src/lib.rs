//! Facade crate for the Helios route annotation engine.
//!
//! This crate re-exports the core domain types and exposes the HTTP and file
//! adapters behind the `http` feature.

#![forbid(unsafe_code)]

pub use helios_core::{
    AnnotateError, AnnotatedRoute, AnnotationPipeline, CandidateRoute, DirectionsError,
    DirectionsProvider, HazardZone, HazardZones, NoWeather, PolylineError, RiskScorer,
    RiskWeights, RouteScorer, TripRequest, WeatherCondition, WeatherError, WeatherProvider,
    annotate_routes, normalise_scores, polyline,
};

#[cfg(feature = "http")]
pub use helios_data::{
    load_candidate_routes, load_hazard_zones,
    routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig},
    weather::{HttpWeatherProvider, HttpWeatherProviderConfig},
};
