//! Core route annotation for the Helios engine.
//!
//! The crate turns a set of candidate driving routes for one trip into
//! [`AnnotatedRoute`] records: each route's geometry is compressed into an
//! encoded polyline and its comparative risk is scored on a `1.0..=10.0`
//! scale relative to the other candidates in the same request.
//!
//! Nothing in this crate performs I/O. Directions and weather data arrive
//! through the [`DirectionsProvider`] and [`WeatherProvider`] capabilities,
//! which callers implement (see `helios-data` for HTTP adapters).
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use helios_core::{CandidateRoute, HazardZones, NoWeather, RiskScorer, annotate_routes};
//!
//! let routes = vec![
//!     CandidateRoute::new(
//!         vec![Coord { x: -120.2, y: 38.5 }, Coord { x: -120.95, y: 40.7 }],
//!         1_200.0,
//!         300.0,
//!     ),
//!     CandidateRoute::new(vec![Coord { x: -120.2, y: 38.5 }], 4_800.0, 900.0),
//! ];
//! let scorer = RiskScorer::new(NoWeather, HazardZones::empty());
//! let annotated = annotate_routes(&routes, &scorer)?;
//!
//! assert_eq!(annotated.len(), 2);
//! assert_eq!(annotated[0].risk_score, 1.0);
//! assert_eq!(annotated[1].risk_score, 10.0);
//! # Ok::<(), helios_core::AnnotateError>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod annotate;
pub mod directions;
pub mod hazard;
pub mod normalise;
pub mod polyline;
pub mod risk;
pub mod route;
pub mod weather;

#[doc(hidden)]
pub mod test_support;

pub use annotate::{AnnotateError, AnnotationPipeline, annotate_routes};
pub use directions::{DirectionsError, DirectionsProvider, TripRequest};
pub use hazard::{DEFAULT_HAZARD_RADIUS_DEGREES, HazardZone, HazardZones};
pub use normalise::normalise_scores;
pub use polyline::{PolylineError, decode, encode};
pub use risk::{RiskScorer, RiskWeights, RouteScorer};
pub use route::{AnnotatedRoute, CandidateRoute};
pub use weather::{NoWeather, WeatherCondition, WeatherError, WeatherProvider};
