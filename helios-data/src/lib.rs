//! Collaborator adapters for the Helios engine.
//!
//! Responsibilities:
//! - Implement the core capability traits over HTTP (OpenRouteService for
//!   directions, OpenWeatherMap for current conditions).
//! - Load hazard tables and offline candidate-route files from JSON.
//!
//! Boundaries:
//! - Do not encode scoring rules (live in `helios-core`).
//! - Keep the provider traits synchronous; async HTTP is bridged internally.
//!
//! Invariants:
//! - Providers are `Send + Sync` and can be shared across scoring threads.
//! - API keys never appear in error messages or `Debug` output.
#![forbid(unsafe_code)]

mod blocking;
mod files;
pub mod routing;
pub mod weather;

pub use blocking::{DEFAULT_USER_AGENT, ProviderBuildError};
pub use files::{CandidateRoutesError, HazardTableError, load_candidate_routes, load_hazard_zones};
