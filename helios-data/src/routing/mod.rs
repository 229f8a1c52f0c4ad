//! HTTP directions provider backed by OpenRouteService.
//!
//! [`HttpDirectionsProvider`] implements [`helios_core::DirectionsProvider`]
//! by requesting GeoJSON alternatives from the ORS directions endpoint and
//! turning every returned feature into a [`helios_core::CandidateRoute`].
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use helios_core::{DirectionsProvider, TripRequest};
//! use helios_data::routing::{HttpDirectionsProvider, HttpDirectionsProviderConfig};
//!
//! let config = HttpDirectionsProviderConfig::new("ors-api-key").with_profile("driving-hgv");
//! let provider = HttpDirectionsProvider::with_config(config)?;
//!
//! let request = TripRequest::new(Coord { x: 76.38, y: 30.33 }, Coord { x: 76.78, y: 30.73 });
//! let routes = provider.candidate_routes(&request)?;
//! println!("{} alternatives", routes.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ors;
mod provider;

pub use provider::{
    DEFAULT_ORS_BASE_URL, DEFAULT_PROFILE, HttpDirectionsProvider, HttpDirectionsProviderConfig,
};
