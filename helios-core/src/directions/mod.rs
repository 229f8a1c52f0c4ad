//! Fetch candidate routes for a trip.
//!
//! The `DirectionsProvider` trait abstracts the routing service that
//! proposes alternative routes between two points. Callers supply a
//! [`TripRequest`] and receive [`CandidateRoute`](crate::CandidateRoute)
//! values in the provider's preference order.

mod error;
mod provider;

pub use error::DirectionsError;
pub use provider::{DirectionsProvider, TripRequest};
