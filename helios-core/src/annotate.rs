//! Turn candidate routes into annotated routes.
//!
//! Annotation runs in two phases. Every retained route is first encoded and
//! given a raw score, in parallel because weather lookups may block. Only
//! once the whole set is known are the scores normalised and attached to the
//! encoded geometry.
//!
//! Routes without geometry are dropped before scoring and do not influence
//! normalisation of the rest.

use rayon::prelude::*;
use thiserror::Error;

use crate::{
    AnnotatedRoute, CandidateRoute, DirectionsError, DirectionsProvider, RouteScorer, TripRequest,
    normalise_scores, polyline,
};

/// Errors returned while annotating a request's routes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnnotateError {
    /// No candidate route with geometry was available.
    #[error("no routes available")]
    NoRoutes,
    /// The directions provider failed.
    #[error("failed to fetch candidate routes: {0}")]
    Directions(#[from] DirectionsError),
}

/// Annotate `routes` with encoded geometry and normalised risk.
///
/// Output order follows input order with empty-geometry routes removed.
///
/// # Errors
/// Returns [`AnnotateError::NoRoutes`] when `routes` is empty or none of
/// them has geometry.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use helios_core::{AnnotateError, CandidateRoute, HazardZones, NoWeather, RiskScorer};
/// use helios_core::annotate_routes;
///
/// let scorer = RiskScorer::new(NoWeather, HazardZones::empty());
/// let empty = CandidateRoute::new(Vec::new(), 100.0, 10.0);
///
/// assert_eq!(annotate_routes(&[empty], &scorer), Err(AnnotateError::NoRoutes));
/// ```
pub fn annotate_routes<S>(
    routes: &[CandidateRoute],
    scorer: &S,
) -> Result<Vec<AnnotatedRoute>, AnnotateError>
where
    S: RouteScorer + ?Sized,
{
    let retained: Vec<&CandidateRoute> = routes
        .iter()
        .enumerate()
        .filter_map(|(index, route)| {
            if route.has_geometry() {
                Some(route)
            } else {
                log::debug!("dropping candidate route {index}: no geometry");
                None
            }
        })
        .collect();
    if retained.is_empty() {
        return Err(AnnotateError::NoRoutes);
    }

    let (encoded, raw_scores): (Vec<String>, Vec<f64>) = retained
        .par_iter()
        .map(|route| (polyline::encode(&route.geometry), scorer.raw_score(route)))
        .unzip();
    let normalised = normalise_scores(&raw_scores);
    log::debug!(
        "annotated {} of {} candidate routes",
        encoded.len(),
        routes.len()
    );

    Ok(encoded
        .into_iter()
        .zip(normalised)
        .map(|(encoded_geometry, risk_score)| AnnotatedRoute {
            encoded_geometry,
            risk_score,
        })
        .collect())
}

/// Fetch candidate routes for a trip and annotate them.
///
/// The pipeline is generic over its two boundaries: the directions provider
/// that proposes routes and the scorer that rates them.
#[derive(Debug)]
pub struct AnnotationPipeline<D, S>
where
    D: DirectionsProvider,
    S: RouteScorer,
{
    directions: D,
    scorer: S,
}

impl<D, S> AnnotationPipeline<D, S>
where
    D: DirectionsProvider,
    S: RouteScorer,
{
    /// Construct a pipeline from its collaborators.
    pub const fn new(directions: D, scorer: S) -> Self {
        Self { directions, scorer }
    }

    /// Scorer used by this pipeline.
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Fetch and annotate the candidate routes for `request`.
    ///
    /// # Errors
    /// Returns [`AnnotateError::Directions`] when the provider fails and
    /// [`AnnotateError::NoRoutes`] when it yields no usable route.
    pub fn run(&self, request: &TripRequest) -> Result<Vec<AnnotatedRoute>, AnnotateError> {
        let routes = self.directions.candidate_routes(request)?;
        annotate_routes(&routes, &self.scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    use crate::test_support::{DistanceScorer, StubDirectionsProvider};
    use crate::{HazardZones, NoWeather, RiskScorer};

    fn route_with(points: u32, distance: f64) -> CandidateRoute {
        let geometry = (0..points)
            .map(|i| Coord {
                x: f64::from(i) * 0.01,
                y: 51.5,
            })
            .collect();
        CandidateRoute::new(geometry, distance, 60.0)
    }

    #[fixture]
    fn request() -> TripRequest {
        TripRequest::new(Coord { x: 0.0, y: 51.5 }, Coord { x: 0.1, y: 51.5 })
    }

    #[rstest]
    fn keeps_order_and_bounds() {
        let routes = vec![route_with(3, 500.0), route_with(2, 9_000.0), route_with(4, 2_000.0)];
        let scorer = RiskScorer::new(NoWeather, HazardZones::empty());

        let annotated = annotate_routes(&routes, &scorer).expect("routes annotate");

        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[0].risk_score, 1.0);
        assert_eq!(annotated[1].risk_score, 10.0);
        assert!(annotated[2].risk_score > 1.0 && annotated[2].risk_score < 10.0);
        for (route, result) in routes.iter().zip(&annotated) {
            assert_eq!(result.encoded_geometry, polyline::encode(&route.geometry));
        }
    }

    #[rstest]
    fn empty_geometry_is_dropped_before_normalising() {
        let routes = vec![route_with(2, 2.0), route_with(0, 100.0), route_with(2, 8.0)];
        let scorer = DistanceScorer;

        let annotated = annotate_routes(&routes, &scorer).expect("routes annotate");

        let scores: Vec<f64> = annotated.iter().map(|route| route.risk_score).collect();
        assert_eq!(scores, vec![1.0, 10.0]);
    }

    #[rstest]
    fn single_route_scores_one() {
        let scorer = RiskScorer::new(NoWeather, HazardZones::empty());
        let annotated = annotate_routes(&[route_with(2, 1_000.0)], &scorer).expect("annotate");
        assert_eq!(annotated[0].risk_score, 1.0);
    }

    #[rstest]
    #[case(Vec::new())]
    #[case(vec![route_with(0, 10.0), route_with(0, 20.0)])]
    fn no_usable_routes_is_an_error(#[case] routes: Vec<CandidateRoute>) {
        let scorer = RiskScorer::new(NoWeather, HazardZones::empty());
        assert_eq!(annotate_routes(&routes, &scorer), Err(AnnotateError::NoRoutes));
    }

    #[rstest]
    fn pipeline_annotates_provider_routes(request: TripRequest) {
        let directions =
            StubDirectionsProvider::with_routes(vec![route_with(2, 100.0), route_with(3, 900.0)]);
        let pipeline =
            AnnotationPipeline::new(directions, RiskScorer::new(NoWeather, HazardZones::empty()));

        let annotated = pipeline.run(&request).expect("pipeline runs");

        assert_eq!(annotated.len(), 2);
    }

    #[rstest]
    fn pipeline_surfaces_directions_failure(request: TripRequest) {
        let error = DirectionsError::NetworkError {
            url: "http://directions.test/v2/directions/driving-car/geojson".to_owned(),
            message: "connection refused".to_owned(),
        };
        let pipeline = AnnotationPipeline::new(
            StubDirectionsProvider::with_error(error.clone()),
            RiskScorer::new(NoWeather, HazardZones::empty()),
        );

        assert_eq!(pipeline.run(&request), Err(AnnotateError::Directions(error)));
    }
}
