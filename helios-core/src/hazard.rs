//! Static hazard zones and proximity queries.
//!
//! A hazard zone is a single centre point. A route is "near" a zone when any
//! of its points lies within [`HazardZones::radius_degrees`] of the centre,
//! measured as planar Euclidean distance in degree space. This is a coarse
//! approximation of ground distance and is kept deliberately so scores stay
//! comparable with earlier releases.
//!
//! Tables are immutable once built and can be shared across threads.

use geo::Coord;
use rstar::{AABB, PointDistance, RTree, RTreeObject};

/// Proximity threshold applied when no radius is configured, in degrees.
pub const DEFAULT_HAZARD_RADIUS_DEGREES: f64 = 0.05;

/// Centres of the built-in hazard table as `(longitude, latitude)`.
const BUILTIN_CENTERS: [(f64, f64); 4] = [
    (76.3869, 30.3398),
    (76.4019, 30.3555),
    (76.3700, 30.3250),
    (76.7794, 30.7333),
];

/// A hazardous location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardZone {
    /// Zone centre (`x = longitude`, `y = latitude`).
    pub center: Coord<f64>,
}

impl HazardZone {
    /// Construct a zone centred on `(longitude, latitude)`.
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            center: Coord {
                x: longitude,
                y: latitude,
            },
        }
    }
}

impl RTreeObject for HazardZone {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.center.x, self.center.y])
    }
}

impl PointDistance for HazardZone {
    #[expect(
        clippy::float_arithmetic,
        reason = "squared planar distance in degree space"
    )]
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.center.x - point[0];
        let dy = self.center.y - point[1];
        dx * dx + dy * dy
    }
}

/// Read-only table of hazard zones with a shared proximity radius.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use helios_core::{HazardZone, HazardZones};
///
/// let zones = HazardZones::new([HazardZone::new(76.3869, 30.3398)]);
///
/// assert!(zones.is_near(Coord { x: 76.40, y: 30.35 }));
/// assert!(!zones.is_near(Coord { x: 76.50, y: 30.35 }));
/// ```
#[derive(Debug, Clone)]
pub struct HazardZones {
    index: RTree<HazardZone>,
    radius_degrees: f64,
}

impl HazardZones {
    /// Build a table from `zones` using [`DEFAULT_HAZARD_RADIUS_DEGREES`].
    #[must_use]
    pub fn new<I>(zones: I) -> Self
    where
        I: IntoIterator<Item = HazardZone>,
    {
        Self {
            index: RTree::bulk_load(zones.into_iter().collect()),
            radius_degrees: DEFAULT_HAZARD_RADIUS_DEGREES,
        }
    }

    /// Build a table with no zones; no route is ever near a hazard.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// The table compiled into the engine.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CENTERS
                .iter()
                .map(|&(longitude, latitude)| HazardZone::new(longitude, latitude)),
        )
    }

    /// Replace the proximity radius. Negative radii are treated as zero.
    #[must_use]
    pub fn with_radius(mut self, radius_degrees: f64) -> Self {
        self.radius_degrees = radius_degrees.max(0.0);
        self
    }

    /// Proximity radius in degrees.
    #[must_use]
    pub const fn radius_degrees(&self) -> f64 {
        self.radius_degrees
    }

    /// Number of zones in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.size()
    }

    /// Report whether the table has no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }

    /// Iterate over the zones in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &HazardZone> {
        self.index.iter()
    }

    /// Report whether `point` lies within the radius of any zone.
    ///
    /// The boundary is inclusive.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the R*-tree is queried with a squared radius"
    )]
    pub fn is_near(&self, point: Coord<f64>) -> bool {
        let squared_radius = self.radius_degrees * self.radius_degrees;
        self.index
            .locate_within_distance([point.x, point.y], squared_radius)
            .next()
            .is_some()
    }

    /// Report whether any point of `geometry` is near a zone.
    ///
    /// Stops at the first matching point.
    #[must_use]
    pub fn touches(&self, geometry: &[Coord<f64>]) -> bool {
        !self.is_empty() && geometry.iter().any(|&point| self.is_near(point))
    }
}

impl Default for HazardZones {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<HazardZone> for HazardZones {
    fn from_iter<I: IntoIterator<Item = HazardZone>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn single_zone() -> HazardZones {
        HazardZones::new([HazardZone::new(10.0, 20.0)])
    }

    #[rstest]
    #[case(Coord { x: 10.0, y: 20.0 }, true)]
    #[case(Coord { x: 10.03, y: 20.03 }, true)]
    #[case(Coord { x: 10.04, y: 20.04 }, false)]
    #[case(Coord { x: 10.0, y: 20.06 }, false)]
    fn proximity_uses_planar_degree_distance(
        single_zone: HazardZones,
        #[case] point: Coord<f64>,
        #[case] expected: bool,
    ) {
        assert_eq!(single_zone.is_near(point), expected);
    }

    #[rstest]
    fn radius_boundary_is_inclusive() {
        let zones = HazardZones::new([HazardZone::new(0.0, 0.0)]).with_radius(0.5);
        assert!(zones.is_near(Coord { x: 0.5, y: 0.0 }));
        assert!(!zones.is_near(Coord { x: 0.500_001, y: 0.0 }));
    }

    #[rstest]
    fn touches_any_point_of_geometry(single_zone: HazardZones) {
        let geometry = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 10.01, y: 19.99 },
            Coord { x: 30.0, y: 30.0 },
        ];
        assert!(single_zone.touches(&geometry));
        assert!(!single_zone.touches(&geometry[..1]));
        assert!(!single_zone.touches(&[]));
    }

    #[rstest]
    fn empty_table_never_matches() {
        let zones = HazardZones::empty();
        assert!(zones.is_empty());
        assert!(!zones.touches(&[Coord { x: 0.0, y: 0.0 }]));
    }

    #[rstest]
    fn builtin_table_uses_default_radius() {
        let zones = HazardZones::builtin();
        assert_eq!(zones.len(), BUILTIN_CENTERS.len());
        assert!((zones.radius_degrees() - DEFAULT_HAZARD_RADIUS_DEGREES).abs() < f64::EPSILON);
    }

    #[rstest]
    fn negative_radius_is_clamped() {
        let zones = HazardZones::new([HazardZone::new(1.0, 1.0)]).with_radius(-1.0);
        assert!(zones.is_near(Coord { x: 1.0, y: 1.0 }));
        assert!(!zones.is_near(Coord { x: 1.0, y: 1.000_01 }));
    }
}
