//! Weather provider trait and the disabled provider.

use geo::Coord;

use super::{WeatherCondition, WeatherError};

/// Fetch the current weather condition near a coordinate.
///
/// Implementations may block on network I/O. They must be thread-safe so
/// lookups for several candidate routes can run concurrently.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use helios_core::{WeatherCondition, WeatherError, WeatherProvider};
///
/// struct AlwaysRaining;
///
/// impl WeatherProvider for AlwaysRaining {
///     fn current_condition(&self, _at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
///         Ok(WeatherCondition::Rain)
///     }
/// }
///
/// let condition = AlwaysRaining.current_condition(Coord { x: 0.0, y: 51.5 })?;
/// assert!(condition.is_adverse());
/// # Ok::<(), WeatherError>(())
/// ```
pub trait WeatherProvider: Send + Sync {
    /// Return the condition at `at` (`x = longitude`, `y = latitude`).
    ///
    /// # Errors
    /// Returns [`WeatherError`] when the condition is unavailable for any
    /// reason, including an unconfigured service.
    fn current_condition(&self, at: Coord<f64>) -> Result<WeatherCondition, WeatherError>;
}

/// Provider used when weather enrichment is disabled.
///
/// Every lookup reports [`WeatherError::Unconfigured`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWeather;

impl WeatherProvider for NoWeather {
    fn current_condition(&self, _at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
        Err(WeatherError::Unconfigured)
    }
}

impl<T: WeatherProvider + ?Sized> WeatherProvider for &T {
    fn current_condition(&self, at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
        (**self).current_condition(at)
    }
}

impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    fn current_condition(&self, at: Coord<f64>) -> Result<WeatherCondition, WeatherError> {
        (**self).current_condition(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use crate::test_support::StubWeatherProvider;

    #[rstest]
    fn disabled_provider_reports_unconfigured() {
        let result = NoWeather.current_condition(Coord { x: 0.0, y: 0.0 });
        assert_eq!(result, Err(WeatherError::Unconfigured));
    }

    #[rstest]
    fn boxed_provider_delegates() {
        let provider: Box<dyn WeatherProvider> =
            Box::new(StubWeatherProvider::with_condition(WeatherCondition::Fog));
        let condition = provider
            .current_condition(Coord { x: 0.0, y: 0.0 })
            .expect("stub returns a condition");
        assert_eq!(condition, WeatherCondition::Fog);
    }
}
