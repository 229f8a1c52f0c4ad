//! Weather condition keywords.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Current weather at a single location.
///
/// Variants follow the condition groups reported by common weather APIs.
/// Unknown keywords are preserved in [`WeatherCondition::Other`].
///
/// # Examples
/// ```
/// use helios_core::WeatherCondition;
///
/// let condition: WeatherCondition = "thunderstorm".parse().unwrap_or(WeatherCondition::Clear);
/// assert_eq!(condition, WeatherCondition::Thunderstorm);
/// assert!(condition.is_adverse());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    /// Clear sky.
    Clear,
    /// Cloud cover without precipitation.
    Clouds,
    /// Rain.
    Rain,
    /// Drizzle.
    Drizzle,
    /// Thunderstorm.
    Thunderstorm,
    /// Snow.
    Snow,
    /// Mist.
    Mist,
    /// Fog.
    Fog,
    /// Haze.
    Haze,
    /// Any other keyword, kept verbatim.
    Other(String),
}

impl WeatherCondition {
    /// Report whether the condition raises driving risk.
    ///
    /// Rain, drizzle, thunderstorms and fog are adverse; everything else,
    /// including unknown keywords, is not.
    #[must_use]
    pub const fn is_adverse(&self) -> bool {
        matches!(
            self,
            Self::Rain | Self::Drizzle | Self::Thunderstorm | Self::Fog
        )
    }
}

impl From<&str> for WeatherCondition {
    fn from(keyword: &str) -> Self {
        let trimmed = keyword.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "clear" => Self::Clear,
            "clouds" => Self::Clouds,
            "rain" => Self::Rain,
            "drizzle" => Self::Drizzle,
            "thunderstorm" => Self::Thunderstorm,
            "snow" => Self::Snow,
            "mist" => Self::Mist,
            "fog" => Self::Fog,
            "haze" => Self::Haze,
            _ => Self::Other(trimmed.to_owned()),
        }
    }
}

impl FromStr for WeatherCondition {
    type Err = Infallible;

    fn from_str(keyword: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(keyword))
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Fog => "Fog",
            Self::Haze => "Haze",
            Self::Other(other) => other.as_str(),
        };
        f.write_str(keyword)
    }
}
