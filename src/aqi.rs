//! AQI Severity Bands
//!
//! The six EPA-style severity bands and their display colors. This is the
//! single local definition of the thresholds; the prediction service sends
//! its own `level`/`color` and the display prefers those when present,
//! falling back to this table.

/// Severity band for an AQI score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AqiBand {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// All bands in ascending severity order, for rendering the legend.
pub const ALL_BANDS: [AqiBand; 6] = [
    AqiBand::Good,
    AqiBand::Moderate,
    AqiBand::UnhealthySensitive,
    AqiBand::Unhealthy,
    AqiBand::VeryUnhealthy,
    AqiBand::Hazardous,
];

impl AqiBand {
    /// Classify an AQI score. Total over all inputs; scores above 300
    /// (and any non-finite garbage) land in `Hazardous`.
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            AqiBand::Good
        } else if aqi <= 100.0 {
            AqiBand::Moderate
        } else if aqi <= 150.0 {
            AqiBand::UnhealthySensitive
        } else if aqi <= 200.0 {
            AqiBand::Unhealthy
        } else if aqi <= 300.0 {
            AqiBand::VeryUnhealthy
        } else {
            AqiBand::Hazardous
        }
    }

    /// Human-readable severity label, matching the service's wording.
    pub fn level(&self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Moderate => "Moderate",
            AqiBand::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiBand::Unhealthy => "Unhealthy",
            AqiBand::VeryUnhealthy => "Very Unhealthy",
            AqiBand::Hazardous => "Hazardous",
        }
    }

    /// Display color (hex), matching the service's table.
    pub fn color(&self) -> &'static str {
        match self {
            AqiBand::Good => "#00e400",
            AqiBand::Moderate => "#ffff00",
            AqiBand::UnhealthySensitive => "#ff7e00",
            AqiBand::Unhealthy => "#ff0000",
            AqiBand::VeryUnhealthy => "#8f3f97",
            AqiBand::Hazardous => "#7e0023",
        }
    }

    /// Score range label for the legend.
    pub fn range_label(&self) -> &'static str {
        match self {
            AqiBand::Good => "0-50",
            AqiBand::Moderate => "51-100",
            AqiBand::UnhealthySensitive => "101-150",
            AqiBand::Unhealthy => "151-200",
            AqiBand::VeryUnhealthy => "201-300",
            AqiBand::Hazardous => "301+",
        }
    }

    /// One-line description shown in the AQI guide.
    pub fn description(&self) -> &'static str {
        match self {
            AqiBand::Good => "Air quality is satisfactory",
            AqiBand::Moderate => "Acceptable for most people",
            AqiBand::UnhealthySensitive => "Sensitive groups may experience effects",
            AqiBand::Unhealthy => "Everyone may experience effects",
            AqiBand::VeryUnhealthy => "Health alert",
            AqiBand::Hazardous => "Emergency conditions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(AqiBand::from_aqi(0.0), AqiBand::Good);
        assert_eq!(AqiBand::from_aqi(50.0), AqiBand::Good);
        assert_eq!(AqiBand::from_aqi(50.5), AqiBand::Moderate);
        assert_eq!(AqiBand::from_aqi(51.0), AqiBand::Moderate);
        assert_eq!(AqiBand::from_aqi(100.0), AqiBand::Moderate);
        assert_eq!(AqiBand::from_aqi(101.0), AqiBand::UnhealthySensitive);
        assert_eq!(AqiBand::from_aqi(150.0), AqiBand::UnhealthySensitive);
        assert_eq!(AqiBand::from_aqi(151.0), AqiBand::Unhealthy);
        assert_eq!(AqiBand::from_aqi(200.0), AqiBand::Unhealthy);
        assert_eq!(AqiBand::from_aqi(201.0), AqiBand::VeryUnhealthy);
        assert_eq!(AqiBand::from_aqi(300.0), AqiBand::VeryUnhealthy);
        assert_eq!(AqiBand::from_aqi(301.0), AqiBand::Hazardous);
    }

    #[test]
    fn test_band_total_over_extremes() {
        assert_eq!(AqiBand::from_aqi(-10.0), AqiBand::Good);
        assert_eq!(AqiBand::from_aqi(10_000.0), AqiBand::Hazardous);
        assert_eq!(AqiBand::from_aqi(f64::NAN), AqiBand::Hazardous);
    }

    #[test]
    fn test_band_colors_match_service_table() {
        assert_eq!(AqiBand::Good.color(), "#00e400");
        assert_eq!(AqiBand::Moderate.color(), "#ffff00");
        assert_eq!(AqiBand::UnhealthySensitive.color(), "#ff7e00");
        assert_eq!(AqiBand::Unhealthy.color(), "#ff0000");
        assert_eq!(AqiBand::VeryUnhealthy.color(), "#8f3f97");
        assert_eq!(AqiBand::Hazardous.color(), "#7e0023");
    }

    #[test]
    fn test_all_bands_ascending() {
        assert_eq!(ALL_BANDS.len(), 6);
        assert_eq!(ALL_BANDS[0].level(), "Good");
        assert_eq!(ALL_BANDS[5].level(), "Hazardous");
    }
}
