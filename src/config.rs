//! Settings supplied by the host page.

use serde::{Deserialize, Serialize};

use crate::{ChartType, Error, TimeFilter};

/// The colours assigned to chart segments, reused from the start when there
/// are more categories than colours.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

/// Configuration for a [crate::Tracker].
///
/// Every field has a default, so a host only needs to specify what it wants
/// to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// The key of the persistence slot that holds the transaction list.
    pub storage_key: String,
    /// Colours for chart segments, assigned by segment position.
    pub palette: Vec<String>,
    /// The symbol prefixed to formatted amounts.
    pub currency_symbol: String,
    /// The chart type shown on start-up.
    pub default_chart_type: ChartType,
    /// The time window selected on start-up.
    pub default_time_filter: TimeFilter,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: "transactions".to_owned(),
            palette: DEFAULT_PALETTE.iter().map(|colour| colour.to_string()).collect(),
            currency_symbol: "$".to_owned(),
            default_chart_type: ChartType::default(),
            default_time_filter: TimeFilter::default(),
        }
    }
}

impl TrackerConfig {
    /// Parse a JSON configuration object, filling in defaults for missing
    /// fields.
    ///
    /// # Errors
    /// Returns [Error::InvalidConfig] if `json` is not a valid configuration
    /// object, or [Error::EmptyPalette] if the palette has no colours.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self =
            serde_json::from_str(json).map_err(|error| Error::InvalidConfig(error.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// Check the values that cannot be expressed by the types alone.
    ///
    /// # Errors
    /// Returns [Error::EmptyPalette] if the palette has no colours.
    pub fn validate(&self) -> Result<(), Error> {
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }

        Ok(())
    }

    /// The colour for the segment at `position`.
    pub fn colour_at(&self, position: usize) -> &str {
        match self.palette.len() {
            0 => DEFAULT_PALETTE[position % DEFAULT_PALETTE.len()],
            len => &self.palette[position % len],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ChartType, DEFAULT_PALETTE, Error, TimeFilter, TrackerConfig};

    #[test]
    fn empty_json_gives_defaults() {
        let config = TrackerConfig::from_json("{}").unwrap();

        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.storage_key, "transactions");
        assert_eq!(config.palette.len(), DEFAULT_PALETTE.len());
    }

    #[test]
    fn overrides_are_applied() {
        let config = TrackerConfig::from_json(
            r##"{
                "storage_key": "expenses",
                "palette": ["#000000", "#FFFFFF"],
                "currency_symbol": "€",
                "default_chart_type": "doughnut",
                "default_time_filter": "monthly"
            }"##,
        )
        .unwrap();

        assert_eq!(config.storage_key, "expenses");
        assert_eq!(config.palette, vec!["#000000", "#FFFFFF"]);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.default_chart_type, ChartType::Doughnut);
        assert_eq!(config.default_time_filter, TimeFilter::Monthly);
    }

    #[test]
    fn empty_palette_is_rejected() {
        let result = TrackerConfig::from_json(r#"{"palette": []}"#);

        assert_eq!(result, Err(Error::EmptyPalette));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = TrackerConfig::from_json("{\"palette\": 3}");

        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn colours_cycle_through_palette() {
        let config = TrackerConfig::default();

        assert_eq!(config.colour_at(0), "#FF6384");
        assert_eq!(config.colour_at(5), "#FF9F40");
        assert_eq!(config.colour_at(6), "#FF6384");
        assert_eq!(config.colour_at(13), "#36A2EB");
    }
}
