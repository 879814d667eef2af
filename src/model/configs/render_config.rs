use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct RenderConfig {
    pub dpi: u32,
    pub font_family: String,
    /* padding kept around the tight bounding box, in inches */
    pub pad_inches: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            font_family: "sans-serif".to_string(),
            pad_inches: 0.1,
        }
    }
}

impl RenderConfig {
    #[doc = "Converts a typographic size in points to pixels at the configured dpi"]
    pub fn pt_to_px(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    #[doc = "Converts a length in inches to whole pixels at the configured dpi"]
    pub fn inch_to_px(&self, inches: f64) -> u32 {
        (inches * self.dpi as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_print_quality_settings() {
        let config: RenderConfig = RenderConfig::default();
        assert_eq!(*config.dpi(), 300);
        assert_eq!(config.inch_to_px(12.0), 3600);
        assert!((config.pt_to_px(12.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: RenderConfig = toml::from_str("dpi = 72").unwrap();
        assert_eq!(*config.dpi(), 72);
        assert_eq!(config.font_family(), "sans-serif");
        assert_eq!(config.inch_to_px(10.0), 720);
    }
}
