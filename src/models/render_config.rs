use serde::{Deserialize, Serialize};
use crate::constants::{
    DEFAULT_HIT_TOLERANCE, DEFAULT_MARKER_RADIUS, DEFAULT_STROKE_WIDTH, DEFAULT_TIME_PADDING_MINUTES,
};

const RENDER_CONFIG_KEY: &str = "train_diagram_render_config";

/// Language of the diagram's own text (title, axis caption, tooltip fallbacks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::ZhCn, Locale::En];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCn => "zh-CN",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "简体中文",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Locale::En => "Train Diagram",
            Locale::ZhCn => "列车运行图",
        }
    }

    #[must_use]
    pub fn time_axis_label(self) -> &'static str {
        match self {
            Locale::En => "Time (HH:MM)",
            Locale::ZhCn => "时间（HH:MM）",
        }
    }

    /// Tooltip text for a segment without a train id
    #[must_use]
    pub fn no_info(self) -> &'static str {
        match self {
            Locale::En => "No information",
            Locale::ZhCn => "无信息",
        }
    }
}

/// Rendering settings passed explicitly into the diagram renderer
///
/// Persisted as JSON in `localStorage`; missing fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// CSS font family list; must cover CJK glyphs for Chinese station names
    pub font_family: String,
    pub locale: Locale,
    pub stroke_width: f64,
    pub marker_radius: f64,
    pub hit_tolerance: f64,
    pub padding_minutes: i64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_family: "\"SimHei\", \"Microsoft YaHei\", \"PingFang SC\", sans-serif".to_string(),
            locale: Locale::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            marker_radius: DEFAULT_MARKER_RADIUS,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            padding_minutes: DEFAULT_TIME_PADDING_MINUTES,
        }
    }
}

impl RenderConfig {
    /// CSS font shorthand for the configured family at `size_px`
    #[must_use]
    pub fn font(&self, size_px: u32) -> String {
        format!("{size_px}px {}", self.font_family)
    }

    #[must_use]
    pub fn padding(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.padding_minutes.max(0))
    }

    /// Parse settings JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or has fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the saved settings from `localStorage`, or defaults if there are none
    #[must_use]
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else { return Self::default() };
        let Ok(Some(storage)) = window.local_storage() else { return Self::default() };
        let Ok(Some(json)) = storage.get_item(RENDER_CONFIG_KEY) else { return Self::default() };

        Self::from_json(&json).unwrap_or_else(|e| {
            leptos::logging::warn!("Ignoring saved render settings: {e}");
            Self::default()
        })
    }

    /// Save the settings to `localStorage`
    ///
    /// # Errors
    ///
    /// Returns an error if storage is unavailable or rejects the write.
    pub fn save(&self) -> Result<(), String> {
        let window = web_sys::window().ok_or("No window available")?;
        let storage = window
            .local_storage()
            .map_err(|_| "localStorage is not accessible".to_string())?
            .ok_or("localStorage is not available")?;

        let json = serde_json::to_string(self)
            .map_err(|e| format!("Failed to serialize render settings: {e}"))?;

        storage
            .set_item(RENDER_CONFIG_KEY, &json)
            .map_err(|_| "Failed to write render settings".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn test_locale_texts() {
        assert_eq!(Locale::ZhCn.title(), "列车运行图");
        assert_eq!(Locale::En.time_axis_label(), "Time (HH:MM)");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = RenderConfig::from_json(r#"{"locale":"en","hit_tolerance":8.0}"#)
            .expect("valid settings");
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.hit_tolerance, 8.0);
        assert_eq!(config.stroke_width, DEFAULT_STROKE_WIDTH);
        assert_eq!(config.padding_minutes, DEFAULT_TIME_PADDING_MINUTES);
    }

    #[test]
    fn test_wrongly_typed_json_is_rejected() {
        assert!(RenderConfig::from_json(r#"{"stroke_width":"thick"}"#).is_err());
    }

    #[test]
    fn test_font_and_padding() {
        let config = RenderConfig {
            font_family: "serif".to_string(),
            padding_minutes: -3,
            ..RenderConfig::default()
        };
        assert_eq!(config.font(12), "12px serif");
        assert_eq!(config.padding(), chrono::Duration::zero());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_then_load() {
        let config = RenderConfig {
            locale: Locale::En,
            hit_tolerance: 9.0,
            ..RenderConfig::default()
        };
        config.save().expect("save should succeed");
        assert_eq!(RenderConfig::load(), config);
    }
}
