use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::visibility::RootMargin;

/// Site-root path of the favicon, served from `public/`.
pub const FAVICON_PATH: &str = "/favicon.svg";

/// Site-level knobs read from the `site` block of the content file.
///
/// Every field has a default so the block can be omitted entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// How long the splash screen owns the viewport after mount.
    #[serde(default = "default_splash_delay_ms")]
    pub splash_delay_ms: u64,
    /// IntersectionObserver margin for section reveals. Negative values
    /// shrink the viewport so a section must be well inside before it reveals.
    #[serde(default = "default_reveal_margin_px")]
    pub reveal_margin_px: i32,
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_splash_delay_ms() -> u64 {
    1000
}

fn default_reveal_margin_px() -> i32 {
    -100
}

fn default_footer() -> String {
    "Built with passion and precision.".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            splash_delay_ms: default_splash_delay_ms(),
            reveal_margin_px: default_reveal_margin_px(),
            footer: default_footer(),
        }
    }
}

impl SiteSettings {
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
    }

    pub fn reveal_margin(&self) -> RootMargin {
        RootMargin(self.reveal_margin_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: SiteSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, SiteSettings::default());
        assert_eq!(settings.splash_delay(), Duration::from_millis(1000));
        assert_eq!(settings.reveal_margin(), RootMargin(-100));
    }

    #[test]
    fn test_partial_override() {
        let settings: SiteSettings = serde_json::from_str(r#"{"splash_delay_ms": 250}"#).unwrap();
        assert_eq!(settings.splash_delay(), Duration::from_millis(250));
        assert_eq!(settings.reveal_margin_px, -100);
        assert!(!settings.footer.is_empty());
    }

    #[test]
    fn test_favicon_is_shipped_in_assets() {
        let asset = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON_PATH.trim_start_matches('/'));
        assert!(asset.is_file(), "missing {}", asset.display());
    }
}
