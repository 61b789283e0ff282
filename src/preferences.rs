use std::fmt;
use std::str::FromStr;

use codee::string::FromToStringCodec;
use thiserror::Error;

/// Local storage key holding the chosen theme.
pub const THEME_KEY: &str = "theme";
/// Stored as the bare `"dark"`/`"light"` string through `FromStr`/`Display`.
/// A value that fails to decode leaves the theme at its default.
pub type ThemeCodec = FromToStringCodec;
/// Class on the document root that selects the light palette.
pub const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The single class on the document root that switches colour tokens.
    /// Dark is the stylesheet's base, so it needs none.
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            Theme::Dark => None,
            Theme::Light => Some(LIGHT_CLASS),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codee::{Decoder, Encoder};

    /// What the storage hook resolves a raw stored value to.
    fn resolve(raw: Option<&str>) -> Theme {
        raw.and_then(|raw| <ThemeCodec as Decoder<Theme>>::decode(raw).ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_theme_parse_and_display() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(
            "Light".parse::<Theme>(),
            Err(UnknownTheme("Light".to_string()))
        );
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Light.root_class(), Some("light"));
        assert_eq!(Theme::Dark.root_class(), None);
    }

    #[test]
    fn test_codec_writes_bare_names() {
        assert_eq!(
            <ThemeCodec as Encoder<Theme>>::encode(&Theme::Light),
            Ok("light".to_string())
        );
        assert_eq!(
            <ThemeCodec as Encoder<Theme>>::encode(&Theme::Dark),
            Ok("dark".to_string())
        );
    }

    #[test]
    fn test_absent_preference_is_dark() {
        assert_eq!(resolve(None), Theme::Dark);
    }

    #[test]
    fn test_stored_value_is_reread() {
        for theme in [Theme::Light, Theme::Dark] {
            let raw = <ThemeCodec as Encoder<Theme>>::encode(&theme).unwrap();
            assert_eq!(resolve(Some(&raw)), theme);
        }
    }

    #[test]
    fn test_invalid_stored_value_falls_back() {
        assert!(<ThemeCodec as Decoder<Theme>>::decode("sepia").is_err());
        assert_eq!(resolve(Some("sepia")), Theme::Dark);
        assert_eq!(resolve(Some("")), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::default().toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert!(!Theme::Dark.toggled().is_dark());
    }
}
