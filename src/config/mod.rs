//! Deck configuration.
//!
//! Every field has a default matching the 10 × 7.5 inch proposal decks, so a
//! config file only needs to name what it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LayoutError;
use crate::geometry::Size;
use crate::logging::DECK_TARGET;
use crate::theme::{Theme, ThemeKind};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Fixed positions of the title, subtitle, body and footer on every slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub margin_x: f64,
    pub title_top: f64,
    pub title_height: f64,
    pub subtitle_top: f64,
    pub subtitle_height: f64,
    pub body_top: f64,
    pub body_height: f64,
    pub footer_top: f64,
    pub footer_rule_height: f64,
    pub footer_text_offset: f64,
    pub footer_text_height: f64,
    pub footer_font_pt: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            margin_x: 0.6,
            title_top: 0.35,
            title_height: 0.7,
            subtitle_top: 1.0,
            subtitle_height: 0.4,
            body_top: 1.4,
            body_height: 5.5,
            footer_top: 7.0,
            footer_rule_height: 0.01,
            footer_text_offset: 0.08,
            footer_text_height: 0.3,
            footer_font_pt: 8.0,
        }
    }
}

/// Child geometry of cards, relative to the card's own rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub inset: f64,
    pub icon_size: f64,
    pub icon_gap: f64,
    pub heading_height: f64,
    pub header_strip_height: f64,
    pub gutter: f64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            inset: 0.15,
            icon_size: 0.3,
            icon_gap: 0.1,
            heading_height: 0.3,
            header_strip_height: 0.5,
            gutter: 0.2,
        }
    }
}

/// Either a built-in preset name or a complete inline theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeSelection {
    Preset(String),
    Custom(Theme),
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self::Preset(ThemeKind::Consulting.name().to_string())
    }
}

impl From<ThemeKind> for ThemeSelection {
    fn from(kind: ThemeKind) -> Self {
        Self::Preset(kind.name().to_string())
    }
}

impl ThemeSelection {
    /// Materialize the theme, rejecting unknown presets and incomplete themes.
    pub fn resolve(&self) -> Result<Theme, LayoutError> {
        let theme = match self {
            ThemeSelection::Preset(name) => name.parse::<ThemeKind>()?.theme(),
            ThemeSelection::Custom(theme) => theme.clone(),
        };
        theme.validate()?;
        Ok(theme)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub canvas: Size,
    pub theme: ThemeSelection,
    pub frame: FrameConfig,
    pub card: CardConfig,
    /// Caption drawn in every slide footer.
    pub footer_text: Option<String>,
    pub number_pages: bool,
    pub log_target: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            canvas: Size::new(10.0, 7.5),
            theme: ThemeSelection::default(),
            frame: FrameConfig::default(),
            card: CardConfig::default(),
            footer_text: None,
            number_pages: true,
            log_target: DECK_TARGET.to_string(),
        }
    }
}

impl DeckConfig {
    pub fn with_theme(mut self, theme: impl Into<ThemeSelection>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn with_footer(mut self, caption: impl Into<String>) -> Self {
        self.footer_text = Some(caption.into());
        self
    }

    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: DeckConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        Size::checked(self.canvas.width, self.canvas.height)?;
        self.theme.resolve()?;
        Ok(())
    }
}

impl From<Theme> for ThemeSelection {
    fn from(theme: Theme) -> Self {
        Self::Custom(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleRole;
    use std::io::Write;

    #[test]
    fn defaults_match_proposal_decks() {
        let config = DeckConfig::default();
        assert_eq!(config.canvas, Size::new(10.0, 7.5));
        assert_eq!(config.frame.margin_x, 0.6);
        assert_eq!(config.card.inset, 0.15);
        assert_eq!(config.theme.resolve().unwrap().name, "consulting");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DeckConfig::from_json_str(
            r#"{"theme":"creative","frame":{"margin_x":0.5},"footer_text":"Confidential"}"#,
        )
        .unwrap();
        assert_eq!(config.frame.margin_x, 0.5);
        assert_eq!(config.frame.title_top, 0.35);
        assert_eq!(config.footer_text.as_deref(), Some("Confidential"));
        assert_eq!(config.theme.resolve().unwrap().name, "creative");
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let err = DeckConfig::from_json_str(r#"{"theme":"neon"}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Layout(LayoutError::UnknownTheme(ref name)) if name == "neon"
        ));
    }

    #[test]
    fn invalid_canvas_is_rejected() {
        let err = DeckConfig::from_json_str(r#"{"canvas":{"width":0.0,"height":7.5}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Layout(LayoutError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn incomplete_inline_theme_is_rejected() {
        let mut theme = ThemeKind::Classic.theme();
        theme.styles.remove(&StyleRole::TableCell);
        let json = serde_json::to_string(&DeckConfig::default().with_theme(theme)).unwrap();

        let err = DeckConfig::from_json_str(&json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Layout(LayoutError::UnknownRole {
                role: StyleRole::TableCell,
                ..
            })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"theme":"professional","number_pages":false}}"#).unwrap();

        let config = DeckConfig::from_path(file.path()).unwrap();
        assert!(!config.number_pages);
        assert_eq!(config.theme, ThemeSelection::from(ThemeKind::Professional));
    }
}
