use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Semantic tag decoupling "what kind of element" from how it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleRole {
    Title,
    Subtitle,
    Body,
    CardBackground,
    CardBorder,
    Accent,
    Warning,
    TableHeader,
    TableCell,
}

impl StyleRole {
    pub const ALL: [StyleRole; 9] = [
        StyleRole::Title,
        StyleRole::Subtitle,
        StyleRole::Body,
        StyleRole::CardBackground,
        StyleRole::CardBorder,
        StyleRole::Accent,
        StyleRole::Warning,
        StyleRole::TableHeader,
        StyleRole::TableCell,
    ];
}

/// 24-bit colour serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(format!("expected #rrggbb colour, got `{value}`"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|err| format!("`{value}`: {err}"))
        };
        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Outline the export adapter should draw for a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Oval,
    RightArrow,
    DownArrow,
    Diamond,
    /// Frameless text container.
    TextBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Concrete visual style for one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub shape: ShapeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Color>,
    #[serde(default)]
    pub border_width_pt: f64,
    pub font_family: String,
    pub font_size_pt: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
    pub text_color: Color,
    #[serde(default)]
    pub alignment: Alignment,
}

impl StyleProfile {
    /// Frameless text style.
    pub fn text(font_family: &str, font_size_pt: f64, text_color: Color) -> Self {
        Self {
            shape: ShapeKind::TextBox,
            fill: None,
            border: None,
            border_width_pt: 0.0,
            font_family: font_family.to_string(),
            font_size_pt,
            font_weight: FontWeight::Regular,
            text_color,
            alignment: Alignment::Left,
        }
    }

    /// Filled shape without an outline.
    pub fn filled(shape: ShapeKind, fill: Color, font_family: &str, text_color: Color) -> Self {
        Self {
            shape,
            fill: Some(fill),
            ..Self::text(font_family, 11.0, text_color)
        }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::Bold;
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn with_size(mut self, font_size_pt: f64) -> Self {
        self.font_size_pt = font_size_pt;
        self
    }

    pub fn with_border(mut self, border: Color, width_pt: f64) -> Self {
        self.border = Some(border);
        self.border_width_pt = width_pt;
        self
    }

    pub fn apply(mut self, overrides: &StyleOverride) -> Self {
        if let Some(fill) = overrides.fill {
            self.fill = Some(fill);
        }
        if let Some(color) = overrides.text_color {
            self.text_color = color;
        }
        if let Some(size) = overrides.font_size_pt {
            self.font_size_pt = size;
        }
        if let Some(weight) = overrides.font_weight {
            self.font_weight = weight;
        }
        if let Some(alignment) = overrides.alignment {
            self.alignment = alignment;
        }
        if let Some(shape) = overrides.shape {
            self.shape = shape;
        }
        self
    }
}

/// Per-region adjustments layered over the resolved profile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverride {
    pub fill: Option<Color>,
    pub text_color: Option<Color>,
    pub font_size_pt: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub alignment: Option<Alignment>,
    pub shape: Option<ShapeKind>,
}

impl StyleOverride {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn font_size(size: f64) -> Self {
        Self {
            font_size_pt: Some(size),
            ..Self::default()
        }
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size_pt = Some(size);
        self
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = Some(FontWeight::Bold);
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Full-width horizontal band drawn as slide chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub top: f64,
    pub height: f64,
    pub color: Color,
}

impl Band {
    pub const fn new(top: f64, height: f64, color: Color) -> Self {
        Self { top, height, color }
    }
}

/// Decorative bands framing every slide of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Chrome {
    #[serde(default)]
    pub header: Option<Band>,
    /// Drawn after the header, usually a thin contrasting rule.
    #[serde(default)]
    pub stripe: Option<Band>,
    #[serde(default)]
    pub footer: Option<Band>,
}

/// Complete mapping from [`StyleRole`] to [`StyleProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub styles: BTreeMap<StyleRole, StyleProfile>,
    /// Alternating accent colours for icons, bars and markers.
    #[serde(default)]
    pub accents: Vec<Color>,
    #[serde(default)]
    pub chrome: Chrome,
}

impl Theme {
    /// Build a theme from an exhaustive role mapping.
    pub fn from_fn(
        name: impl Into<String>,
        accents: Vec<Color>,
        style: impl Fn(StyleRole) -> StyleProfile,
    ) -> Self {
        Self {
            name: name.into(),
            styles: StyleRole::ALL.iter().map(|role| (*role, style(*role))).collect(),
            accents,
            chrome: Chrome::default(),
        }
    }

    pub fn resolve(&self, role: StyleRole) -> Result<&StyleProfile> {
        self.styles.get(&role).ok_or_else(|| LayoutError::UnknownRole {
            theme: self.name.clone(),
            role,
        })
    }

    /// Fail on the first role without a profile.
    pub fn validate(&self) -> Result<()> {
        for role in StyleRole::ALL {
            self.resolve(role)?;
        }
        Ok(())
    }

    /// Accent colour for the `index`-th repeated element, cycling through the
    /// palette. Falls back to the accent role's fill.
    pub fn accent(&self, index: usize) -> Option<Color> {
        if self.accents.is_empty() {
            return self
                .styles
                .get(&StyleRole::Accent)
                .and_then(|style| style.fill);
        }
        Some(self.accents[index % self.accents.len()])
    }
}

/// Resolve `role` against `theme`, returning an owned profile.
pub fn resolve(role: StyleRole, theme: &Theme) -> Result<StyleProfile> {
    theme.resolve(role).cloned()
}
