//! Built-in themes for the four proposal deck looks.
//!
//! Each preset maps every [`StyleRole`] through an exhaustive `match`, so adding
//! a role fails to compile until every preset handles it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::core::{Color, ShapeKind, StyleProfile, StyleRole, Theme};
use super::{Band, Chrome};
use crate::error::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Navy, blue and green accents on white.
    Consulting,
    /// Saturated red header, yellow and amber accents.
    Creative,
    /// Plain red and yellow bars.
    Classic,
    /// Minimal burgundy and ivory.
    Professional,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 4] = [
        ThemeKind::Consulting,
        ThemeKind::Creative,
        ThemeKind::Classic,
        ThemeKind::Professional,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeKind::Consulting => "consulting",
            ThemeKind::Creative => "creative",
            ThemeKind::Classic => "classic",
            ThemeKind::Professional => "professional",
        }
    }

    pub fn theme(self) -> Theme {
        match self {
            ThemeKind::Consulting => consulting(),
            ThemeKind::Creative => creative(),
            ThemeKind::Classic => classic(),
            ThemeKind::Professional => professional(),
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeKind {
    type Err = LayoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ThemeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| LayoutError::UnknownTheme(value.to_string()))
    }
}

mod palette {
    use super::Color;

    pub const NAVY: Color = Color::rgb(30, 50, 80);
    pub const BRIGHT_BLUE: Color = Color::rgb(60, 130, 200);
    pub const SOFT_GREEN: Color = Color::rgb(120, 180, 140);
    pub const OFF_WHITE: Color = Color::rgb(250, 250, 252);
    pub const LIGHT_GRAY: Color = Color::rgb(240, 242, 245);
    pub const MED_GRAY: Color = Color::rgb(200, 205, 210);
    pub const CHARCOAL: Color = Color::rgb(50, 55, 65);
    pub const SLATE: Color = Color::rgb(100, 110, 125);
    pub const WARNING_RED: Color = Color::rgb(200, 80, 80);
    pub const NOTE_YELLOW: Color = Color::rgb(255, 250, 230);
    pub const NOTE_BORDER: Color = Color::rgb(230, 200, 120);

    pub const PRIMARY_RED: Color = Color::rgb(220, 38, 38);
    pub const CREATIVE_DEEP_RED: Color = Color::rgb(153, 27, 27);
    pub const BRIGHT_YELLOW: Color = Color::rgb(251, 191, 36);
    pub const GOLD: Color = Color::rgb(245, 158, 11);
    pub const AMBER: Color = Color::rgb(217, 119, 6);
    pub const CREAM: Color = Color::rgb(254, 243, 199);
    pub const INK: Color = Color::rgb(31, 41, 55);
    pub const DARK_GRAY: Color = Color::rgb(55, 65, 81);
    pub const ORANGE: Color = Color::rgb(249, 115, 22);

    pub const RED: Color = Color::rgb(200, 30, 30);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 200, 0);
    pub const DARK_YELLOW: Color = Color::rgb(218, 165, 32);
    pub const PALE_YELLOW: Color = Color::rgb(255, 245, 200);

    pub const BURGUNDY: Color = Color::rgb(180, 50, 50);
    pub const SOFT_RED: Color = Color::rgb(200, 100, 100);
    pub const WARM_YELLOW: Color = Color::rgb(220, 180, 100);
    pub const PALE_CREAM: Color = Color::rgb(252, 248, 240);
    pub const IVORY: Color = Color::rgb(255, 253, 248);
    pub const GRAPHITE: Color = Color::rgb(60, 60, 60);
    pub const STEEL: Color = Color::rgb(100, 100, 100);
    pub const SILVER: Color = Color::rgb(200, 200, 200);
    pub const SOFT_WHITE: Color = Color::rgb(245, 245, 245);
}

use palette::*;

const LIGHT: &str = "Calibri Light";
const REGULAR: &str = "Calibri";

pub fn consulting() -> Theme {
    let mut theme = Theme::from_fn(
        "consulting",
        vec![BRIGHT_BLUE, SOFT_GREEN, NAVY],
        |role| match role {
            StyleRole::Title => StyleProfile::text(LIGHT, 26.0, NAVY).bold(),
            StyleRole::Subtitle => StyleProfile::text(REGULAR, 12.0, SLATE),
            StyleRole::Body => StyleProfile::text(REGULAR, 11.0, CHARCOAL),
            StyleRole::CardBackground => {
                StyleProfile::filled(ShapeKind::RoundedRectangle, LIGHT_GRAY, REGULAR, CHARCOAL)
                    .with_size(10.0)
                    .with_border(MED_GRAY, 0.5)
            }
            StyleRole::CardBorder => {
                StyleProfile::filled(ShapeKind::Rectangle, MED_GRAY, REGULAR, SLATE).with_size(8.0)
            }
            StyleRole::Accent => StyleProfile::filled(ShapeKind::Rectangle, NAVY, REGULAR, Color::WHITE)
                .bold()
                .centered(),
            StyleRole::Warning => {
                StyleProfile::filled(ShapeKind::RoundedRectangle, NOTE_YELLOW, REGULAR, WARNING_RED)
                    .with_size(10.0)
                    .with_border(NOTE_BORDER, 1.0)
            }
            StyleRole::TableHeader => StyleProfile::filled(ShapeKind::Rectangle, NAVY, REGULAR, Color::WHITE)
                .with_size(10.0)
                .bold()
                .centered(),
            StyleRole::TableCell => StyleProfile::filled(ShapeKind::Rectangle, OFF_WHITE, REGULAR, CHARCOAL)
                .with_size(10.0)
                .with_border(MED_GRAY, 0.25),
        },
    );
    theme.chrome = Chrome {
        header: Some(Band::new(0.0, 0.04, NAVY)),
        stripe: None,
        footer: None,
    };
    theme
}

pub fn creative() -> Theme {
    let mut theme = Theme::from_fn(
        "creative",
        vec![PRIMARY_RED, ORANGE, GOLD],
        |role| match role {
            StyleRole::Title => StyleProfile::text(REGULAR, 30.0, Color::WHITE).bold(),
            StyleRole::Subtitle => StyleProfile::text(REGULAR, 14.0, CREATIVE_DEEP_RED),
            StyleRole::Body => StyleProfile::text(REGULAR, 14.0, INK),
            StyleRole::CardBackground => {
                StyleProfile::filled(ShapeKind::RoundedRectangle, CREAM, REGULAR, DARK_GRAY)
                    .with_size(12.0)
                    .with_border(PRIMARY_RED, 2.0)
            }
            StyleRole::CardBorder => {
                StyleProfile::filled(ShapeKind::Rectangle, BRIGHT_YELLOW, REGULAR, Color::WHITE).with_size(9.0)
            }
            StyleRole::Accent => {
                StyleProfile::filled(ShapeKind::RoundedRectangle, PRIMARY_RED, REGULAR, Color::WHITE)
                    .bold()
                    .centered()
            }
            StyleRole::Warning => {
                StyleProfile::filled(ShapeKind::RoundedRectangle, Color::rgb(254, 242, 242), REGULAR, AMBER)
                    .with_border(ORANGE, 1.5)
            }
            StyleRole::TableHeader => {
                StyleProfile::filled(ShapeKind::Rectangle, CREATIVE_DEEP_RED, REGULAR, Color::WHITE)
                    .with_size(11.0)
                    .bold()
                    .centered()
            }
            StyleRole::TableCell => StyleProfile::filled(ShapeKind::Rectangle, CREAM, REGULAR, DARK_GRAY)
                .with_size(10.0)
                .with_border(GOLD, 1.0),
        },
    );
    theme.chrome = Chrome {
        header: Some(Band::new(0.0, 1.2, PRIMARY_RED)),
        stripe: Some(Band::new(1.1, 0.1, BRIGHT_YELLOW)),
        footer: Some(Band::new(7.0, 0.5, CREATIVE_DEEP_RED)),
    };
    theme
}

pub fn classic() -> Theme {
    let mut theme = Theme::from_fn("classic", vec![RED, DARK_YELLOW], |role| match role {
        StyleRole::Title => StyleProfile::text(REGULAR, 32.0, Color::WHITE).bold(),
        StyleRole::Subtitle => StyleProfile::text(REGULAR, 16.0, DARK_RED).bold(),
        StyleRole::Body => StyleProfile::text(REGULAR, 14.0, Color::BLACK),
        StyleRole::CardBackground => {
            StyleProfile::filled(ShapeKind::Rectangle, PALE_YELLOW, REGULAR, Color::BLACK)
                .with_size(12.0)
                .with_border(DARK_YELLOW, 1.0)
        }
        StyleRole::CardBorder => StyleProfile::filled(ShapeKind::Rectangle, DARK_YELLOW, REGULAR, Color::BLACK),
        StyleRole::Accent => StyleProfile::filled(ShapeKind::Rectangle, RED, REGULAR, Color::WHITE)
            .bold()
            .centered(),
        StyleRole::Warning => StyleProfile::filled(ShapeKind::Rectangle, YELLOW, REGULAR, DARK_RED)
            .bold()
            .with_border(RED, 1.0),
        StyleRole::TableHeader => StyleProfile::filled(ShapeKind::Rectangle, DARK_RED, REGULAR, Color::WHITE)
            .with_size(12.0)
            .bold()
            .centered(),
        StyleRole::TableCell => StyleProfile::filled(ShapeKind::Rectangle, Color::WHITE, REGULAR, Color::BLACK)
            .with_size(12.0)
            .with_border(DARK_YELLOW, 0.5),
    });
    theme.chrome = Chrome {
        header: Some(Band::new(0.0, 1.1, RED)),
        stripe: Some(Band::new(1.1, 0.08, YELLOW)),
        footer: Some(Band::new(7.2, 0.3, DARK_RED)),
    };
    theme
}

pub fn professional() -> Theme {
    let mut theme = Theme::from_fn(
        "professional",
        vec![BURGUNDY, WARM_YELLOW, SOFT_RED],
        |role| match role {
            StyleRole::Title => StyleProfile::text(LIGHT, 24.0, GRAPHITE).bold(),
            StyleRole::Subtitle => StyleProfile::text(LIGHT, 11.0, STEEL),
            StyleRole::Body => StyleProfile::text(REGULAR, 11.0, GRAPHITE),
            StyleRole::CardBackground => {
                StyleProfile::filled(ShapeKind::Rectangle, PALE_CREAM, REGULAR, GRAPHITE)
                    .with_size(10.0)
                    .with_border(SILVER, 0.5)
            }
            StyleRole::CardBorder => StyleProfile::filled(ShapeKind::Rectangle, SILVER, LIGHT, STEEL).with_size(8.0),
            StyleRole::Accent => StyleProfile::filled(ShapeKind::Rectangle, BURGUNDY, REGULAR, Color::WHITE)
                .with_size(10.0)
                .bold()
                .centered(),
            StyleRole::Warning => StyleProfile::filled(ShapeKind::Rectangle, SOFT_WHITE, REGULAR, BURGUNDY)
                .with_size(10.0)
                .with_border(WARM_YELLOW, 1.0),
            StyleRole::TableHeader => {
                StyleProfile::filled(ShapeKind::Rectangle, Color::rgb(170, 60, 60), REGULAR, Color::WHITE)
                    .with_size(10.0)
                    .bold()
                    .centered()
            }
            StyleRole::TableCell => StyleProfile::filled(ShapeKind::Rectangle, IVORY, REGULAR, GRAPHITE)
                .with_size(10.0)
                .with_border(SILVER, 0.25),
        },
    );
    theme.chrome = Chrome {
        header: Some(Band::new(0.0, 0.9, IVORY)),
        stripe: Some(Band::new(0.0, 0.03, WARM_YELLOW)),
        footer: None,
    };
    theme
}
