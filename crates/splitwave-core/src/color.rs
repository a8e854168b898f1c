//! Colour taxonomy
//!
//! A closed set of 16 labels. Only the label is semantically load-bearing; the
//! [`ColorStyle`] triple is presentation data handed to renderers.

use crate::{Dimension, EngineError, DIMENSION_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the 16 colour labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Zero,
    One,
    Prime,
    #[serde(rename = "PrimePow")]
    PrimePower,
    Colorless,
    Blue,
    Yellow,
    Red,
    Green,
    Purple,
    Orange,
    Brown,
    Silver,
    Gold,
    #[serde(rename = "Golden Brown")]
    GoldenBrown,
    Composite,
}

/// Presentation triple for a colour label (CSS hex strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorStyle {
    pub background: &'static str,
    pub foreground: &'static str,
    pub glow: &'static str,
}

impl Color {
    /// All labels in declaration order
    pub const ALL: [Color; 16] = [
        Color::Zero,
        Color::One,
        Color::Prime,
        Color::PrimePower,
        Color::Colorless,
        Color::Blue,
        Color::Yellow,
        Color::Red,
        Color::Green,
        Color::Purple,
        Color::Orange,
        Color::Brown,
        Color::Silver,
        Color::Gold,
        Color::GoldenBrown,
        Color::Composite,
    ];

    /// Display label
    pub const fn label(self) -> &'static str {
        match self {
            Color::Zero => "Zero",
            Color::One => "One",
            Color::Prime => "Prime",
            Color::PrimePower => "PrimePow",
            Color::Colorless => "Colorless",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Purple => "Purple",
            Color::Orange => "Orange",
            Color::Brown => "Brown",
            Color::Silver => "Silver",
            Color::Gold => "Gold",
            Color::GoldenBrown => "Golden Brown",
            Color::Composite => "Composite",
        }
    }

    /// Background, foreground and glow for renderers
    pub const fn style(self) -> ColorStyle {
        let (background, foreground, glow) = match self {
            Color::Zero => ("#000000", "#ffffff", "#444444"),
            Color::One => ("#ffffff", "#000000", "#dddddd"),
            Color::Prime => ("#1a1a2e", "#e0e0ff", "#7f7fff"),
            Color::PrimePower => ("#2e1a2e", "#ffe0ff", "#c77dff"),
            Color::Colorless => ("#f5f5f5", "#555555", "#ffffff"),
            Color::Blue => ("#1e40af", "#ffffff", "#60a5fa"),
            Color::Yellow => ("#facc15", "#1f1f1f", "#fde68a"),
            Color::Red => ("#b91c1c", "#ffffff", "#f87171"),
            Color::Green => ("#15803d", "#ffffff", "#4ade80"),
            Color::Purple => ("#6b21a8", "#ffffff", "#c084fc"),
            Color::Orange => ("#ea580c", "#ffffff", "#fdba74"),
            Color::Brown => ("#78350f", "#ffffff", "#b45309"),
            Color::Silver => ("#c0c0c0", "#1f1f1f", "#e5e7eb"),
            Color::Gold => ("#d4af37", "#1f1f1f", "#fcd34d"),
            Color::GoldenBrown => ("#996515", "#ffffff", "#d6a64f"),
            Color::Composite => ("#374151", "#d1d5db", "#6b7280"),
        };
        ColorStyle {
            background,
            foreground,
            glow,
        }
    }

    /// Blue, Yellow or Red
    pub const fn is_base(self) -> bool {
        matches!(self, Color::Blue | Color::Yellow | Color::Red)
    }

    /// Secondary colour obtained by mixing two base colours.
    ///
    /// Returns `None` unless `a` and `b` are two distinct base colours.
    pub const fn mix(a: Color, b: Color) -> Option<Color> {
        match (a, b) {
            (Color::Blue, Color::Yellow) | (Color::Yellow, Color::Blue) => Some(Color::Green),
            (Color::Blue, Color::Red) | (Color::Red, Color::Blue) => Some(Color::Purple),
            (Color::Yellow, Color::Red) | (Color::Red, Color::Yellow) => Some(Color::Orange),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Color {
    type Err = EngineError;

    /// Parse a label, ignoring case, spaces, dashes and underscores
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|color| {
                let label = color.label().replace(' ', "").to_ascii_lowercase();
                label == wanted || format!("{color:?}").to_ascii_lowercase() == wanted
            })
            .ok_or_else(|| EngineError::UnknownColor(s.to_string()))
    }
}

/// Which base colour represents divisibility by 2, 3 and 7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRoles {
    pub c2: Color,
    pub c3: Color,
    pub c7: Color,
}

/// Base-colour permutation per dimension: the three rotations, then the three reflections
const ROLE_TABLE: [ColorRoles; DIMENSION_COUNT] = [
    ColorRoles { c2: Color::Blue, c3: Color::Yellow, c7: Color::Red },
    ColorRoles { c2: Color::Yellow, c3: Color::Red, c7: Color::Blue },
    ColorRoles { c2: Color::Red, c3: Color::Blue, c7: Color::Yellow },
    ColorRoles { c2: Color::Blue, c3: Color::Red, c7: Color::Yellow },
    ColorRoles { c2: Color::Yellow, c3: Color::Blue, c7: Color::Red },
    ColorRoles { c2: Color::Red, c3: Color::Yellow, c7: Color::Blue },
];

impl ColorRoles {
    /// Role assignment for a dimension
    pub const fn for_dimension(dimension: Dimension) -> Self {
        ROLE_TABLE[dimension.index()]
    }

    /// Mix of the 2-colour and 3-colour
    pub fn c23(self) -> Color {
        Self::mixed(self.c2, self.c3)
    }

    /// Mix of the 2-colour and 7-colour
    pub fn c27(self) -> Color {
        Self::mixed(self.c2, self.c7)
    }

    /// Mix of the 3-colour and 7-colour
    pub fn c37(self) -> Color {
        Self::mixed(self.c3, self.c7)
    }

    fn mixed(a: Color, b: Color) -> Color {
        // ROLE_TABLE only holds permutations of the three base colours
        Color::mix(a, b).unwrap_or(Color::Brown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sixteen_distinct_labels() {
        let labels: HashSet<_> = Color::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), 16);
    }

    #[test]
    fn test_role_table_is_all_permutations() {
        let mut seen = HashSet::new();
        for dimension in Dimension::ALL {
            let roles = ColorRoles::for_dimension(dimension);
            assert!(roles.c2.is_base() && roles.c3.is_base() && roles.c7.is_base());
            let set: HashSet<_> = [roles.c2, roles.c3, roles.c7].into_iter().collect();
            assert_eq!(set.len(), 3);
            assert!(seen.insert((roles.c2, roles.c3, roles.c7)));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_dimension_zero_roles() {
        let roles = ColorRoles::for_dimension(Dimension::D0);
        assert_eq!((roles.c2, roles.c3, roles.c7), (Color::Blue, Color::Yellow, Color::Red));
        assert_eq!(roles.c23(), Color::Green);
        assert_eq!(roles.c27(), Color::Purple);
        assert_eq!(roles.c37(), Color::Orange);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("golden brown".parse::<Color>().unwrap(), Color::GoldenBrown);
        assert_eq!("Golden-Brown".parse::<Color>().unwrap(), Color::GoldenBrown);
        assert_eq!("primepow".parse::<Color>().unwrap(), Color::PrimePower);
        assert_eq!("PrimePower".parse::<Color>().unwrap(), Color::PrimePower);
        assert!("magenta".parse::<Color>().is_err());
    }

    #[test]
    fn test_serialized_labels() {
        for color in Color::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.label()));
        }
    }
}
