use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};

/// A `#RRGGBB` colour understood by every presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub &'static str);

impl HexColor {
    /// Splits the colour into its red, green and blue channels.
    /// Malformed channels read as 0.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = self.0.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|c| u8::from_str_radix(c, 16).ok())
                .unwrap_or(0)
        };
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

pub const GREEN: HexColor = HexColor("#00FF41");
pub const BLUE: HexColor = HexColor("#00BFFF");
pub const ORANGE: HexColor = HexColor("#FF8C00");
pub const PURPLE: HexColor = HexColor("#8A2BE2");
pub const PINK: HexColor = HexColor("#FF69B4");
pub const AMBER: HexColor = HexColor("#FFA500");
/// Used for unmapped companies and placeholder text
pub const MUTED: HexColor = HexColor("#9A9AB0");

static COMPANY_COLORS: Lazy<HashMap<&'static str, HexColor>> = Lazy::new(|| {
    HashMap::from([
        ("OpenAI", GREEN),
        ("Anthropic", PURPLE),
        ("Google", BLUE),
        ("Mistral", ORANGE),
        ("Perplexity", PINK),
        ("Meta", AMBER),
    ])
});

/// Colour used for a company name, `MUTED` when the company is unknown.
pub fn company_color(company: &str) -> HexColor {
    COMPANY_COLORS.get(company).copied().unwrap_or(MUTED)
}

/// Four colour bands over the 0-100 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreTier {
    /// 80 and above
    A,
    /// 60-79
    B,
    /// 40-59
    C,
    /// below 40
    D,
}

impl ScoreTier {
    pub fn of(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreTier::A,
            60..=79 => ScoreTier::B,
            40..=59 => ScoreTier::C,
            _ => ScoreTier::D,
        }
    }

    pub fn color(self) -> HexColor {
        match self {
            ScoreTier::A => GREEN,
            ScoreTier::B => BLUE,
            ScoreTier::C => ORANGE,
            ScoreTier::D => PURPLE,
        }
    }
}

/// Shorthand for `ScoreTier::of(score).color()`.
pub fn score_color(score: u8) -> HexColor {
    ScoreTier::of(score).color()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ScoreTier::of(100), ScoreTier::A);
        assert_eq!(ScoreTier::of(80), ScoreTier::A);
        assert_eq!(ScoreTier::of(79), ScoreTier::B);
        assert_eq!(ScoreTier::of(60), ScoreTier::B);
        assert_eq!(ScoreTier::of(59), ScoreTier::C);
        assert_eq!(ScoreTier::of(40), ScoreTier::C);
        assert_eq!(ScoreTier::of(39), ScoreTier::D);
        assert_eq!(ScoreTier::of(0), ScoreTier::D);
    }

    #[test]
    fn test_company_colors() {
        assert_eq!(company_color("Anthropic"), PURPLE);
        assert_eq!(company_color("Meta"), AMBER);
        assert_eq!(company_color("Acme"), MUTED);
    }

    #[test]
    fn test_rgb_channels() {
        assert_eq!(PURPLE.rgb(), (0x8A, 0x2B, 0xE2));
        assert_eq!(HexColor("#zz").rgb(), (0, 0, 0));
    }
}
