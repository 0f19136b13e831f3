// ABOUTME: Configured panel dimensions, either fixed pixels or a container percentage.
// ABOUTME: Deserializes from numbers or strings like "50%" and "320px".

use serde::{Deserialize, Serialize};

use crate::geometry::{parse_size, sanitize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDimension", into = "RawDimension")]
pub enum Dimension {
    /// Absolute pixels
    Fixed(f32),
    /// Percentage (0-100) of the matching container extent
    Percent(f32),
}

impl Dimension {
    /// Resolve to pixels against a container extent
    pub fn resolve(&self, extent: f32) -> f32 {
        match *self {
            Dimension::Fixed(px) => sanitize(px),
            Dimension::Percent(pct) => sanitize(extent * pct / 100.0),
        }
    }

    /// Parse `"50%"`, `"320px"` or `"320"`. Malformed input yields `Fixed(0)`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        match trimmed.strip_suffix('%') {
            Some(pct) => Dimension::Percent(parse_size(pct)),
            None => Dimension::Fixed(parse_size(trimmed)),
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::Fixed(0.0)
    }
}

impl From<f32> for Dimension {
    fn from(px: f32) -> Self {
        Dimension::Fixed(sanitize(px))
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawDimension {
    Number(f64),
    Text(String),
}

impl From<RawDimension> for Dimension {
    fn from(raw: RawDimension) -> Self {
        match raw {
            RawDimension::Number(n) => Dimension::from(n as f32),
            RawDimension::Text(text) => Dimension::parse(&text),
        }
    }
}

impl From<Dimension> for RawDimension {
    fn from(dim: Dimension) -> Self {
        match dim {
            Dimension::Fixed(px) => RawDimension::Number(px as f64),
            Dimension::Percent(pct) => RawDimension::Text(format!("{}%", pct)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_resolves_against_extent() {
        assert!((Dimension::Percent(25.0).resolve(800.0) - 200.0).abs() < 0.001);
        assert!((Dimension::Fixed(320.0).resolve(800.0) - 320.0).abs() < 0.001);
    }

    #[test]
    fn parse_handles_units() {
        assert_eq!(Dimension::parse("50%"), Dimension::Percent(50.0));
        assert_eq!(Dimension::parse(" 320px "), Dimension::Fixed(320.0));
        assert_eq!(Dimension::parse("320"), Dimension::Fixed(320.0));
    }

    #[test]
    fn malformed_dimension_is_zero() {
        assert_eq!(Dimension::parse("half"), Dimension::Fixed(0.0));
        assert_eq!(Dimension::parse("abc%"), Dimension::Percent(0.0));
        assert_eq!(Dimension::parse("abc%").resolve(800.0), 0.0);
    }

    #[test]
    fn deserializes_from_number_or_string() {
        #[derive(Deserialize)]
        struct Probe {
            a: Dimension,
            b: Dimension,
            c: Dimension,
        }

        let probe: Probe = toml::from_str("a = 240\nb = \"40%\"\nc = \"oops\"").unwrap();
        assert_eq!(probe.a, Dimension::Fixed(240.0));
        assert_eq!(probe.b, Dimension::Percent(40.0));
        assert_eq!(probe.c, Dimension::Fixed(0.0));
    }
}
