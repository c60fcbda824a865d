//! Background value codec.
//!
//! A background is either a solid CSS color or a linear gradient with an
//! angle and positioned color stops:
//!
//! ```text
//! solid    := <css-color>
//! gradient := "linear-gradient(" [<angle> "deg,"] <stop> ("," <stop>)+ ")"
//! stop     := <css-color> [<percent> "%"]
//! ```
//!
//! Decoding never fails loudly: anything that is neither a color nor a
//! well-formed gradient decodes to `None`, and callers pick a default.

mod color;
mod gradient;

use std::fmt;

pub use color::is_color;
pub use gradient::DEFAULT_ANGLE;

/// One gradient color stop. `position` is a percentage in 0..=100.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub color: String,
    pub position: f64,
}

impl ColorStop {
    pub fn new(color: impl Into<String>, position: f64) -> Self {
        Self {
            color: color.into(),
            position,
        }
    }
}

/// A `linear-gradient` with its angle in degrees and stops in parsed order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub angle: f64,
    pub stops: Vec<ColorStop>,
}

/// A decoded background value.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// A CSS color, kept verbatim.
    Solid(String),
    Gradient(LinearGradient),
}

impl Background {
    /// Background used when a stored value does not decode.
    pub const DEFAULT_COLOR: &'static str = "#ffffff";

    /// Classify a background string. `None` means the value is neither a
    /// color nor a gradient.
    pub fn decode(value: &str) -> Option<Background> {
        let value = value.trim();
        if value.starts_with("linear-gradient") {
            gradient::parse_linear_gradient(value).map(Background::Gradient)
        } else if is_color(value) {
            Some(Background::Solid(value.to_string()))
        } else {
            None
        }
    }

    /// Decode, falling back to [`Background::DEFAULT_COLOR`].
    pub fn decode_or_default(value: &str) -> Background {
        Self::decode(value).unwrap_or_else(|| {
            log::debug!("invalid background {value:?}, using {}", Self::DEFAULT_COLOR);
            Background::Solid(Self::DEFAULT_COLOR.to_string())
        })
    }

    /// Canonical string form. Gradient stops are written sorted by position
    /// with two decimals.
    pub fn encode(&self) -> String {
        match self {
            Background::Solid(color) => color.clone(),
            Background::Gradient(gradient) => {
                let mut stops: Vec<&ColorStop> = gradient.stops.iter().collect();
                stops.sort_by(|a, b| a.position.total_cmp(&b.position));
                let stops = stops
                    .iter()
                    .map(|s| format!("{} {:.2}%", s.color, s.position))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("linear-gradient({}deg, {stops})", format_number(gradient.angle))
            }
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Background::Gradient(_))
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Integral values print without a fractional part.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid() {
        assert_eq!(
            Background::decode("#f1f5f9"),
            Some(Background::Solid("#f1f5f9".into()))
        );
        assert_eq!(Background::decode("#f1f5f9").unwrap().encode(), "#f1f5f9");
    }

    #[test]
    fn test_invalid_is_none() {
        assert_eq!(Background::decode("url(hero.png)"), None);
        assert_eq!(Background::decode(""), None);
        assert_eq!(Background::decode("linear-gradient(red)"), None);
    }

    #[test]
    fn test_unclosed_values_are_invalid() {
        assert_eq!(Background::decode("rgb(255, 0, 0"), None);
        assert_eq!(Background::decode("linear-gradient(red, blue"), None);
        assert_eq!(
            Background::decode_or_default("rgb(255, 0, 0"),
            Background::Solid("#ffffff".into())
        );
    }

    #[test]
    fn test_huge_angle_is_invalid() {
        assert_eq!(Background::decode("linear-gradient(1e400deg, red, blue)"), None);
    }

    #[test]
    fn test_decode_or_default() {
        assert_eq!(
            Background::decode_or_default("not a color"),
            Background::Solid("#ffffff".into())
        );
    }

    #[test]
    fn test_encode_sorts_stops() {
        let background = Background::Gradient(LinearGradient {
            angle: 90.0,
            stops: vec![ColorStop::new("#000", 100.0), ColorStop::new("#fff", 0.0)],
        });
        assert_eq!(
            background.encode(),
            "linear-gradient(90deg, #fff 0.00%, #000 100.00%)"
        );
    }

    #[test]
    fn test_encode_fractional_angle() {
        let background = Background::Gradient(LinearGradient {
            angle: 22.5,
            stops: vec![ColorStop::new("red", 0.0), ColorStop::new("blue", 100.0)],
        });
        assert!(background.encode().starts_with("linear-gradient(22.5deg, "));
    }

    #[test]
    fn test_gradient_round_trip() {
        let input = "linear-gradient(135deg, #ff0000 0%, rgba(0, 0, 255, 0.5) 33.333%, #00ff00 100%)";
        let once = Background::decode(input).unwrap().encode();
        let twice = Background::decode(&once).unwrap().encode();
        assert_eq!(once, twice);
        assert!(once.contains("rgba(0, 0, 255, 0.5) 33.33%"));
    }
}
