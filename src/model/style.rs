//! Open, insertion-ordered presentation property maps.
//!
//! Keys are camelCase CSS property names (`fontSize`, `borderTop`) as the
//! editor stores them. Order matters: the serializer emits declarations in
//! map order, so the map must round-trip through JSON and HTML unchanged.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single style value: either a string (`"10px"`) or a bare number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Text(s) => serializer.serialize_str(s),
            // Integral numbers stay integers in JSON (`16`, not `16.0`).
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                serializer.serialize_i64(*n as i64)
            }
            StyleValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl StyleValue {
    /// Whether the value counts as set.
    ///
    /// Empty strings and zero are unset, matching how the editor tests
    /// properties for presence.
    pub fn is_set(&self) -> bool {
        match self {
            StyleValue::Text(s) => !s.is_empty(),
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    /// The value as a string slice, if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Number(_) => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                write!(f, "{}", *n as i64)
            }
            StyleValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n as f64)
    }
}

/// Insertion-ordered map of presentation properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    entries: Vec<(String, StyleValue)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Get a property only when it is set (non-empty).
    pub fn get_set(&self, key: &str) -> Option<&StyleValue> {
        self.get(key).filter(|v| v.is_set())
    }

    /// Render a set property as a string.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_set(key).map(|v| v.to_string())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Insert a property. An existing key keeps its position and takes the
    /// new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Copy of this map without the given keys.
    pub fn without(&self, keys: &[&str]) -> Style {
        self.entries
            .iter()
            .filter(|(k, _)| !keys.contains(&k.as_str()))
            .cloned()
            .collect()
    }

    /// Overlay `other` onto this map (existing keys keep their position).
    pub fn merged(mut self, other: &Style) -> Style {
        for (k, v) in other.iter() {
            self.insert(k, v.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = Style::new();
        for (k, v) in iter {
            style.insert(k, v);
        }
        style
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StyleVisitor;

        impl<'de> Visitor<'de> for StyleVisitor {
            type Value = Style;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of style properties")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Style, A::Error> {
                let mut style = Style::new();
                while let Some((key, value)) = access.next_entry::<String, Option<StyleValue>>()? {
                    // Null values come from editors that clear a property.
                    if let Some(value) = value {
                        style.insert(key, value);
                    }
                }
                Ok(style)
            }
        }

        deserializer.deserialize_map(StyleVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position() {
        let mut style = Style::new().with("color", "#000").with("padding", "10px");
        style.insert("color", "#fff");

        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["color", "padding"]);
        assert_eq!(style.get_string("color").as_deref(), Some("#fff"));
    }

    #[test]
    fn test_without() {
        let style = Style::new()
            .with("textAlign", "left")
            .with("padding", "4px")
            .with("verticalAlign", "top");
        let rest = style.without(&["textAlign", "verticalAlign"]);
        assert_eq!(rest.len(), 1);
        assert!(rest.contains_key("padding"));
    }

    #[test]
    fn test_unset_values() {
        let style = Style::new().with("verticalAlign", "").with("opacity", 0);
        assert!(style.get_set("verticalAlign").is_none());
        assert!(style.get_set("opacity").is_none());
    }

    #[test]
    fn test_number_display() {
        assert_eq!(StyleValue::Number(16.0).to_string(), "16");
        assert_eq!(StyleValue::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_json_preserves_order() {
        let json = r#"{"zIndex":2,"color":"red","alpha":null,"border":"0"}"#;
        let style: Style = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zIndex", "color", "border"]);
        assert_eq!(
            serde_json::to_string(&style).unwrap(),
            r#"{"zIndex":2,"color":"red","border":"0"}"#
        );
    }
}
