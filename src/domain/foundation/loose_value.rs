//! Loosely typed scalar as found in imported records and tool arguments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar that may arrive as an integer, a float, or a string.
///
/// The bulk import writes every CSV cell as text while older records carry
/// numbers, so the same field can hold `2024` or `"2024"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseValue {
    /// Reads a JSON scalar. Arrays, objects, booleans and null yield `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::Int(i)),
                None => n.as_f64().map(Self::Float),
            },
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Integer view: floats are truncated, text is parsed after trimming.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Self::Float(_) => None,
            Self::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            }
        }
    }

    /// Text view: numbers are rendered in their decimal form.
    pub fn as_text(&self) -> String {
        self.to_string()
    }

    /// True when this value equals `year` numerically or as its decimal string.
    ///
    /// Numbers compare by value the way the document store does, so `2024.0`
    /// matches. Text is compared verbatim, so `" 2024"` does not match.
    pub fn matches_year(&self, year: i64) -> bool {
        match self {
            Self::Int(i) => *i == year,
            Self::Text(s) => *s == year.to_string(),
            Self::Float(f) => *f == year as f64,
        }
    }
}

impl fmt::Display for LooseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_integer_float_and_text() {
        let values: Vec<LooseValue> = serde_json::from_str(r#"[2024, 64.8, "2024"]"#).unwrap();
        assert_eq!(values[0], LooseValue::Int(2024));
        assert_eq!(values[1], LooseValue::Float(64.8));
        assert_eq!(values[2], LooseValue::Text("2024".to_string()));
    }

    #[test]
    fn serializes_back_to_original_shape() {
        assert_eq!(serde_json::to_value(LooseValue::Int(7)).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(LooseValue::from("7")).unwrap(), json!("7"));
    }

    #[test]
    fn from_json_ignores_non_scalars() {
        assert!(LooseValue::from_json(&json!(null)).is_none());
        assert!(LooseValue::from_json(&json!(true)).is_none());
        assert!(LooseValue::from_json(&json!([1])).is_none());
        assert!(LooseValue::from_json(&json!({"a": 1})).is_none());
        assert_eq!(LooseValue::from_json(&json!(3)), Some(LooseValue::Int(3)));
    }

    #[test]
    fn as_i64_coerces_text_and_floats() {
        assert_eq!(LooseValue::from(" 25 ").as_i64(), Some(25));
        assert_eq!(LooseValue::from("12.9").as_i64(), Some(12));
        assert_eq!(LooseValue::Float(3.7).as_i64(), Some(3));
        assert_eq!(LooseValue::from("ten").as_i64(), None);
        assert_eq!(LooseValue::Float(f64::NAN).as_i64(), None);
    }

    #[test]
    fn matches_year_accepts_both_representations() {
        assert!(LooseValue::Int(2024).matches_year(2024));
        assert!(LooseValue::from("2024").matches_year(2024));
        assert!(!LooseValue::from("2023").matches_year(2024));
        assert!(!LooseValue::Int(2023).matches_year(2024));
    }

    #[test]
    fn matches_year_compares_floats_numerically() {
        assert!(LooseValue::Float(2024.0).matches_year(2024));
        assert!(!LooseValue::Float(2024.5).matches_year(2024));
    }

    #[test]
    fn as_text_renders_numbers() {
        assert_eq!(LooseValue::Int(42).as_text(), "42");
        assert_eq!(LooseValue::from("AKS").as_text(), "AKS");
    }
}
