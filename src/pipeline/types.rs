use serde::Deserialize;

/// A value that is sometimes a bare string and sometimes an object
/// carrying a `name` field (genres, countries).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Named {
    Object { name: String },
    Text(String),
}

impl Named {
    /// Resolve to the display name regardless of shape
    pub fn name(&self) -> &str {
        match self {
            Self::Object { name } => name,
            Self::Text(text) => text,
        }
    }
}

/// Monetary value as delivered by the API: either a structured
/// amount+currency object, a bare number, or a legacy pre-formatted string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Money {
    Detailed {
        value: Option<i64>,
        currency: Option<String>,
    },
    Amount(i64),
    Text(String),
}

/// A numeric field that may arrive as an integer, a float, or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumLike {
    Int(i64),
    Float(f64),
    Text(String),
}

impl NumLike {
    /// Integer coercion: floats truncate, strings are trimmed and parsed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Float(f) => Some(*f as i64),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(f) => Some(*f),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl std::fmt::Display for NumLike {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            // Keep a trailing ".0" for whole floats so "8.0" stays "8.0"
            Self::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_accepts_both_shapes() {
        let object: Named = serde_json::from_value(json!({"name": "Drama"})).unwrap();
        let text: Named = serde_json::from_value(json!("комедия")).unwrap();

        assert_eq!(object.name(), "Drama");
        assert_eq!(text.name(), "комедия");
    }

    #[test]
    fn test_money_accepts_all_shapes() {
        let detailed: Money =
            serde_json::from_value(json!({"value": 1000, "currency": "USD"})).unwrap();
        assert!(matches!(detailed, Money::Detailed { .. }));

        let amount: Money = serde_json::from_value(json!(5000)).unwrap();
        assert!(matches!(amount, Money::Amount(5000)));

        let text: Money = serde_json::from_value(json!("1 234 RUB")).unwrap();
        assert!(matches!(text, Money::Text(_)));
    }

    #[test]
    fn test_numlike_coercion() {
        assert_eq!(NumLike::Int(90).as_int(), Some(90));
        assert_eq!(NumLike::Float(90.7).as_int(), Some(90));
        assert_eq!(NumLike::Text(" 90 ".into()).as_int(), Some(90));
        assert_eq!(NumLike::Text("abc".into()).as_int(), None);
    }

    #[test]
    fn test_numlike_display() {
        assert_eq!(NumLike::Int(8).to_string(), "8");
        assert_eq!(NumLike::Float(8.0).to_string(), "8.0");
        assert_eq!(NumLike::Float(8.1).to_string(), "8.1");
    }
}
