//! Lenient decoding helpers for the hotel API.
//!
//! The server is loose about JSON types: identifiers arrive as numbers on
//! one endpoint and as strings on the next, flags as `0`/`1`, and empty
//! collections as `null`. Aggregates opt into these helpers field by field
//! with `#[serde(deserialize_with = "...")]`.

use serde::de::{Deserialize, DeserializeOwned, Deserializer, Error};
use serde_json::Value;

/// Text form of a JSON scalar as a person would read it. `null` becomes "".
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// JavaScript-style truthiness, used for `valid`/`content` style markers.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_to_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

pub fn string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

pub fn opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        other => Some(value_to_text(&other)),
    })
}

/// Integer identifiers; accepts `7`, `7.0` and `"7"`.
pub fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_to_i64(&value).ok_or_else(|| D::Error::custom(format!("expected an integer, got {value}")))
}

pub fn opt_i64_lenient<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_i64(&value))
}

pub fn opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_f64(&value))
}

/// Flags sent as `true`, `1` or `"1"`.
pub fn bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::String(s) => matches!(s.trim(), "1" | "true" | "TRUE" | "True"),
        other => is_truthy(other),
    })
}

/// `null` or a missing array decodes as empty.
pub fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "string_lenient")]
        text: String,
        #[serde(default, deserialize_with = "opt_i64_lenient")]
        id: Option<i64>,
        #[serde(default, deserialize_with = "bool_lenient")]
        flag: bool,
        #[serde(default, deserialize_with = "vec_or_null")]
        list: Vec<i64>,
    }

    #[test]
    fn accepts_numbers_where_text_is_expected() {
        let probe: Probe = serde_json::from_value(json!({ "text": 42 })).unwrap();
        assert_eq!(probe.text, "42");
        assert!(probe.list.is_empty());
    }

    #[test]
    fn parses_numeric_strings_as_ids() {
        let probe: Probe = serde_json::from_value(json!({ "id": " 17 " })).unwrap();
        assert_eq!(probe.id, Some(17));

        let probe: Probe = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        assert_eq!(probe.id, None);
    }

    #[test]
    fn reads_flags_like_the_server_sends_them() {
        for (raw, expected) in [
            (json!(1), true),
            (json!("1"), true),
            (json!(true), true),
            (json!(0), false),
            (json!("0"), false),
            (json!(null), false),
        ] {
            let probe: Probe = serde_json::from_value(json!({ "flag": raw })).unwrap();
            assert_eq!(probe.flag, expected);
        }
    }

    #[test]
    fn null_list_is_empty() {
        let probe: Probe = serde_json::from_value(json!({ "list": null })).unwrap();
        assert!(probe.list.is_empty());
    }

    #[test]
    fn truthiness_matches_browser_rules() {
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!("valid")));
    }
}
