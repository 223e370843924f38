//! Flat mapping to `key=value&...` query strings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{Map, Number, Value};

/// Characters left alone by browsers' `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Returned for an absent or empty mapping.
pub const EMPTY_QUERY: &str = "(none)";

#[derive(Clone, Copy, Debug)]
pub struct QueryStringOptions {
    /// Percent-encode values. Keys are written as given.
    pub percent_encode: bool,
    /// Trim string values before encoding.
    pub trim_values: bool,
}

impl Default for QueryStringOptions {
    fn default() -> Self {
        QueryStringOptions {
            percent_encode: true,
            trim_values: false,
        }
    }
}

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Pairs are emitted in the mapping's insertion order. Nested arrays/objects are
/// not supported; they are written as compact JSON.
pub fn mapping_to_query_string(map: Option<&Map<String, Value>>, options: QueryStringOptions) -> String {
    let Some(map) = map.filter(|m| !m.is_empty()) else {
        return EMPTY_QUERY.to_string();
    };
    map.iter()
        .map(|(key, value)| {
            let raw = scalar_to_string(value);
            let raw = if options.trim_values && value.is_string() {
                raw.trim().to_string()
            } else {
                raw
            };
            let value = if options.percent_encode { encode_component(&raw) } else { raw };
            format!("{}={}", key, value)
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        other => other.to_string(),
    }
}

/// Integral floats drop the fraction (`1.0` -> `1`, `-0.0` -> `0`) below 1e21,
/// where JavaScript switches to exponent form.
fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".into(),
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn encodes_values_in_insertion_order() {
        let m = obj(json!({ "b": "hi there", "a": "1" }));
        assert_eq!(
            mapping_to_query_string(Some(&m), QueryStringOptions::default()),
            "b=hi%20there&a=1"
        );
        let m = obj(json!({ "a": "1", "b": "hi there" }));
        assert_eq!(
            mapping_to_query_string(Some(&m), QueryStringOptions::default()),
            "a=1&b=hi%20there"
        );
    }

    #[test]
    fn absent_or_empty_is_none_marker() {
        assert_eq!(mapping_to_query_string(None, QueryStringOptions::default()), "(none)");
        assert_eq!(
            mapping_to_query_string(Some(&Map::new()), QueryStringOptions::default()),
            "(none)"
        );
    }

    #[test]
    fn one_pair_per_key() {
        let m = obj(json!({ "x": "a&b=c", "y": 2, "z": true, "w": null }));
        let out = mapping_to_query_string(Some(&m), QueryStringOptions::default());
        let pairs: Vec<&str> = out.split('&').collect();
        assert_eq!(pairs.len(), m.len());
        assert_eq!(pairs, ["x=a%26b%3Dc", "y=2", "z=true", "w=null"]);
    }

    #[test]
    fn numbers_stringify_like_javascript() {
        let m = obj(json!({ "a": 1.0, "b": -0.0, "c": 2.5, "d": 1e20, "e": -3, "f": 7u64 }));
        let raw = QueryStringOptions {
            percent_encode: false,
            trim_values: false,
        };
        assert_eq!(
            mapping_to_query_string(Some(&m), raw),
            "a=1&b=0&c=2.5&d=100000000000000000000&e=-3&f=7"
        );
    }

    #[test]
    fn component_set_matches_browser() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("é/?#"), "%C3%A9%2F%3F%23");
    }

    #[test]
    fn raw_and_trimmed_modes() {
        let m = obj(json!({ "q": "  hi there ", "n": 1 }));
        let raw = QueryStringOptions {
            percent_encode: false,
            trim_values: false,
        };
        assert_eq!(mapping_to_query_string(Some(&m), raw), "q=  hi there &n=1");
        let trimmed = QueryStringOptions {
            percent_encode: false,
            trim_values: true,
        };
        assert_eq!(mapping_to_query_string(Some(&m), trimmed), "q=hi there&n=1");
        let both = QueryStringOptions {
            percent_encode: true,
            trim_values: true,
        };
        assert_eq!(mapping_to_query_string(Some(&m), both), "q=hi%20there&n=1");
    }
}
