//! Canonical JSON and numeric rounding helpers

use serde_json::Value;

/// Serialize a value with sorted object keys and no whitespace.
///
/// Floats go through serde_json's shortest round-trip formatting, so the same
/// f64 always yields the same text.
pub fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Round to 4 decimal places. Negative zero comes back as zero.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_json_nested() {
        let value = json!({"b": [1, {"y": true, "x": null}], "a": "s"});
        assert_eq!(canonical_json(&value), r#"{"a":"s","b":[1,{"x":null,"y":true}]}"#);
    }

    #[test]
    fn test_canonical_json_floats_stable() {
        let parsed: Value = serde_json::from_str("150.0").unwrap();
        assert_eq!(canonical_json(&parsed), canonical_json(&json!(150.0_f64)));
        assert_eq!(canonical_json(&json!(0.1_f64 + 0.2_f64)), "0.30000000000000004");
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.23456), 1.2346);
        assert!(round4(-0.00004).is_sign_positive());
        assert_eq!(round4(2.0), 2.0);
    }
}
