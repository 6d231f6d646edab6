use serde_json::{Number, Value};

/// Structural equality of two parameter values
///
/// Arrays compare element-wise in order, objects by key set and values
/// regardless of key order, and numbers by numeric value. Values of
/// different shapes are never equal, so `5` and `"5"` differ.
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| values_equal(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x
                    .iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| values_equal(l, r)))
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_is_not_string() {
        assert!(!values_equal(&json!(5), &json!("5")));
        assert!(!values_equal(&json!(true), &json!("true")));
        assert!(!values_equal(&json!(null), &json!("null")));
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert!(values_equal(&json!(1), &json!(1.0)));
        assert!(values_equal(&json!(-3), &json!(-3)));
        assert!(!values_equal(&json!(1), &json!(2)));
    }

    #[test]
    fn test_arrays_are_order_sensitive() {
        assert!(values_equal(&json!([1, "a"]), &json!([1, "a"])));
        assert!(!values_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!values_equal(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn test_objects_ignore_key_order() {
        let a: Value = serde_json::from_str(r#"{"a":1,"b":{"c":[true]}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"b":{"c":[true]},"a":1}"#).unwrap();
        assert!(values_equal(&a, &b));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!values_equal(&json!({"a": 1}), &json!({"b": 1})));
    }
}
