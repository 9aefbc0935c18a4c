//! Request validation: required-field presence, then coercion to each column's kind.

use crate::error::AppError;
use crate::model::{ColumnDef, ColumnKind, ResourceDef};
use crate::sql::BindValue;
use serde_json::{Map, Value};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create/update body and return its bind values in column order.
    /// Missing required fields are reported before any coercion failure.
    pub fn validate(def: &ResourceDef, body: &Map<String, Value>) -> Result<Vec<BindValue>, AppError> {
        if def.columns.iter().any(|c| c.required && is_missing(c, body.get(c.name))) {
            return Err(AppError::BadRequest(def.missing_fields.to_string()));
        }
        def.columns
            .iter()
            .map(|c| to_bind(c, body.get(c.name)))
            .collect()
    }
}

/// Absent and null are missing; for required text columns so is "".
fn is_missing(col: &ColumnDef, val: Option<&Value>) -> bool {
    match val {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => col.kind == ColumnKind::Text && s.is_empty(),
        Some(_) => false,
    }
}

/// Binds a present value, coercing the way a SQL column would accept it: numbers and
/// bools become text, numeric strings become numbers, integral floats become integers.
fn to_bind(col: &ColumnDef, val: Option<&Value>) -> Result<BindValue, AppError> {
    let v = match val {
        None | Some(Value::Null) => return Ok(BindValue::Null),
        Some(v) => v,
    };
    let bound = match col.kind {
        ColumnKind::Text => as_text(v).map(BindValue::Text),
        ColumnKind::Float => as_float(v).map(BindValue::Float),
        ColumnKind::Integer => as_integer(v).map(BindValue::Integer),
    };
    bound.ok_or_else(|| AppError::BadRequest(format!("{} must be {}", col.name, col.kind.label())))
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn as_float(v: &Value) -> Option<f64> {
    let f = match v {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    f.is_finite().then_some(f)
}

fn as_integer(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    if let Value::String(s) = v {
        if let Ok(n) = s.trim().parse::<i64>() {
            return Some(n);
        }
    }
    let f = as_float(v)?;
    let integral = f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64;
    integral.then_some(f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PRODUCTS, USERS};
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    fn bad_request(res: Result<Vec<BindValue>, AppError>) -> String {
        match res {
            Err(AppError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {:?}", other),
        }
    }

    #[test]
    fn product_without_description_binds_null() {
        let body = obj(json!({ "name": "Pen", "category": "Office", "price": 1.5, "quantity": 100 }));
        let values = RequestValidator::validate(&PRODUCTS, &body).unwrap();
        assert_eq!(
            values,
            vec![
                BindValue::Text("Pen".into()),
                BindValue::Null,
                BindValue::Text("Office".into()),
                BindValue::Float(1.5),
                BindValue::Integer(100),
            ]
        );
    }

    #[test]
    fn missing_or_null_required_field_is_rejected() {
        for body in [
            json!({ "username": "alice" }),
            json!({ "username": "alice", "password": null }),
            json!({ "username": "", "password": "pw" }),
        ] {
            assert_eq!(
                bad_request(RequestValidator::validate(&USERS, &obj(body))),
                "Username and password are required"
            );
        }
    }

    #[test]
    fn zero_price_and_quantity_are_present() {
        let body = obj(json!({ "name": "Free", "category": "Promo", "price": 0, "quantity": 0 }));
        let values = RequestValidator::validate(&PRODUCTS, &body).unwrap();
        assert_eq!(values[3], BindValue::Float(0.0));
        assert_eq!(values[4], BindValue::Integer(0));
    }

    #[test]
    fn loosely_typed_values_are_coerced() {
        let body = obj(json!({
            "name": 42,
            "description": true,
            "category": "Office",
            "price": " 1.5 ",
            "quantity": "100"
        }));
        let values = RequestValidator::validate(&PRODUCTS, &body).unwrap();
        assert_eq!(
            values,
            vec![
                BindValue::Text("42".into()),
                BindValue::Text("true".into()),
                BindValue::Text("Office".into()),
                BindValue::Float(1.5),
                BindValue::Integer(100),
            ]
        );

        let body = obj(json!({ "name": "Pen", "category": "Office", "price": 2, "quantity": 100.0 }));
        let values = RequestValidator::validate(&PRODUCTS, &body).unwrap();
        assert_eq!(values[3], BindValue::Float(2.0));
        assert_eq!(values[4], BindValue::Integer(100));

        let body = obj(json!({ "name": "Pen", "category": "Office", "price": 1, "quantity": "7.0" }));
        assert_eq!(RequestValidator::validate(&PRODUCTS, &body).unwrap()[4], BindValue::Integer(7));
    }

    #[test]
    fn uncoercible_values_are_rejected() {
        let body = obj(json!({ "name": "Pen", "category": "Office", "price": "cheap", "quantity": 1 }));
        assert_eq!(bad_request(RequestValidator::validate(&PRODUCTS, &body)), "price must be a number");

        let body = obj(json!({ "name": "Pen", "category": "Office", "price": 1, "quantity": 2.5 }));
        assert_eq!(bad_request(RequestValidator::validate(&PRODUCTS, &body)), "quantity must be an integer");

        let body = obj(json!({ "username": ["a"], "password": "pw" }));
        assert_eq!(bad_request(RequestValidator::validate(&USERS, &body)), "username must be a string");
    }

    #[test]
    fn missing_fields_win_over_type_errors() {
        let body = obj(json!({ "name": 5, "category": "Office", "price": 1 }));
        assert_eq!(
            bad_request(RequestValidator::validate(&PRODUCTS, &body)),
            "Name, category, price, and quantity are required"
        );
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let body = obj(json!({ "id": 99, "username": "alice", "password": "pw" }));
        let values = RequestValidator::validate(&USERS, &body).unwrap();
        assert_eq!(values.len(), 2);
    }
}
