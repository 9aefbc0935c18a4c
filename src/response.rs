//! Success body helpers. Bodies are flat JSON objects; status is always 200.

use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub fn message(message: String) -> Json<MessageBody> {
    Json(MessageBody { message })
}

/// `{ "message": ..., "<id_key>": id }`, e.g. `userId` or `productId`.
pub fn created(message: String, id_key: &str, id: i64) -> Json<Value> {
    let mut body = Map::new();
    body.insert("message".into(), Value::String(message));
    body.insert(id_key.into(), Value::Number(id.into()));
    Json(Value::Object(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_body_is_flat() {
        let Json(body) = created("User added successfully!".into(), "userId", 4);
        assert_eq!(
            body,
            serde_json::json!({ "message": "User added successfully!", "userId": 4 })
        );
    }
}
