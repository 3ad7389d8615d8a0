//! Helpers for building module OpenAPI fragments.

use serde_json::{json, Value};

/// `$ref` to a named component schema.
pub fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{}", name) })
}

/// Array of a named component schema.
pub fn array_of(name: &str) -> Value {
    json!({ "type": "array", "items": schema_ref(name) })
}

/// JSON response object with the given schema.
pub fn json_response(description: &str, schema: Value) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": schema
            }
        }
    })
}

/// Response using the shared error envelope.
pub fn error_response(description: &str) -> Value {
    json_response(description, schema_ref("ErrorResponse"))
}

/// JSON request body with the given schema.
pub fn json_body(schema: Value) -> Value {
    json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": schema
            }
        }
    })
}

pub fn path_id(description: &str) -> Value {
    json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": description,
        "schema": { "type": "string" }
    })
}

pub fn query_param(name: &str, description: &str) -> Value {
    json!({
        "name": name,
        "in": "query",
        "required": false,
        "description": description,
        "schema": { "type": "string" }
    })
}

/// Plain-text module health endpoint.
pub fn health_path(tag: &str) -> Value {
    json!({
        "get": {
            "summary": format!("{} health check", tag),
            "tags": [tag],
            "responses": {
                "200": {
                    "description": "OK",
                    "content": {
                        "text/plain": {
                            "schema": { "type": "string" }
                        }
                    }
                }
            }
        }
    })
}

/// Nullable string property.
pub fn nullable_string(description: &str) -> Value {
    json!({ "type": ["string", "null"], "description": description })
}

/// Decimal amount, serialized as a string.
pub fn decimal(description: &str) -> Value {
    json!({ "type": "string", "format": "decimal", "description": description })
}

pub fn timestamp(description: &str) -> Value {
    json!({ "type": "string", "format": "date-time", "description": description })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_refs_point_at_components() {
        assert_eq!(schema_ref("Hotel")["$ref"], "#/components/schemas/Hotel");
        assert_eq!(array_of("Hotel")["items"]["$ref"], "#/components/schemas/Hotel");
    }
}
