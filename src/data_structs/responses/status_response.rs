use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct HealthResponse {
    status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy".to_string() }
    }
}

#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct StatusResponse {
    status: String,
    message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        Self { status: "success".to_string(), message: message.to_string() }
    }
}

/// Body for 400 and 500 responses, the `{"detail": ...}` shape.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct ErrorResponse {
    detail: String,
}

impl ErrorResponse {
    pub fn new(detail: String) -> Self {
        Self { detail }
    }
}

/// One schema-level violation inside a 422 response.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
}

/// Body for 422 responses: a machine-readable list of violations.
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldViolation>,
}

impl ValidationErrorResponse {
    pub fn single(loc: Vec<String>, msg: String) -> Self {
        Self { detail: vec![FieldViolation { loc, msg }] }
    }
}
