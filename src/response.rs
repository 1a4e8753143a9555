use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement returned by every write endpoint.
#[derive(Debug, Serialize, ToSchema, Clone, PartialEq)]
pub struct WriteResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl WriteResponse {
    pub fn created(id: i64) -> Self {
        Self {
            success: true,
            id: Some(id),
        }
    }

    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginFailure {
    pub success: bool,
    pub message: String,
}
