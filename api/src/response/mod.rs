use axum::{Json, http::StatusCode};
use serde::Serialize;

/// JSON envelope shared by every endpoint:
///
/// ```json
/// { "success": true, "data": { ... }, "message": "Seeded test data." }
/// ```
///
/// Error responses carry `T::default()` as `data`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }

    /// Pairs the envelope with a status code so handlers can return it directly.
    pub fn with_status(self, status: StatusCode) -> (StatusCode, Json<Self>) {
        (status, Json(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_uses_default_data() {
        let json = serde_json::to_value(ApiResponse::<Vec<u8>>::error("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], serde_json::json!([]));
        assert_eq!(json["message"], "nope");
    }
}
