use serde::{Deserialize, Serialize};

/// Response envelope returned by every backend endpoint
///
/// # Example
/// ```
/// use receivables_core_api::domain::envelope::ApiResponse;
///
/// let body = r#"{"statusCode":200,"status":"OK","message":"fetched","data":42}"#;
/// let response: ApiResponse<i64> = serde_json::from_str(body).unwrap();
/// assert!(response.is_success());
/// assert_eq!(response.data, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status_code: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status_code,
            status: if (200..300).contains(&status_code) {
                "OK".to_string()
            } else {
                "ERROR".to_string()
            },
            message: message.into(),
            data,
        }
    }

    /// Binary success check used by the login and signup flows
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_missing_envelope_fields_default() {
        let response: ApiResponse<Value> = serde_json::from_value(json!({ "data": { "id": 7 } })).unwrap();
        assert_eq!(response.status_code, 0);
        assert!(!response.is_success());
        assert_eq!(response.data, Some(json!({ "id": 7 })));
    }

    #[test]
    fn test_null_data_is_none() {
        let response: ApiResponse<Value> =
            serde_json::from_value(json!({ "statusCode": 204, "status": "OK", "message": "", "data": null }))
                .unwrap();
        assert!(response.is_success());
        assert!(response.into_data().is_none());
    }
}
