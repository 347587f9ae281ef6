use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::envelope::ApiResponse;
use crate::domain::paginated::PaginatedResponse;
use crate::error::ApiResult;

/// Backend operations on companies
///
/// Entities travel as raw JSON objects because the edit flows work on a
/// superset of the typed model. Callers deserialize into typed models where
/// they need them.
///
/// # Example
/// ```ignore
/// let response = service.get_company_by_id(42).await?;
/// let company: CompanyModel = serde_json::from_value(response.data.unwrap_or_default())?;
/// ```
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// List companies visible to the current user
    ///
    /// # Arguments
    /// * `page` - Zero-based page index
    /// * `size` - Page size
    async fn list_companies(
        &self,
        page: usize,
        size: usize,
    ) -> ApiResult<ApiResponse<PaginatedResponse<Value>>>;

    /// Fetch a single company by its numeric identifier
    async fn get_company_by_id(&self, id: i64) -> ApiResult<ApiResponse<Value>>;

    /// Send a partial update containing only changed fields
    ///
    /// # Arguments
    /// * `id` - The company identifier
    /// * `patch` - The diff payload; never empty when called by an edit session
    async fn update_company(
        &self,
        id: i64,
        patch: &Map<String, Value>,
    ) -> ApiResult<ApiResponse<Value>>;
}
