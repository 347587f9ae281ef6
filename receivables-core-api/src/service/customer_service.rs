use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::envelope::ApiResponse;
use crate::domain::paginated::PaginatedResponse;
use crate::error::ApiResult;

/// Backend operations on the customers of a company
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List customers of a company
    ///
    /// # Arguments
    /// * `company_id` - Owning company
    /// * `page` - Zero-based page index
    /// * `size` - Page size
    async fn list_customers(
        &self,
        company_id: i64,
        page: usize,
        size: usize,
    ) -> ApiResult<ApiResponse<PaginatedResponse<Value>>>;

    async fn get_customer_by_id(&self, id: i64) -> ApiResult<ApiResponse<Value>>;

    async fn update_customer(
        &self,
        id: i64,
        patch: &Map<String, Value>,
    ) -> ApiResult<ApiResponse<Value>>;
}
