use async_trait::async_trait;
use receivables_core_api::domain::envelope::ApiResponse;
use receivables_core_api::domain::paginated::PaginatedResponse;
use receivables_core_api::error::ApiResult;
use receivables_core_api::service::customer_service::CustomerService;
use serde_json::{Map, Value};

use super::backend::HttpBackend;

pub(crate) fn company_customers_path(company_id: i64) -> String {
    format!("/customer/company/{company_id}")
}

pub(crate) fn customer_path(id: i64) -> String {
    format!("/customer/{id}")
}

#[async_trait]
impl CustomerService for HttpBackend {
    async fn list_customers(
        &self,
        company_id: i64,
        page: usize,
        size: usize,
    ) -> ApiResult<ApiResponse<PaginatedResponse<Value>>> {
        let request = self
            .client()
            .get(self.url(&company_customers_path(company_id)))
            .query(&[("page", page), ("size", size)]);
        self.send(request).await
    }

    async fn get_customer_by_id(&self, id: i64) -> ApiResult<ApiResponse<Value>> {
        let request = self.client().get(self.url(&customer_path(id)));
        self.send(request).await
    }

    async fn update_customer(
        &self,
        id: i64,
        patch: &Map<String, Value>,
    ) -> ApiResult<ApiResponse<Value>> {
        tracing::debug!(customer_id = id, fields = patch.len(), "patching customer");
        let request = self.client().patch(self.url(&customer_path(id))).json(patch);
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_paths() {
        assert_eq!(company_customers_path(3), "/customer/company/3");
        assert_eq!(customer_path(9), "/customer/9");
    }
}
