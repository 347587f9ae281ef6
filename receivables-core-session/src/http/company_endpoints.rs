use async_trait::async_trait;
use receivables_core_api::domain::envelope::ApiResponse;
use receivables_core_api::domain::paginated::PaginatedResponse;
use receivables_core_api::error::ApiResult;
use receivables_core_api::service::company_service::CompanyService;
use serde_json::{Map, Value};

use super::backend::HttpBackend;

pub(crate) fn company_list_path() -> &'static str {
    "/api/companies"
}

pub(crate) fn company_path(id: i64) -> String {
    format!("/api/companies/{id}")
}

pub(crate) fn company_update_path(id: i64) -> String {
    format!("/api/companies/{id}/update")
}

#[async_trait]
impl CompanyService for HttpBackend {
    async fn list_companies(
        &self,
        page: usize,
        size: usize,
    ) -> ApiResult<ApiResponse<PaginatedResponse<Value>>> {
        let request = self
            .client()
            .get(self.url(company_list_path()))
            .query(&[("page", page), ("size", size)]);
        self.send(request).await
    }

    async fn get_company_by_id(&self, id: i64) -> ApiResult<ApiResponse<Value>> {
        let request = self.client().get(self.url(&company_path(id)));
        self.send(request).await
    }

    async fn update_company(
        &self,
        id: i64,
        patch: &Map<String, Value>,
    ) -> ApiResult<ApiResponse<Value>> {
        tracing::debug!(company_id = id, fields = patch.len(), "patching company");
        let request = self.client().patch(self.url(&company_update_path(id))).json(patch);
        self.send(request).await
    }
}
