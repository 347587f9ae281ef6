use async_trait::async_trait;
use receivables_core_api::domain::envelope::ApiResponse;
use receivables_core_api::error::ApiResult;
use receivables_core_api::service::company_service::CompanyService;
use receivables_core_api::service::customer_service::CustomerService;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Backend seam of an edit session: load one record, send one patch
#[async_trait]
pub trait EntityGateway: Send + Sync {
    /// The record, or `None` when the envelope carried no data
    async fn fetch(&self, id: i64) -> ApiResult<Option<Value>>;

    async fn patch(&self, id: i64, body: &Map<String, Value>) -> ApiResult<ApiResponse<Value>>;
}

pub struct CompanyGateway {
    service: Arc<dyn CompanyService>,
}

impl CompanyGateway {
    pub fn new(service: Arc<dyn CompanyService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EntityGateway for CompanyGateway {
    async fn fetch(&self, id: i64) -> ApiResult<Option<Value>> {
        Ok(self.service.get_company_by_id(id).await?.into_data())
    }

    async fn patch(&self, id: i64, body: &Map<String, Value>) -> ApiResult<ApiResponse<Value>> {
        self.service.update_company(id, body).await
    }
}

pub struct CustomerGateway {
    service: Arc<dyn CustomerService>,
}

impl CustomerGateway {
    pub fn new(service: Arc<dyn CustomerService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EntityGateway for CustomerGateway {
    async fn fetch(&self, id: i64) -> ApiResult<Option<Value>> {
        Ok(self.service.get_customer_by_id(id).await?.into_data())
    }

    async fn patch(&self, id: i64, body: &Map<String, Value>) -> ApiResult<ApiResponse<Value>> {
        self.service.update_customer(id, body).await
    }
}
