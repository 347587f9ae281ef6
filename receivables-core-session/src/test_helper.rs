//! Test context with in-memory fakes of the backend services
//!
//! Every test gets a fresh storage, backend and notifier, so tests never share
//! state and need no running backend.

use async_trait::async_trait;
use parking_lot::Mutex;
use receivables_core_api::domain::envelope::ApiResponse;
use receivables_core_api::domain::paginated::PaginatedResponse;
use receivables_core_api::error::{ApiError, ApiResult};
use receivables_core_api::service::company_service::CompanyService;
use receivables_core_api::service::customer_service::CustomerService;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::edit::entity::{CompanyEdit, CustomerEdit};
use crate::edit::gateway::{CompanyGateway, CustomerGateway};
use crate::edit::session::EditSession;
use crate::edit::test_utils::{create_test_company_json, create_test_customer_json};
use crate::notify::{Notification, NotificationLevel, Notifier};
use crate::storage::InMemoryStorage;

/// Backend double serving companies and customers from maps
#[derive(Default)]
pub struct FakeBackend {
    pub companies: Mutex<BTreeMap<i64, Value>>,
    pub customers: Mutex<BTreeMap<i64, Value>>,
    /// Every patch received, in order
    pub patches: Mutex<Vec<(i64, Map<String, Value>)>>,
    /// Status every call fails with, when set
    pub fail_with: Mutex<Option<u16>>,
}

impl FakeBackend {
    pub fn patch_count(&self) -> usize {
        self.patches.lock().len()
    }

    pub fn fail_with(&self, status: Option<u16>) {
        *self.fail_with.lock() = status;
    }

    fn check_failure(&self) -> ApiResult<()> {
        match *self.fail_with.lock() {
            Some(code) => Err(ApiError::from_status(code, "simulated failure")),
            None => Ok(()),
        }
    }

    fn page(rows: Vec<Value>, page: usize, size: usize) -> PaginatedResponse<Value> {
        let total_elements = rows.len();
        let size = size.max(1);
        let total_pages = total_elements.div_ceil(size);
        PaginatedResponse {
            content: rows.into_iter().skip(page * size).take(size).collect(),
            total_pages,
            number: page,
            size,
            total_elements,
            first: page == 0,
            last: page + 1 >= total_pages,
        }
    }

    fn record_patch(&self, id: i64, patch: &Map<String, Value>) -> ApiResponse<Value> {
        self.patches.lock().push((id, patch.clone()));
        ApiResponse::new(200, "updated", Some(Value::Object(patch.clone())))
    }
}

#[async_trait]
impl CompanyService for FakeBackend {
    async fn list_companies(
        &self,
        page: usize,
        size: usize,
    ) -> ApiResult<ApiResponse<PaginatedResponse<Value>>> {
        self.check_failure()?;
        let rows = self.companies.lock().values().cloned().collect();
        Ok(ApiResponse::new(200, "fetched", Some(Self::page(rows, page, size))))
    }

    async fn get_company_by_id(&self, id: i64) -> ApiResult<ApiResponse<Value>> {
        self.check_failure()?;
        match self.companies.lock().get(&id) {
            Some(company) => Ok(ApiResponse::new(200, "fetched", Some(company.clone()))),
            None => Err(ApiError::NotFound(format!("company {id}"))),
        }
    }

    async fn update_company(&self, id: i64, patch: &Map<String, Value>) -> ApiResult<ApiResponse<Value>> {
        self.check_failure()?;
        Ok(self.record_patch(id, patch))
    }
}

#[async_trait]
impl CustomerService for FakeBackend {
    async fn list_customers(
        &self,
        company_id: i64,
        page: usize,
        size: usize,
    ) -> ApiResult<ApiResponse<PaginatedResponse<Value>>> {
        self.check_failure()?;
        let rows = self
            .customers
            .lock()
            .values()
            .filter(|customer| customer.get("companyId").and_then(Value::as_i64) == Some(company_id))
            .cloned()
            .collect();
        Ok(ApiResponse::new(200, "fetched", Some(Self::page(rows, page, size))))
    }

    async fn get_customer_by_id(&self, id: i64) -> ApiResult<ApiResponse<Value>> {
        self.check_failure()?;
        match self.customers.lock().get(&id) {
            Some(customer) => Ok(ApiResponse::new(200, "fetched", Some(customer.clone()))),
            None => Err(ApiError::NotFound(format!("customer {id}"))),
        }
    }

    async fn update_customer(&self, id: i64, patch: &Map<String, Value>) -> ApiResult<ApiResponse<Value>> {
        self.check_failure()?;
        Ok(self.record_patch(id, patch))
    }
}

/// Notifier keeping everything it was asked to show
#[derive(Default)]
pub struct RecordingNotifier {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications
            .lock()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().push(notification);
    }
}

pub struct TestContext {
    pub storage: Arc<InMemoryStorage>,
    pub backend: Arc<FakeBackend>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    pub fn company_session(&self) -> EditSession<CompanyEdit> {
        EditSession::new(
            self.storage.clone(),
            Arc::new(CompanyGateway::new(self.backend.clone())),
            self.notifier.clone(),
        )
    }

    pub fn customer_session(&self) -> EditSession<CustomerEdit> {
        EditSession::new(
            self.storage.clone(),
            Arc::new(CustomerGateway::new(self.backend.clone())),
            self.notifier.clone(),
        )
    }
}

/// Fresh context with company 1 and its customers 4 and 5 on the backend
pub async fn setup_test_context() -> Result<TestContext, Box<dyn std::error::Error + Send + Sync>> {
    let backend = FakeBackend::default();
    backend.companies.lock().insert(1, create_test_company_json(1));
    backend.customers.lock().insert(4, create_test_customer_json(4));
    let mut second = create_test_customer_json(5);
    second["customerName"] = Value::from("Initech");
    backend.customers.lock().insert(5, second);

    Ok(TestContext {
        storage: Arc::new(InMemoryStorage::new()),
        backend: Arc::new(backend),
        notifier: Arc::new(RecordingNotifier::default()),
    })
}
