use receivables_core_api::domain::paginated::PaginatedResponse;
use receivables_core_api::service::company_service::CompanyService;
use receivables_core_api::service::customer_service::CustomerService;
use receivables_core_db::models::company::company::CompanyModel;
use receivables_core_db::models::customer::customer::CustomerModel;
use receivables_core_db::repository::pagination::{filter_by_term, Page, PageRequest};
use std::sync::Arc;

use crate::error::SessionResult;

/// Companies offered in company pickers
pub const COMPANY_PICKER_SIZE: usize = 100;
pub const CUSTOMER_PAGE_SIZE: usize = 6;

/// Typed read access to the company and customer lists
pub struct Directory {
    companies: Arc<dyn CompanyService>,
    customers: Arc<dyn CustomerService>,
}

impl Directory {
    pub fn new(companies: Arc<dyn CompanyService>, customers: Arc<dyn CustomerService>) -> Self {
        Self { companies, customers }
    }

    /// First picker-sized page of companies
    pub async fn companies(&self) -> SessionResult<Vec<CompanyModel>> {
        let response = self.companies.list_companies(0, COMPANY_PICKER_SIZE).await?;
        let Some(page) = response.into_data() else {
            return Ok(Vec::new());
        };
        Ok(page.try_map(serde_json::from_value)?.content)
    }

    /// One server-side page of a company's customers
    pub async fn customer_page(
        &self,
        company_id: i64,
        page: usize,
    ) -> SessionResult<PaginatedResponse<CustomerModel>> {
        let response = self
            .customers
            .list_customers(company_id, page, CUSTOMER_PAGE_SIZE)
            .await?;
        match response.into_data() {
            Some(rows) => Ok(rows.try_map(serde_json::from_value)?),
            None => Ok(PaginatedResponse {
                content: Vec::new(),
                total_pages: 0,
                number: page,
                size: CUSTOMER_PAGE_SIZE,
                total_elements: 0,
                first: true,
                last: true,
            }),
        }
    }
}

/// Client-side search over fetched companies by legal name
pub fn search_companies(companies: &[CompanyModel], term: &str, request: PageRequest) -> Page<CompanyModel> {
    let matches: Vec<CompanyModel> = filter_by_term(companies, term, |company| company.legal_name.as_str())
        .into_iter()
        .cloned()
        .collect();
    Page::slice(&matches, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::test_utils::create_test_company_json;
    use crate::test_helper::setup_test_context;
    use receivables_core_db::repository::pagination::PageLink;
    use std::error::Error;

    fn company(id: i64, legal_name: &str) -> CompanyModel {
        let mut json = create_test_company_json(id);
        json["legalName"] = legal_name.into();
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_companies_and_customers_are_typed() -> Result<(), Box<dyn Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let directory = Directory::new(ctx.backend.clone(), ctx.backend.clone());

        let companies = directory.companies().await?;
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].legal_name, "Acme Holdings");

        let customers = directory.customer_page(1, 0).await?;
        assert_eq!(customers.total_elements, 2);
        assert_eq!(customers.content[1].customer_name, "Initech");
        assert!(customers.last);

        assert!(directory.customer_page(99, 0).await?.content.is_empty());
        Ok(())
    }

    #[test]
    fn test_search_by_legal_name() {
        let companies = vec![
            company(1, "Acme Holdings"),
            company(2, "Globex Corporation"),
            company(3, "ACME Software GmbH"),
        ];

        let page = search_companies(&companies, "acme", PageRequest::new(10, 0));
        assert_eq!(page.items.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);

        let short_term = search_companies(&companies, "ac", PageRequest::new(2, 0));
        assert_eq!(short_term.total, 3);
        assert_eq!(short_term.items.len(), 2);
        assert_eq!(short_term.links(), vec![PageLink::Number(1), PageLink::Number(2)]);
    }
}
