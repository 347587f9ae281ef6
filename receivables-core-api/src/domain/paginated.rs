use serde::{Deserialize, Serialize};

/// Server-side page as returned by list endpoints (zero-based `number`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub number: usize,
    #[serde(default)]
    pub size: usize,
    #[serde(default)]
    pub total_elements: usize,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl<T> PaginatedResponse<T> {
    /// Whether a page with the given zero-based index can be requested
    pub fn contains_page(&self, page: usize) -> bool {
        page < self.total_pages
    }

    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            content: self.content.into_iter().map(f).collect(),
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            first: self.first,
            last: self.last,
        }
    }

    /// Like [`map`](Self::map), stopping at the first row that fails to convert
    pub fn try_map<U, E, F>(self, f: F) -> Result<PaginatedResponse<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(PaginatedResponse {
            content: self.content.into_iter().map(f).collect::<Result<Vec<U>, E>>()?,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            first: self.first,
            last: self.last,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_spring_page() {
        let page: PaginatedResponse<u32> = serde_json::from_value(json!({
            "content": [1, 2, 3],
            "totalPages": 4,
            "number": 1,
            "size": 3,
            "totalElements": 11,
            "first": false,
            "last": false
        }))
        .unwrap();

        assert_eq!(page.content, vec![1, 2, 3]);
        assert!(page.contains_page(3));
        assert!(!page.contains_page(4));

        let doubled = page.map(|n| n * 2);
        assert_eq!(doubled.content, vec![2, 4, 6]);
        assert_eq!(doubled.total_elements, 11);
    }
}
