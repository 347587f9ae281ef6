/// Pagination request parameters for offset-based pagination
///
/// # Example
/// ```
/// use receivables_core_db::repository::pagination::PageRequest;
///
/// let page_request = PageRequest::new(10, 0); // First page with 10 items
/// let next_page = PageRequest::new(10, 10); // Second page
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `limit` - Maximum number of items to return
    /// * `offset` - Number of items to skip
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// # Arguments
    /// * `page_size` - Number of items per page
    /// * `page_number` - Page number (1-based, will be converted to 0-based offset)
    ///
    /// # Example
    /// ```
    /// use receivables_core_db::repository::pagination::PageRequest;
    ///
    /// let page_1 = PageRequest::for_page(6, 1); // offset: 0
    /// let page_2 = PageRequest::for_page(6, 2); // offset: 6
    /// assert_eq!(page_2.offset, 6);
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1); // Ensure page_number is at least 1
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// Page of items cut from an already-fetched list
///
/// # Example
/// ```
/// use receivables_core_db::repository::pagination::{Page, PageRequest};
///
/// let invoices: Vec<u32> = (1..=23).collect();
/// let page = Page::slice(&invoices, PageRequest::for_page(10, 3));
///
/// assert_eq!(page.items, vec![21, 22, 23]);
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.is_last_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// The items in this page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// Maximum number of items per page
    pub limit: usize,
    /// Number of items skipped before this page
    pub offset: usize,
}

impl<T> Page<T> {
    /// Create a new page
    ///
    /// # Arguments
    /// * `items` - The items in this page
    /// * `total` - Total number of items across all pages
    /// * `limit` - Maximum number of items per page
    /// * `offset` - Number of items skipped before this page
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Get the current page number (1-based)
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }

    /// Links for the pager under this page
    pub fn links(&self) -> Vec<PageLink> {
        page_links(self.page_number(), self.total_pages())
    }
}

impl<T: Clone> Page<T> {
    /// Cut one page out of a fetched list. An offset past the end yields an empty page.
    pub fn slice(all: &[T], request: PageRequest) -> Self {
        let start = request.offset.min(all.len());
        let end = start.saturating_add(request.limit).min(all.len());
        Self {
            items: all[start..end].to_vec(),
            total: all.len(),
            limit: request.limit,
            offset: request.offset,
        }
    }
}

/// Entry in a pager: a page number (1-based) or an elided run of pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Number(usize),
    Gap,
}

/// Page numbers shown by the pager, e.g. `1 … 3 4 5 … 8` for page 4 of 8
///
/// Up to seven pages are all listed. Beyond that the first and last page are
/// always shown, with a three-page window around `current`.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    use PageLink::{Gap, Number};

    if total <= 7 {
        return (1..=total).map(Number).collect();
    }

    let mut links = vec![Number(1)];
    if current <= 3 {
        links.extend([Number(2), Number(3), Number(4), Gap, Number(total)]);
    } else if current >= total - 2 {
        links.extend([Gap, Number(total - 3), Number(total - 2), Number(total - 1), Number(total)]);
    } else {
        links.extend([
            Gap,
            Number(current - 1),
            Number(current),
            Number(current + 1),
            Gap,
            Number(total),
        ]);
    }
    links
}

/// Minimum search term length before a filter applies
pub const MIN_SEARCH_TERM_LEN: usize = 3;

/// Case-insensitive substring filter over fetched rows
///
/// Terms shorter than [`MIN_SEARCH_TERM_LEN`] (after trimming) return every row.
pub fn filter_by_term<'a, T, F>(items: &'a [T], term: &str, field: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let term = term.trim().to_lowercase();
    if term.chars().count() < MIN_SEARCH_TERM_LEN {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| field(*item).to_lowercase().contains(&term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Gap, Number};

    #[test]
    fn test_page_request_for_page_clamps_to_first() {
        assert_eq!(PageRequest::for_page(10, 0), PageRequest::new(10, 0));
        assert_eq!(PageRequest::for_page(10, 4).page_number(), 4);
        assert_eq!(PageRequest::new(0, 30).page_number(), 1);
    }

    #[test]
    fn test_slice_past_end_is_empty() {
        let rows = vec!["a", "b", "c"];
        let page = Page::slice(&rows, PageRequest::new(2, 10));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
        assert!(!page.has_more());

        let first = Page::slice(&rows, PageRequest::new(2, 0));
        assert_eq!(first.items, vec!["a", "b"]);
        assert!(first.has_more());
        assert!(first.is_first_page());
    }

    #[test]
    fn test_page_links_windows() {
        assert_eq!(page_links(1, 3), vec![Number(1), Number(2), Number(3)]);
        assert!(page_links(1, 0).is_empty());
        assert_eq!(
            page_links(2, 10),
            vec![Number(1), Number(2), Number(3), Number(4), Gap, Number(10)]
        );
        assert_eq!(
            page_links(4, 8),
            vec![Number(1), Gap, Number(3), Number(4), Number(5), Gap, Number(8)]
        );
        assert_eq!(
            page_links(7, 8),
            vec![Number(1), Gap, Number(5), Number(6), Number(7), Number(8)]
        );
    }

    #[test]
    fn test_filter_by_term_requires_three_chars() {
        let names = vec!["Acme Corp", "Globex", "acme labs"];
        assert_eq!(filter_by_term(&names, "ac", |n| *n).len(), 3);
        assert_eq!(filter_by_term(&names, " ACM ", |n| *n), vec![&"Acme Corp", &"acme labs"]);
        assert!(filter_by_term(&names, "initech", |n| *n).is_empty());
    }
}
