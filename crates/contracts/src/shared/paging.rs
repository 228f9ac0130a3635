//! List queries and paged responses.

use crate::shared::config::{DEFAULT_PAGE_SIZE, LOOKUP_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Query string of list endpoints (`?page=1&page_size=20&search=...`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
        }
    }
}

impl ListQuery {
    /// Build from the UI's 0-based page index and raw search box text.
    pub fn from_ui(page_index: usize, page_size: usize, search: &str) -> Self {
        let search = search.trim();
        Self {
            page: page_index + 1,
            page_size: page_size.max(1),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// First `LOOKUP_PAGE_SIZE` records, for select boxes
    pub fn lookup() -> Self {
        Self {
            page: 1,
            page_size: LOOKUP_PAGE_SIZE,
            search: None,
        }
    }
}

/// One page of a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: usize,
}

/// List endpoints answer either with a page object or with a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Paged(PagedResponse<T>),
    Plain(Vec<T>),
}

impl<T> ListResponse<T> {
    pub fn into_page(self) -> PagedResponse<T> {
        match self {
            Self::Paged(mut page) => {
                if page.total < page.items.len() {
                    page.total = page.items.len();
                }
                page
            }
            Self::Plain(items) => PagedResponse {
                total: items.len(),
                items,
            },
        }
    }
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ui_query_is_one_based_and_trims_search() {
        let query = ListQuery::from_ui(0, 20, "  apple ");
        assert_eq!(query.page, 1);
        assert_eq!(query.search.as_deref(), Some("apple"));
        assert_eq!(ListQuery::from_ui(2, 0, "   ").search, None);
    }

    #[test]
    fn accepts_paged_and_plain_bodies() {
        let paged: ListResponse<i64> =
            serde_json::from_str(r#"{"items":[1,2],"total":10}"#).unwrap();
        assert_eq!(paged.into_page().total, 10);

        let plain: ListResponse<i64> = serde_json::from_str("[1,2,3]").unwrap();
        let page = plain.into_page();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(5, 0), 0);
    }
}
