//! Pagination and list-query helpers shared by the service and HTTP layers.

use serde::Deserialize;
use uuid::Uuid;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u32,
    /// items per page
    pub per_page: u32,
}

impl Pagination {
    /// Clamp to sane defaults and convert to a zero-based `(page_index, per_page)`.
    pub fn normalize(self) -> (u64, u64) {
        let page = if self.page == 0 { 1 } else { self.page };
        let per_page = self.per_page.clamp(1, 100);
        ((page - 1) as u64, per_page as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: 20 } }
}

/// Query string accepted by every `GET /v1/<resource>` listing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ListQuery {
    pub organization_id: Option<Uuid>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListQuery {
    pub fn for_organization(organization_id: Uuid) -> Self {
        Self { organization_id: Some(organization_id), ..Self::default() }
    }

    /// `None` means "return everything"; either field present turns paging on.
    pub fn pagination(&self) -> Option<Pagination> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        let d = Pagination::default();
        Some(Pagination {
            page: self.page.unwrap_or(d.page),
            per_page: self.per_page.unwrap_or(d.per_page),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_clamps_zero_to_defaults() {
        let (idx, per) = Pagination { page: 0, per_page: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(per, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, per) = Pagination { page: 5, per_page: 1000 }.normalize();
        assert_eq!(idx, 4);
        assert_eq!(per, 100);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.per_page, 20);
    }

    #[test]
    fn list_query_without_paging_fields_is_unpaginated() {
        assert!(ListQuery::default().pagination().is_none());
        let q = ListQuery { page: Some(3), ..ListQuery::default() };
        assert_eq!(q.pagination(), Some(Pagination { page: 3, per_page: 20 }));
        let q = ListQuery { per_page: Some(5), ..ListQuery::default() };
        assert_eq!(q.pagination(), Some(Pagination { page: 1, per_page: 5 }));
    }
}
