//! List query parameters and result pages

use atrium_ingress::{DecodedList, PageInfo};
use atrium_model::RecordId;

/// Parameters accepted by every list endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Page number, 1-based
    pub page: u32,
    /// Records per page
    pub limit: u32,
    /// Free-text search forwarded to the backend
    pub search: Option<String>,
    /// Site (branch) scope
    pub site: Option<RecordId>,
    /// Society scope
    pub society: Option<RecordId>,
    /// Role filter, as the backend spells it
    pub role: Option<String>,
}

impl ListQuery {
    /// First page with the given limit
    #[inline]
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            search: None,
            site: None,
            society: None,
            role: None,
        }
    }

    /// Select a page
    #[inline]
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Forward a search term
    #[inline]
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Scope to a site
    #[inline]
    #[must_use]
    pub fn with_site(mut self, site: RecordId) -> Self {
        self.site = Some(site);
        self
    }

    /// Scope to a society
    #[inline]
    #[must_use]
    pub fn with_society(mut self, society: RecordId) -> Self {
        self.society = Some(society);
        self
    }

    /// Filter by role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Query-string parameters for the request
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(site) = &self.site {
            params.push(("site", site.to_string()));
        }
        if let Some(society) = &self.society {
            params.push(("society", society.to_string()));
        }
        if let Some(role) = &self.role {
            params.push(("role", role.clone()));
        }
        params
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(20)
    }
}

/// One page of decoded records
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Records in backend order
    pub items: Vec<T>,
    /// Pagination block, when the backend reported one
    pub info: Option<PageInfo>,
}

impl<T> From<DecodedList<T>> for Page<T> {
    fn from(decoded: DecodedList<T>) -> Self {
        Self {
            items: decoded.items,
            info: decoded.page_info,
        }
    }
}
