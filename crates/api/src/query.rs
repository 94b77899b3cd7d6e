//! Query parameter types for the blog listing endpoints.
//!
//! Every field is kept as a raw string: paging values that fail to parse
//! fall back to an unpaginated listing instead of rejecting the request.

use blogsphere_core::error::CoreError;
use blogsphere_core::listing::{build_filter, FilterSpec, ListQuery};
use serde::Deserialize;

/// `GET /all-blogs?size=&page=&filter=&search=`
///
/// `page` is 1-based; `filter` is the exact category.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub size: Option<String>,
    pub page: Option<String>,
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn to_list_query(&self) -> Result<ListQuery, CoreError> {
        ListQuery::from_params(
            self.search.as_deref(),
            self.filter.as_deref(),
            self.page.as_deref(),
            self.size.as_deref(),
        )
    }
}

/// `GET /blogs-count?filter=&search=`, the same matching inputs as [`ListParams`].
#[derive(Debug, Default, Deserialize)]
pub struct CountParams {
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl CountParams {
    pub fn to_filter(&self) -> Result<FilterSpec, CoreError> {
        build_filter(self.search.as_deref(), self.filter.as_deref())
    }
}
