//! List-query parsing and pagination response headers.
//!
//! # Design
//! Query parameters are converted into the core `PageRequest` value object
//! up front; handlers never look at raw query state. The response carries
//! the collection size in `X-Total-Count` and RFC 5988 `Link` relations:
//! `next`/`prev` only when such a page exists, `last`/`first` always.

use axum::http::header::{HeaderMap, HeaderName, HeaderValue, LINK};
use serde::Deserialize;

use todo_core::{ApiError, PageRequest, Sort, DEFAULT_PAGE_SIZE};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Raw `GET /todos` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

impl ListParams {
    /// Convert into a [`PageRequest`], rejecting malformed `sort` values.
    pub fn into_page_request(self) -> Result<PageRequest, ApiError> {
        let sort = match self.sort.as_deref() {
            Some(raw) => Sort::parse(raw).ok_or_else(|| {
                ApiError::validation(
                    "sort",
                    format!("unknown sort `{raw}`, expected <id|text|done>,<asc|desc>"),
                )
            })?,
            None => Sort::default(),
        };
        Ok(PageRequest::new(
            self.page.unwrap_or(0),
            self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            sort,
        ))
    }
}

/// Build the `X-Total-Count` and `Link` headers for one result page.
pub fn pagination_headers(base: &str, request: &PageRequest, total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(TOTAL_COUNT_HEADER),
        header_value(total.to_string()),
    );

    let total_pages = total.div_ceil(u64::from(request.size)) as u32;
    let last = total_pages.saturating_sub(1);

    let mut links = Vec::new();
    if request.page + 1 < total_pages {
        links.push(link(base, request.page + 1, request.size, "next"));
    }
    if request.page > 0 {
        links.push(link(base, request.page - 1, request.size, "prev"));
    }
    links.push(link(base, last, request.size, "last"));
    links.push(link(base, 0, request.size, "first"));
    headers.insert(LINK, header_value(links.join(",")));

    headers
}

fn link(base: &str, page: u32, size: u32, rel: &str) -> String {
    format!("<{base}?page={page}&size={size}>; rel=\"{rel}\"")
}

/// The inputs are numbers and fixed ASCII, so this cannot fail in practice;
/// fall back to an empty value rather than panic.
fn header_value(value: String) -> HeaderValue {
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static(""))
}
