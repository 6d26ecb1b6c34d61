//! Pagination and sorting value objects for list queries.
//!
//! # Design
//! Callers hand the store an explicit [`PageRequest`] instead of ambient
//! query-string state. `size` is clamped so a store is never asked for an
//! unbounded page, and the default sort is by id ascending so paging stays
//! deterministic when the caller does not pick an order.

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on the page size a single `find_all` call may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Field a list query can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Text,
    Done,
}

impl SortField {
    /// Parse the wire name (`id`, `text`, `done`).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(SortField::Id),
            "text" => Some(SortField::Text),
            "done" => Some(SortField::Done),
            _ => None,
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Sort order for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parse the `"<field>,<direction>"` query value.
    ///
    /// A bare field name sorts ascending. Returns `None` for unknown fields
    /// or directions.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(2, ',');
        let field = SortField::parse(parts.next()?.trim())?;
        let direction = match parts.next() {
            Some(d) => SortDirection::parse(d.trim())?,
            None => SortDirection::Asc,
        };
        Some(Self { field, direction })
    }
}

impl Default for Sort {
    fn default() -> Self {
        Self::new(SortField::Id, SortDirection::Asc)
    }
}

/// Page, size and sort configuration for one `find_all` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Sort,
}

impl PageRequest {
    /// Build a request, clamping `size` into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, size: u32, sort: Sort) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    /// Number of records that precede the first item of this page.
    pub fn offset(&self) -> usize {
        self.page as usize * self.size as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE, Sort::default())
    }
}

/// One page of results plus the total collection count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}
