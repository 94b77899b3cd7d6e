//! List query builder: filters, page windows, and paged results.
//!
//! A listing endpoint and its count endpoint must agree on what matches,
//! otherwise the reported total does not line up with the pages a client
//! walks through. Both build their [`FilterSpec`] with [`build_filter`] and
//! hand the same value to the store.
//!
//! Paging is 1-based at the HTTP boundary (`?page=1` is the first page) and
//! converted to a zero-based skip exactly once, in [`PageWindow::from_params`].

use serde_json::Value;

use crate::document::Document;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Title-like field matched by free-text search.
pub const TITLE_FIELD: &str = "blog_title";

/// Field matched exactly by the category filter.
pub const CATEGORY_FIELD: &str = "category";

/// Longest accepted search text, in characters.
pub const MAX_SEARCH_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Filter spec
// ---------------------------------------------------------------------------

/// A single predicate over one top-level document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The field is a string containing `needle`, compared case-insensitively.
    /// `needle` is literal text, never a pattern.
    ///
    /// Case folding here is Unicode `to_lowercase`. The PostgreSQL store uses
    /// `ILIKE`, whose folding of non-ASCII letters follows the database
    /// `LC_CTYPE`; the two agree on ASCII and on Unicode-aware locales, but a
    /// `C`-locale database folds only ASCII.
    Contains { field: String, needle: String },
    /// The field is present and equal to `value`.
    Equals { field: String, value: Value },
}

impl Condition {
    fn matches(&self, doc: &Document) -> bool {
        match self {
            Condition::Contains { field, needle } => match doc.get(field) {
                Some(Value::String(s)) => s.to_lowercase().contains(&needle.to_lowercase()),
                _ => false,
            },
            Condition::Equals { field, value } => doc.get(field) == Some(value),
        }
    }
}

/// Conjunction of [`Condition`]s. The empty spec matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    conditions: Vec<Condition>,
}

impl FilterSpec {
    /// Matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Matches documents whose `field` equals `value`.
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::all().and_eq(field, value)
    }

    pub fn and_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.conditions.push(Condition::Equals {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn and_contains(mut self, field: &str, needle: &str) -> Self {
        self.conditions.push(Condition::Contains {
            field: field.to_string(),
            needle: needle.to_string(),
        });
        self
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the spec against a document.
    pub fn matches(&self, doc: &Document) -> bool {
        self.conditions.iter().all(|c| c.matches(doc))
    }
}

/// Build the blog listing filter from raw `search` / `category` parameters.
///
/// - A non-empty `search` restricts to titles containing it (case-insensitive,
///   literal). Empty or absent search adds no title predicate, so records
///   without a title still match.
/// - A non-empty `category` restricts to an exact category match.
///
/// Fails with [`CoreError::Validation`] if `search` exceeds [`MAX_SEARCH_LEN`].
pub fn build_filter(search: Option<&str>, category: Option<&str>) -> Result<FilterSpec, CoreError> {
    let mut spec = FilterSpec::all();

    if let Some(search) = search.filter(|s| !s.is_empty()) {
        if search.chars().count() > MAX_SEARCH_LEN {
            return Err(CoreError::Validation(format!(
                "search text must be at most {MAX_SEARCH_LEN} characters"
            )));
        }
        spec = spec.and_contains(TITLE_FIELD, search);
    }

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        spec = spec.and_eq(CATEGORY_FIELD, category);
    }

    Ok(spec)
}

// ---------------------------------------------------------------------------
// Page window
// ---------------------------------------------------------------------------

/// How many matching records to skip and how many to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    /// `None` returns every remaining record.
    pub limit: Option<u64>,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

impl PageWindow {
    /// Every matching record.
    pub const UNBOUNDED: Self = Self {
        skip: 0,
        limit: None,
    };

    /// Convert raw 1-based `page` and `size` query values into a window.
    ///
    /// | size            | page            | skip                | limit     |
    /// |-----------------|-----------------|---------------------|-----------|
    /// | integer >= 1    | integer >= 1    | `(page - 1) * size` | `size`    |
    /// | integer >= 1    | integer < 1     | `0`                 | `size`    |
    /// | integer >= 1    | absent / junk   | `0`                 | `size`    |
    /// | absent / junk / < 1 | anything    | `0`                 | unbounded |
    pub fn from_params(page: Option<&str>, size: Option<&str>) -> Self {
        let Some(size) = parse_int(size).filter(|s| *s >= 1) else {
            return Self::UNBOUNDED;
        };
        let size = size as u64;

        let skip = match parse_int(page) {
            Some(page) if page >= 1 => (page as u64 - 1).saturating_mul(size),
            _ => 0,
        };

        Self {
            skip,
            limit: Some(size),
        }
    }

    /// Apply the window to an already-filtered sequence.
    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skipped = items
            .into_iter()
            .skip(usize::try_from(self.skip).unwrap_or(usize::MAX));
        match self.limit {
            Some(limit) => skipped
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .collect(),
            None => skipped.collect(),
        }
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

// ---------------------------------------------------------------------------
// List query / page
// ---------------------------------------------------------------------------

/// A request-scoped listing: what matches and which slice of it to return.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub filter: FilterSpec,
    pub window: PageWindow,
}

impl ListQuery {
    /// Build a blog listing query from raw query-string values.
    pub fn from_params(
        search: Option<&str>,
        category: Option<&str>,
        page: Option<&str>,
        size: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            filter: build_filter(search, category)?,
            window: PageWindow::from_params(page, size),
        })
    }
}

/// One page of records together with the window that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub skip: u64,
    pub limit: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(records: Vec<T>, window: PageWindow) -> Self {
        Self {
            records,
            skip: window.skip,
            limit: window.limit,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
