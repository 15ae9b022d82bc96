//! View state: the grouping/ordering pair and its query-string mirror.
//!
//! The board's view is fully described by two selectors. They are parsed
//! from a query string (`grouping=…&ordering=…`), and every change made
//! through [`ViewStateStore`] is written straight back so the query string
//! always carries both parameters. Where the query string lives is behind
//! [`SelectorStore`]; [`QueryHistory`] is the in-memory navigation history
//! used by the CLI and the tests.

use crate::error::ErrorCode;
use crate::model::{Grouping, Ordering};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query parameter carrying the grouping selector.
pub const GROUPING_PARAM: &str = "grouping";
/// Query parameter carrying the ordering selector.
pub const ORDERING_PARAM: &str = "ordering";

/// The complete, always-defined view selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewSelectors {
    pub grouping: Grouping,
    pub ordering: Ordering,
}

impl ViewSelectors {
    #[must_use]
    pub const fn new(grouping: Grouping, ordering: Ordering) -> Self {
        Self { grouping, ordering }
    }

    /// Parse selectors from a query string.
    ///
    /// A leading `?` is ignored. Missing, empty or unrecognized values fall
    /// back to the defaults without error. When a parameter repeats, the
    /// first occurrence wins.
    #[must_use]
    pub fn parse_from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut grouping_raw = None;
        let mut ordering_raw = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                GROUPING_PARAM if grouping_raw.is_none() => grouping_raw = Some(value),
                ORDERING_PARAM if ordering_raw.is_none() => ordering_raw = Some(value),
                _ => {}
            }
        }

        let grouping = grouping_raw.map_or_else(Grouping::default, |raw| {
            raw.parse().unwrap_or_else(|err| {
                tracing::debug!(
                    code = %ErrorCode::InvalidSelector,
                    %err,
                    "ignoring grouping from query"
                );
                Grouping::default()
            })
        });
        let ordering = ordering_raw.map_or_else(Ordering::default, |raw| {
            raw.parse().unwrap_or_else(|err| {
                tracing::debug!(
                    code = %ErrorCode::InvalidSelector,
                    %err,
                    "ignoring ordering from query"
                );
                Ordering::default()
            })
        });

        Self { grouping, ordering }
    }

    /// Serialize both selectors, always in `grouping`, `ordering` order.
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(GROUPING_PARAM, self.grouping.as_str())
            .append_pair(ORDERING_PARAM, self.ordering.as_str())
            .finish()
    }
}

/// Where the query string lives (a browser URL, a history stack, a file…).
pub trait SelectorStore {
    /// Current selectors, with defaults applied.
    fn read_selectors(&self) -> ViewSelectors;

    /// Persist both selectors. Each call is one navigation.
    fn write_selectors(&mut self, selectors: &ViewSelectors);
}

/// In-memory navigation history of query strings.
///
/// Writes push a new entry and drop anything ahead of the cursor, so
/// `back`/`forward` behave like a browser history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl QueryHistory {
    /// Start a history at `initial` (may be empty).
    #[must_use]
    pub fn new(initial: impl Into<String>) -> Self {
        let initial: String = initial.into();
        let initial = initial.strip_prefix('?').unwrap_or(&initial).to_string();
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    #[must_use]
    pub fn current_query(&self) -> &str {
        self.entries.get(self.cursor).map_or("", String::as_str)
    }

    /// Number of entries in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Step back one entry. Returns `false` at the start of the history.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the history.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    fn push(&mut self, query: String) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(query);
        self.cursor = self.entries.len() - 1;
    }
}

impl Default for QueryHistory {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl SelectorStore for QueryHistory {
    fn read_selectors(&self) -> ViewSelectors {
        ViewSelectors::parse_from_query(self.current_query())
    }

    fn write_selectors(&mut self, selectors: &ViewSelectors) {
        let query = selectors.to_query();
        tracing::debug!(%query, "pushing view state");
        self.push(query);
    }
}

/// Owns the current selectors and keeps them mirrored into a [`SelectorStore`].
#[derive(Debug, Clone)]
pub struct ViewStateStore<S: SelectorStore> {
    selectors: ViewSelectors,
    store: S,
}

impl<S: SelectorStore> ViewStateStore<S> {
    /// Initialize from whatever the store currently holds.
    pub fn new(store: S) -> Self {
        let selectors = store.read_selectors();
        Self { selectors, store }
    }

    #[must_use]
    pub const fn selectors(&self) -> ViewSelectors {
        self.selectors
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// The query string for the current selectors.
    #[must_use]
    pub fn query(&self) -> String {
        self.selectors.to_query()
    }

    /// Change the grouping and write both selectors to the store.
    pub fn set_grouping(&mut self, grouping: Grouping) {
        self.selectors.grouping = grouping;
        self.store.write_selectors(&self.selectors);
    }

    /// Change the ordering and write both selectors to the store.
    pub fn set_ordering(&mut self, ordering: Ordering) {
        self.selectors.ordering = ordering;
        self.store.write_selectors(&self.selectors);
    }

    /// Re-read the store after it was navigated externally.
    pub fn sync_from_store(&mut self) -> ViewSelectors {
        self.selectors = self.store.read_selectors();
        self.selectors
    }
}
