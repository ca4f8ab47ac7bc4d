/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LIMIT, DEFAULT_SINCE, DEFAULT_SKIP};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering of listing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl SortOrder {
    /// Wire representation used in the `sort` query parameter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pagination parameters for the channel clips listing
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipsRequest {
    /// Only clips created after this epoch timestamp
    pub since: f64,
    /// Number of clips to return (documented maximum: 150, not enforced)
    pub limit: u32,
    /// Number of clips to skip over
    pub skip: u32,
    /// Sort order
    pub sort: SortOrder,
}

impl Default for ClipsRequest {
    fn default() -> Self {
        Self {
            since: DEFAULT_SINCE,
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
            sort: SortOrder::default(),
        }
    }
}

impl ClipsRequest {
    /// Sets the `since` timestamp
    #[must_use]
    pub fn with_since(mut self, since: f64) -> Self {
        self.since = since;
        self
    }

    /// Sets the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the number of clips to skip
    #[must_use]
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the sort order
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Query pairs in wire order: since, limit, skip, sort
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("since", self.since.to_string()),
            ("limit", self.limit.to_string()),
            ("skip", self.skip.to_string()),
            ("sort", self.sort.to_string()),
        ]
    }
}

/// Pagination parameters for the channel vods listing
#[derive(DebugPretty, DisplaySimple, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VodsRequest {
    /// Number of vods to return (documented maximum: 150, not enforced)
    pub limit: u32,
    /// Number of vods to skip over
    pub skip: u32,
    /// Sort order
    pub sort: SortOrder,
}

impl Default for VodsRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            skip: DEFAULT_SKIP,
            sort: SortOrder::default(),
        }
    }
}

impl VodsRequest {
    /// Sets the page size
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the number of vods to skip
    #[must_use]
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Sets the sort order
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Query pairs in wire order: limit, skip, sort
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("limit", self.limit.to_string()),
            ("skip", self.skip.to_string()),
            ("sort", self.sort.to_string()),
        ]
    }
}
