//! Pagination over filtered collections.

use serde::{Deserialize, Serialize};

/// One page of results plus the pre-pagination match count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The records in this page.
    pub result: Vec<T>,

    /// How many records matched the filter before the window was applied.
    pub count: usize,
}

/// Apply a skip/take window to an ordered sequence.
///
/// Pure and total: a `skip` past the end yields an empty page, and a short
/// tail yields fewer than `take` items.
pub fn paginate<T>(items: Vec<T>, skip: usize, take: usize) -> Vec<T> {
    items.into_iter().skip(skip).take(take).collect()
}
