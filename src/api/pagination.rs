// src/api/pagination.rs
//! Cursor pagination shared by every list endpoint.

use crate::error::{NotionError, Result};
use crate::model::ListResponse;

/// Where a pagination run stands.
enum PaginationState {
    /// Another page must be requested, from this cursor (none for the first).
    Pending(Option<String>),
    Exhausted,
}

/// Drains a list endpoint, concatenating each page's results in arrival order.
///
/// `fetch_page` receives the cursor for the next request (`None` for the
/// first). The first failure aborts the run and the items gathered so far are
/// dropped.
pub fn fetch_all_pages<T, F>(mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(Option<&str>) -> Result<ListResponse<T>>,
{
    let mut items = Vec::new();
    let mut pages_fetched = 0usize;
    let mut state = PaginationState::Pending(None);

    while let PaginationState::Pending(cursor) = state {
        let ListResponse {
            results,
            next_cursor,
            has_more,
            ..
        } = fetch_page(cursor.as_deref())?;
        pages_fetched += 1;
        log::debug!(
            "Fetched page {} with {} results (has_more: {})",
            pages_fetched,
            results.len(),
            has_more
        );
        items.extend(results);

        state = match (has_more, next_cursor) {
            (false, _) => PaginationState::Exhausted,
            (true, Some(next)) if !next.is_empty() => PaginationState::Pending(Some(next)),
            (true, _) => {
                return Err(NotionError::Decode {
                    message: format!(
                        "page {} reports has_more without a next_cursor",
                        pages_fetched
                    ),
                    body: String::new(),
                })
            }
        };
    }

    log::info!(
        "Pagination finished: {} items across {} pages",
        items.len(),
        pages_fetched
    );
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(results: Vec<u32>, next_cursor: Option<&str>, has_more: bool) -> ListResponse<u32> {
        ListResponse {
            object: None,
            results,
            next_cursor: next_cursor.map(str::to_string),
            has_more,
        }
    }

    #[test]
    fn concatenates_pages_in_order() {
        let mut cursors = Vec::new();
        let items = fetch_all_pages(|cursor| {
            cursors.push(cursor.map(str::to_string));
            Ok(match cursor {
                None => page(vec![1, 2], Some("c1"), true),
                Some("c1") => page(vec![3], Some("c2"), true),
                _ => page(vec![4, 5], None, false),
            })
        })
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            cursors,
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
    }

    #[test]
    fn stops_when_has_more_is_false_even_with_cursor() {
        let mut calls = 0;
        let items = fetch_all_pages(|_| {
            calls += 1;
            Ok(page(vec![7], Some("ignored"), false))
        })
        .unwrap();
        assert_eq!(items, vec![7]);
        assert_eq!(calls, 1);
    }

    #[test]
    fn mid_run_failure_discards_partial_results() {
        let result: Result<Vec<u32>> = fetch_all_pages(|cursor| match cursor {
            None => Ok(page(vec![1], Some("next"), true)),
            Some(_) => Err(NotionError::Remote {
                status: 429,
                code: "rate_limited".to_string(),
                message: "slow down".to_string(),
            }),
        });
        let err = result.unwrap_err();
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn missing_cursor_with_more_pages_is_rejected() {
        let result: Result<Vec<u32>> = fetch_all_pages(|_| Ok(page(vec![1], None, true)));
        assert!(matches!(result, Err(NotionError::Decode { .. })));
    }

    #[test]
    fn empty_cursor_with_more_pages_is_rejected() {
        let mut calls = 0;
        let result: Result<Vec<u32>> = fetch_all_pages(|_| {
            calls += 1;
            Ok(page(vec![1], Some(""), true))
        });
        assert!(matches!(result, Err(NotionError::Decode { .. })));
        assert_eq!(calls, 1);
    }
}
