//! Offset paging over Jira's `startAt` / `maxResults` / `total` envelopes

use crate::error::Result;
use std::env;

pub const DEFAULT_MAX_RESULTS: usize = 1000;
pub const MAX_RESULTS_ENV: &str = "JIRA_SCREENS_MAX_RESULTS";

/// One page of a paged resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Offset the server answered from
    pub start_at: usize,
    /// Size of the whole collection, if the server reports it
    pub total: Option<usize>,
    pub values: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(start_at: usize, total: Option<usize>, values: Vec<T>) -> Self {
        Self {
            start_at,
            total,
            values,
        }
    }

    /// Offset of the first entry after this page
    pub fn next_start(&self) -> usize {
        self.start_at + self.values.len()
    }

    /// Jira may serve fewer entries than requested, so only `total` or an
    /// empty page ends the collection
    pub fn is_last(&self) -> bool {
        self.values.is_empty() || self.total.is_some_and(|total| self.next_start() >= total)
    }
}

/// Upper bound on entries collected per resource
pub fn get_max_results() -> usize {
    env::var(MAX_RESULTS_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_RESULTS)
}

/// Collect every page of a resource, capped at `get_max_results()` entries.
///
/// `fetch_page` receives `(start_at, max_results)`.
pub fn fetch_all_pages<T, F>(mut fetch_page: F, page_size: usize) -> Result<Vec<T>>
where
    F: FnMut(usize, usize) -> Result<Page<T>>,
{
    let cap = get_max_results();
    let mut values = Vec::new();
    let mut start_at = 0;

    while values.len() < cap {
        let limit = page_size.min(cap - values.len());
        let page = fetch_page(start_at, limit)?;
        // A server that ignores startAt answers from an offset already collected
        if page.start_at < start_at {
            break;
        }

        let last = page.is_last();
        let next = page.next_start();
        values.extend(page.values);
        if last {
            break;
        }
        start_at = next;
    }

    values.truncate(cap);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScreenError;

    /// Serves `data` the way createmeta does, never more than `server_cap` per page
    fn createmeta_pages(
        data: &[u32],
        server_cap: usize,
        report_total: bool,
    ) -> impl FnMut(usize, usize) -> Result<Page<u32>> + '_ {
        move |start_at, max_results| {
            let values = data
                .iter()
                .copied()
                .skip(start_at)
                .take(max_results.min(server_cap))
                .collect();
            Ok(Page::new(start_at, report_total.then_some(data.len()), values))
        }
    }

    #[test]
    fn single_page_within_total() {
        let data = [1, 2, 3];
        let result = fetch_all_pages(createmeta_pages(&data, 50, true), 50).unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn keeps_paging_when_server_serves_short_pages() {
        // 120 fields, server answers at most 20 per request although 50 are asked for
        let data: Vec<u32> = (1..=120).collect();
        let mut requests = Vec::new();
        let mut pages = createmeta_pages(&data, 20, true);

        let result = fetch_all_pages(
            |start_at, max_results| {
                requests.push(start_at);
                pages(start_at, max_results)
            },
            50,
        )
        .unwrap();

        assert_eq!(result, data);
        assert_eq!(requests, vec![0, 20, 40, 60, 80, 100]);
    }

    #[test]
    fn stops_at_total_without_extra_request() {
        let data: Vec<u32> = (1..=100).collect();
        let mut calls = 0;
        let mut pages = createmeta_pages(&data, 50, true);

        let result = fetch_all_pages(
            |start_at, max_results| {
                calls += 1;
                pages(start_at, max_results)
            },
            50,
        )
        .unwrap();

        assert_eq!(result.len(), 100);
        assert_eq!(calls, 2);
    }

    #[test]
    fn without_total_pages_until_empty() {
        let data: Vec<u32> = (1..=30).collect();
        let result = fetch_all_pages(createmeta_pages(&data, 10, false), 50).unwrap();
        assert_eq!(result, data);
    }

    #[test]
    fn empty_resource() {
        let result = fetch_all_pages(createmeta_pages(&[], 50, true), 50).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn server_ignoring_start_at_terminates() {
        let result = fetch_all_pages(|_, _| Ok(Page::new(0, None, vec![1, 2, 3])), 3).unwrap();
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn capped_at_max_results() {
        // JIRA_SCREENS_MAX_RESULTS is unset in tests
        let data: Vec<u32> = (1..=2000).collect();
        let result = fetch_all_pages(createmeta_pages(&data, 50, true), 50).unwrap();
        assert_eq!(result.len(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn error_on_later_page_propagates() {
        let result: Result<Vec<u32>> = fetch_all_pages(
            |start_at, _| match start_at {
                0 => Ok(Page::new(0, Some(10), vec![1, 2, 3, 4, 5])),
                _ => Err(ScreenError::Api {
                    status: 500,
                    message: "Server error".to_string(),
                }),
            },
            5,
        );
        assert!(matches!(result, Err(ScreenError::Api { status: 500, .. })));
    }

    #[test]
    fn page_is_last_at_total() {
        assert!(Page::new(40, Some(45), vec![0; 5]).is_last());
        assert!(!Page::new(0, Some(45), vec![0; 20]).is_last());
        assert!(!Page::new(0, None, vec![0; 20]).is_last());
        assert!(Page::<u32>::new(20, None, Vec::new()).is_last());
    }
}
