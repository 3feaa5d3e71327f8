#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use infiniscroll_core::ScrollResult;
use infiniscroll_domain::{PageFetcher, PageResponse, Quote};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays scripted responses in order. A `None` entry never resolves, which
/// stands in for a request that is still on the wire.
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Option<ScrollResult<PageResponse<Quote>>>>>,
    pub calls: Arc<Mutex<Vec<u32>>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Option<ScrollResult<PageResponse<Quote>>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PageFetcher for ScriptedFetcher {
    type Item = Quote;

    async fn fetch_page(&self, page: u32) -> ScrollResult<PageResponse<Quote>> {
        self.calls.lock().unwrap().push(page);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Some(result)) => result,
            _ => std::future::pending().await,
        }
    }
}

pub fn quote(id: &str) -> Quote {
    let date = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
    Quote {
        id: id.to_string(),
        author: format!("Author {}", id),
        author_slug: format!("author-{}", id),
        content: format!("Quote {}", id),
        date_added: date,
        date_modified: date,
        length: 8,
        tags: vec!["test".to_string()],
    }
}

pub fn page(number: u32, count: usize, total_pages: u32) -> PageResponse<Quote> {
    let records = (0..count)
        .map(|i| quote(&format!("p{}-{}", number, i)))
        .collect();
    PageResponse::new(records, number, Some(total_pages))
}
