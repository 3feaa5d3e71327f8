use crate::{PageResponse, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub author: String,
    pub author_slug: String,
    pub content: String,
    pub date_added: NaiveDate,
    pub date_modified: NaiveDate,
    pub length: u32,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Body of `GET /quotes?page=N`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotesPayload {
    pub count: u32,
    pub last_item_index: Option<u32>,
    pub page: u32,
    pub results: Vec<Quote>,
    pub total_count: u32,
    pub total_pages: u32,
}

impl From<QuotesPayload> for PageResponse<Quote> {
    fn from(payload: QuotesPayload) -> Self {
        PageResponse::new(payload.results, payload.page, Some(payload.total_pages))
    }
}

impl Record for Quote {
    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> String {
        self.content.clone()
    }

    fn detail(&self) -> String {
        format!("by {}", self.author)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Author", self.author.clone()),
            ("Quote", self.content.clone()),
            ("Tags", self.tags.join(", ")),
            ("Length", self.length.to_string()),
            ("Added", self.date_added.to_string()),
            ("Modified", self.date_modified.to_string()),
            ("Id", self.id.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "count": 2,
        "totalCount": 41,
        "page": 1,
        "totalPages": 3,
        "lastItemIndex": 20,
        "results": [
            {
                "_id": "bfrHOy1eFt",
                "author": "Thomas Edison",
                "content": "Genius is one percent inspiration and ninety-nine percent perspiration.",
                "tags": ["Famous Quotes"],
                "authorSlug": "thomas-edison",
                "length": 73,
                "dateAdded": "2019-03-17",
                "dateModified": "2023-04-14"
            },
            {
                "_id": "ZhtgRtlLkQ",
                "author": "Confucius",
                "content": "Real knowledge is to know the extent of one's ignorance.",
                "tags": [],
                "authorSlug": "confucius",
                "length": 56,
                "dateAdded": "2020-01-01",
                "dateModified": "2020-01-01"
            }
        ]
    }"#;

    #[test]
    fn test_decode_quotes_page() {
        let payload: QuotesPayload = serde_json::from_str(PAGE_JSON).unwrap();
        assert_eq!(payload.total_pages, 3);

        let page: PageResponse<Quote> = payload.into();
        assert_eq!(page.page_number, 1);
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].id(), "bfrHOy1eFt");
        assert_eq!(page.records[0].author_slug, "thomas-edison");
        assert_eq!(
            page.records[0].date_added,
            NaiveDate::from_ymd_opt(2019, 3, 17).unwrap()
        );
        assert!(!page.is_last());
    }

    #[test]
    fn test_quote_display_fields() {
        let payload: QuotesPayload = serde_json::from_str(PAGE_JSON).unwrap();
        let quote = &payload.results[1];
        assert_eq!(quote.detail(), "by Confucius");
        assert!(quote.headline().starts_with("Real knowledge"));
        assert!(quote.fields().iter().any(|(label, _)| *label == "Tags"));
    }

    #[test]
    fn test_reject_malformed_quote() {
        let bad = r#"{"count":1,"page":1,"totalCount":1,"totalPages":1,"results":[{"_id":"x"}]}"#;
        assert!(serde_json::from_str::<QuotesPayload>(bad).is_err());
    }
}
