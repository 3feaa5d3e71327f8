/// One page of records as returned by a fetcher.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<R> {
    pub records: Vec<R>,
    pub page_number: u32,
    /// `None` means the server reported no paging info, i.e. no more data.
    pub total_pages: Option<u32>,
}

impl<R> PageResponse<R> {
    pub fn new(records: Vec<R>, page_number: u32, total_pages: Option<u32>) -> Self {
        Self {
            records,
            page_number,
            total_pages,
        }
    }

    /// Whether nothing can follow this page.
    pub fn is_last(&self) -> bool {
        if self.records.is_empty() {
            return true;
        }
        match self.total_pages {
            Some(total) => self.page_number >= total,
            None => true,
        }
    }
}
