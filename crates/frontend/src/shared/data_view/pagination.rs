use serde::{Deserialize, Serialize};

/// Page numbering convention of a consumer (UI control or backend)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageBase {
    Zero,
    #[default]
    One,
}

impl PageBase {
    fn offset(self) -> usize {
        match self {
            PageBase::Zero => 0,
            PageBase::One => 1,
        }
    }

    /// Internal 0-based page -> this convention
    pub fn to_base(self, page: usize) -> usize {
        page + self.offset()
    }

    /// This convention -> internal 0-based page (page "0" in a 1-based scheme clamps to the first page)
    pub fn from_base(self, page: usize) -> usize {
        page.saturating_sub(self.offset())
    }
}

/// Current page (0-based) and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationModel {
    pub page: usize,
    pub page_size: usize,
}

/// Partial update of [`PaginationModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationUpdate {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl PaginationUpdate {
    pub fn page(page: usize) -> Self {
        Self {
            page: Some(page),
            page_size: None,
        }
    }

    pub fn page_size(page_size: usize) -> Self {
        Self {
            page: None,
            page_size: Some(page_size),
        }
    }
}

impl PaginationModel {
    /// A zero page size is bumped to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Merges a partial update. A new page size invalidates the old offset,
    /// so it always lands on the first page. Returns `true` if anything changed.
    pub fn apply(&mut self, update: PaginationUpdate) -> bool {
        let before = *self;

        match update.page_size.filter(|size| *size > 0) {
            Some(size) if size != self.page_size => {
                self.page_size = size;
                self.page = 0;
            }
            _ => {
                if let Some(page) = update.page {
                    self.page = page;
                }
            }
        }

        *self != before
    }

    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Never less than one, an empty list still shows "1 / 1"
    pub fn total_pages(&self, total: usize) -> usize {
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    pub fn is_last_page(&self, total: usize) -> bool {
        self.page + 1 >= self.total_pages(total)
    }
}
