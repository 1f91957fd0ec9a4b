use serde::{Deserialize, Serialize};

use crate::config::CONFIG;

/// Query-string parameters of paginated listings. `page` is 1-based; `size`
/// overrides the configured page size up to a cap.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageQuery {
    const MAX_PAGE_SIZE: u32 = 100;

    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self) -> usize {
        self.size
            .unwrap_or(CONFIG.site.posts_per_page as u32)
            .clamp(1, Self::MAX_PAGE_SIZE) as usize
    }

    pub fn total_pages(&self, total_items: usize) -> u32 {
        total_items.div_ceil(self.per_page()) as u32
    }

    pub fn offset(&self) -> usize {
        (self.page() as usize - 1) * self.per_page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(PageQuery::default().page(), 1);
        let zero = PageQuery {
            page: Some(0),
            size: None,
        };
        assert_eq!(zero.page(), 1);
    }

    #[test]
    fn size_is_clamped() {
        let huge = PageQuery {
            page: None,
            size: Some(500),
        };
        assert_eq!(huge.per_page(), 100);
        let zero = PageQuery {
            page: None,
            size: Some(0),
        };
        assert_eq!(zero.per_page(), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        let query = PageQuery {
            page: None,
            size: Some(3),
        };
        assert_eq!(query.total_pages(0), 0);
        assert_eq!(query.total_pages(3), 1);
        assert_eq!(query.total_pages(7), 3);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let query = PageQuery {
            page: Some(3),
            size: Some(10),
        };
        assert_eq!(query.offset(), 20);
    }
}
