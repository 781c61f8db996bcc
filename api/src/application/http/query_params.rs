/// Page-numbered pagination as the mini-program clients send it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    pub page: u64,
    pub page_size: u64,
}

impl PaginationParams {
    /// Clamps to page >= 1 and 1 <= page_size <= 100; defaults are
    /// page 1 / page_size 20.
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(20).clamp(1, 100),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_absent() {
        let params = PaginationParams::new(None, None);
        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 20);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let params = PaginationParams::new(Some(0), Some(5));
        assert_eq!(params.page, 1);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn page_size_clamps_to_hundred() {
        let params = PaginationParams::new(Some(2), Some(1000));
        assert_eq!(params.page_size, 100);
        assert_eq!(params.offset(), 100);
    }

    #[test]
    fn offset_skips_earlier_pages() {
        let params = PaginationParams::new(Some(3), Some(5));
        assert_eq!(params.offset(), 10);
    }
}
