//! Page state: the single source of truth for the active page

/// Active page and page bounds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    active: usize,
    last_index: usize,
}

impl PageState {
    /// Create page state for pages `0..=last_index`, starting at page 0
    pub fn new(last_index: usize) -> Self {
        Self { active: 0, last_index }
    }

    /// Active page
    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Index of the last page
    #[inline]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    #[inline]
    pub fn is_first(&self, page: usize) -> bool {
        page == 0
    }

    #[inline]
    pub fn is_last(&self, page: usize) -> bool {
        page == self.last_index
    }

    /// Clamp any candidate, including negative ones, into `0..=last_index`
    pub fn clamp(&self, candidate: i64) -> usize {
        if candidate <= 0 {
            0
        } else {
            usize::try_from(candidate).map_or(self.last_index, |page| page.min(self.last_index))
        }
    }

    /// Change the page bounds. The active page is left alone; the next
    /// commit clamps it.
    pub fn set_last_index(&mut self, last_index: usize) {
        self.last_index = last_index;
    }

    pub(crate) fn set_active(&mut self, page: usize) {
        self.active = page.min(self.last_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_into_range() {
        let pages = PageState::new(4);

        assert_eq!(pages.clamp(-10), 0);
        assert_eq!(pages.clamp(0), 0);
        assert_eq!(pages.clamp(3), 3);
        assert_eq!(pages.clamp(4), 4);
        assert_eq!(pages.clamp(99), 4);
        assert_eq!(pages.clamp(i64::MAX), 4);
    }

    #[test]
    fn test_bounds() {
        let pages = PageState::new(2);

        assert_eq!(pages.last_index(), 2);
        assert!(pages.is_first(0));
        assert!(!pages.is_first(1));
        assert!(pages.is_last(2));
        assert!(!pages.is_last(1));
    }

    #[test]
    fn test_single_page_is_first_and_last() {
        let pages = PageState::new(0);
        assert!(pages.is_first(0));
        assert!(pages.is_last(0));
        assert_eq!(pages.clamp(1), 0);
    }

    #[test]
    fn test_set_active_never_exceeds_bounds() {
        let mut pages = PageState::new(3);
        pages.set_active(7);
        assert_eq!(pages.active(), 3);

        pages.set_last_index(1);
        assert_eq!(pages.clamp(pages.active() as i64), 1);
    }
}
