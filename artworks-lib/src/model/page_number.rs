//! 1-based page numbers.

use std::fmt;
use std::num::NonZeroU32;

use serde::Deserialize;
use serde::Serialize;

/// A 1-based page number.
///
/// Zero is not a page, so it cannot be represented. The pagination widget
/// reports 0-based indexes; use [`PageNumber::from_index`] and
/// [`PageNumber::index`] to cross that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Creates a page number, returning `None` for zero.
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    /// Converts a 0-based page index into a page number.
    ///
    /// Indexes past `u32::MAX - 1` saturate at the last representable page.
    pub fn from_index(index: usize) -> Self {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Returns the page number as an integer.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the 0-based index of this page.
    pub fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Returns the following page.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the preceding page, or `None` on the first page.
    pub fn prev(self) -> Option<Self> {
        Self::new(self.0.get() - 1)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when converting zero into a [`PageNumber`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page numbers start at 1")]
pub struct ZeroPageNumber;

impl TryFrom<u32> for PageNumber {
    type Error = ZeroPageNumber;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ZeroPageNumber)
    }
}

impl From<PageNumber> for u32 {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_not_a_page() {
        assert_eq!(PageNumber::new(0), None);
        assert_eq!(PageNumber::try_from(0), Err(ZeroPageNumber));
        assert_eq!(PageNumber::new(1), Some(PageNumber::FIRST));
    }

    #[test]
    fn test_index_conversion() {
        assert_eq!(PageNumber::from_index(0), PageNumber::FIRST);
        assert_eq!(PageNumber::from_index(4).get(), 5);
        assert_eq!(PageNumber::from_index(4).index(), 4);
        assert_eq!(PageNumber::from_index(usize::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_neighbours() {
        let page = PageNumber::from_index(1);
        assert_eq!(page.next().get(), 3);
        assert_eq!(page.prev(), Some(PageNumber::FIRST));
        assert_eq!(PageNumber::FIRST.prev(), None);
    }

    #[test]
    fn test_serde_rejects_zero() {
        assert!(serde_json::from_str::<PageNumber>("0").is_err());
        let page: PageNumber = serde_json::from_str("7").unwrap();
        assert_eq!(page.get(), 7);
        assert_eq!(serde_json::to_string(&page).unwrap(), "7");
    }
}
