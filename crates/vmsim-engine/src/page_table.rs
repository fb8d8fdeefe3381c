//! Page table: per-page residency and frame assignment.

use vmsim_common::{FrameId, PageId, Result, SimError};

/// Fixed-size registry of virtual pages.
///
/// Each entry records which frame holds the page, or `None` when the
/// page is not resident. Entries are created once at initialization
/// and only reset en masse; residency is flipped by the engine on
/// load and evict.
#[derive(Debug)]
pub struct PageTable {
    entries: Vec<Option<FrameId>>,
}

impl PageTable {
    /// Creates a table with `size` non-resident entries.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SimError::InvalidConfig(
                "page table size must be positive".to_string(),
            ));
        }
        Ok(Self {
            entries: vec![None; size],
        })
    }

    /// Returns the number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Validates that a page id falls within the table.
    pub fn check_range(&self, page: PageId) -> Result<()> {
        if page.index() >= self.entries.len() {
            return Err(SimError::OutOfRange {
                page: page.0,
                size: self.entries.len(),
            });
        }
        Ok(())
    }

    /// Returns true if the page is resident in some frame.
    pub fn is_resident(&self, page: PageId) -> Result<bool> {
        self.check_range(page)?;
        Ok(self.entries[page.index()].is_some())
    }

    /// Returns the frame holding the page, if resident.
    pub fn frame_of(&self, page: PageId) -> Result<Option<FrameId>> {
        self.check_range(page)?;
        Ok(self.entries[page.index()])
    }

    /// Records that the page is resident in the given frame.
    ///
    /// Idempotent: re-marking an already resident page just updates
    /// the frame assignment.
    pub fn mark_resident(&mut self, page: PageId, frame: FrameId) -> Result<()> {
        self.check_range(page)?;
        self.entries[page.index()] = Some(frame);
        Ok(())
    }

    /// Records that the page is no longer resident.
    ///
    /// Idempotent: a no-op if the page is already non-resident.
    pub fn mark_non_resident(&mut self, page: PageId) -> Result<()> {
        self.check_range(page)?;
        self.entries[page.index()] = None;
        Ok(())
    }

    /// Returns the number of resident entries.
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Returns the full entry vector, indexed by page number.
    pub fn entries(&self) -> &[Option<FrameId>] {
        &self.entries
    }

    /// Resets every entry to non-resident.
    pub fn reset(&mut self) {
        self.entries.fill(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_table_new() {
        let table = PageTable::new(8).unwrap();
        assert_eq!(table.size(), 8);
        assert_eq!(table.resident_count(), 0);
        for entry in table.entries() {
            assert!(entry.is_none());
        }
    }

    #[test]
    fn test_page_table_zero_size() {
        let err = PageTable::new(0).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn test_mark_resident_and_query() {
        let mut table = PageTable::new(8).unwrap();
        let page = PageId(3);

        assert!(!table.is_resident(page).unwrap());

        table.mark_resident(page, FrameId(1)).unwrap();
        assert!(table.is_resident(page).unwrap());
        assert_eq!(table.frame_of(page).unwrap(), Some(FrameId(1)));
        assert_eq!(table.resident_count(), 1);
    }

    #[test]
    fn test_mark_non_resident() {
        let mut table = PageTable::new(8).unwrap();
        let page = PageId(3);

        table.mark_resident(page, FrameId(0)).unwrap();
        table.mark_non_resident(page).unwrap();
        assert!(!table.is_resident(page).unwrap());
        assert_eq!(table.frame_of(page).unwrap(), None);
    }

    #[test]
    fn test_mark_idempotent() {
        let mut table = PageTable::new(8).unwrap();
        let page = PageId(5);

        table.mark_non_resident(page).unwrap();
        table.mark_non_resident(page).unwrap();
        assert!(!table.is_resident(page).unwrap());

        table.mark_resident(page, FrameId(2)).unwrap();
        table.mark_resident(page, FrameId(2)).unwrap();
        assert_eq!(table.frame_of(page).unwrap(), Some(FrameId(2)));
        assert_eq!(table.resident_count(), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut table = PageTable::new(4).unwrap();
        let page = PageId(4);

        assert!(matches!(
            table.is_resident(page),
            Err(SimError::OutOfRange { page: 4, size: 4 })
        ));
        assert!(table.mark_resident(page, FrameId(0)).is_err());
        assert!(table.mark_non_resident(page).is_err());
    }

    #[test]
    fn test_reset() {
        let mut table = PageTable::new(4).unwrap();
        table.mark_resident(PageId(0), FrameId(0)).unwrap();
        table.mark_resident(PageId(2), FrameId(1)).unwrap();

        table.reset();
        assert_eq!(table.resident_count(), 0);
        assert_eq!(table.size(), 4);
    }
}
