//! Single-open accordion.

/// Expand state for a list of collapsible items. At most one is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All items start collapsed.
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Open item `index`, or close it if it is already open.
    ///
    /// Opening one item closes any other. Out of range indexes are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn close(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_collapsed() {
        let accordion = Accordion::new(6);
        assert_eq!(accordion.open_index(), None);
        assert!((0..6).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut accordion = Accordion::new(6);
        accordion.toggle(2);
        assert!(accordion.is_open(2));
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_only_one_open() {
        let mut accordion = Accordion::new(6);
        accordion.toggle(1);
        accordion.toggle(4);
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(4));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(0);
        accordion.toggle(3);
        assert_eq!(accordion.open_index(), Some(0));

        accordion.close();
        assert_eq!(accordion.open_index(), None);
    }
}
