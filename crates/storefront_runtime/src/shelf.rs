//! Position tracking for horizontally browsable shelves.

/// Shelves wrap around only when they hold more works than this.
pub const DEFAULT_LOOP_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Index of the leading work on a shelf.
///
/// Long shelves wrap around at either end; short shelves stop at the first and last work. An
/// empty shelf accepts every call and never moves.
pub struct ShelfCursor {
    index: usize,
    len: usize,
    looping: bool,
}

impl ShelfCursor {
    /// Cursor for `len` works using [`DEFAULT_LOOP_THRESHOLD`].
    pub fn new(len: usize) -> Self {
        Self::with_threshold(len, DEFAULT_LOOP_THRESHOLD)
    }

    /// Cursor that wraps when `len > loop_threshold`.
    pub fn with_threshold(len: usize, loop_threshold: usize) -> Self {
        Self {
            index: 0,
            len,
            looping: len > loop_threshold,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn can_next(&self) -> bool {
        self.len > 1 && (self.looping || self.index + 1 < self.len)
    }

    pub fn can_previous(&self) -> bool {
        self.len > 1 && (self.looping || self.index > 0)
    }

    /// Advances one work. Returns whether the cursor moved.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Steps back one work. Returns whether the cursor moved.
    pub fn previous(&mut self) -> bool {
        if !self.can_previous() {
            return false;
        }
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn five_works_do_not_wrap() {
        let mut cursor = ShelfCursor::new(5);
        assert!(!cursor.is_looping());
        assert!(!cursor.can_previous());
        assert!(!cursor.previous());

        for _ in 0..10 {
            cursor.next();
        }
        assert_eq!(cursor.index(), 4);
        assert!(!cursor.can_next());
    }

    #[test]
    fn six_works_wrap_both_ways() {
        let mut cursor = ShelfCursor::new(6);
        assert!(cursor.is_looping());

        assert!(cursor.previous());
        assert_eq!(cursor.index(), 5);
        assert!(cursor.next());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn empty_shelf_is_inert() {
        let mut cursor = ShelfCursor::new(0);
        assert!(cursor.is_empty());
        assert!(!cursor.can_next());
        assert!(!cursor.can_previous());
        assert!(!cursor.next());
        assert!(!cursor.previous());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn custom_threshold_controls_wrapping() {
        assert!(ShelfCursor::with_threshold(3, 2).is_looping());
        assert!(!ShelfCursor::with_threshold(8, 8).is_looping());
    }
}
