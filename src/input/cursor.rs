//! Row selection on list screens.

/// The selected row of the active list, clamped to its length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    selected: usize,
    rows: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Record how many rows the active list has, moving the selection back
    /// inside the list if it shrank.
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
        if self.selected >= rows {
            self.selected = rows.saturating_sub(1);
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.rows {
            self.selected += 1;
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_bounds() {
        let mut cursor = Cursor::new();
        cursor.set_rows(2);
        cursor.up();
        assert_eq!(cursor.selected(), 0);
        cursor.down();
        cursor.down();
        assert_eq!(cursor.selected(), 1);
    }

    #[test]
    fn test_shrinking_list_clamps_selection() {
        let mut cursor = Cursor::new();
        cursor.set_rows(5);
        for _ in 0..4 {
            cursor.down();
        }
        cursor.set_rows(2);
        assert_eq!(cursor.selected(), 1);
        cursor.set_rows(0);
        assert_eq!(cursor.selected(), 0);
    }
}
