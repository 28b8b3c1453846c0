//! Character display trait for the 16x2 LCD

/// Visible columns per row
pub const DISPLAY_COLS: u8 = 16;

/// Visible rows
pub const DISPLAY_ROWS: u8 = 2;

/// Trait for a character-cell display
///
/// The display is 2 rows of 16 columns. Text running past column 15 is
/// clipped or wrapped by the implementation; callers do not rely on either.
pub trait CharDisplay {
    /// Clear all cells and home the cursor
    fn clear(&mut self);

    /// Move the cursor
    ///
    /// - `col`: Column (0-15)
    /// - `row`: Row (0-1)
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Write ASCII text at the cursor, advancing it
    fn write_str(&mut self, text: &str);
}

/// Helper trait for drawing whole rows
pub trait DisplayExt: CharDisplay {
    /// Write text starting at column 0 of a row
    fn write_row(&mut self, row: u8, text: &str) {
        self.set_cursor(0, row);
        self.write_str(text);
    }

    /// Clear the screen, then fill the given rows from the top
    fn show_rows(&mut self, rows: &[&str]) {
        self.clear();
        for (row, text) in rows.iter().enumerate().take(DISPLAY_ROWS as usize) {
            self.write_row(row as u8, text);
        }
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> DisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDisplay;

    #[test]
    fn test_show_rows_clears_then_writes() {
        let mut display = MockDisplay::new();
        display.write_row(1, "stale");
        display.show_rows(&["top", "bottom"]);

        assert_eq!(display.row(0), "top");
        assert_eq!(display.row(1), "bottom");
        assert_eq!(display.clears, 1);
    }

    #[test]
    fn test_show_rows_ignores_extra_rows() {
        let mut display = MockDisplay::new();
        display.show_rows(&["a", "b", "c"]);
        assert_eq!(display.row(0), "a");
        assert_eq!(display.row(1), "b");
    }
}
