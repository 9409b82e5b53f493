//! Layout calculation logic
//!
//! Pure functions for sizing and scrolling the contents grid.

/// Width of one card in terminal cells, borders included
pub const CARD_WIDTH: u16 = 28;

/// Height of one card in terminal cells, borders included
pub const CARD_HEIGHT: u16 = 4;

/// How many cards fit side by side
///
/// Always at least one, so a very narrow terminal still shows a column.
///
/// # Examples
/// ```
/// use lepeva::logic::layout::grid_columns;
///
/// assert_eq!(grid_columns(0), 1);
/// assert_eq!(grid_columns(27), 1);
/// assert_eq!(grid_columns(56), 2);
/// assert_eq!(grid_columns(100), 3);
/// ```
pub fn grid_columns(content_width: u16) -> usize {
    ((content_width / CARD_WIDTH) as usize).max(1)
}

/// How many card rows fit
pub fn grid_rows(content_height: u16) -> usize {
    ((content_height / CARD_HEIGHT) as usize).max(1)
}

/// First card row to draw so the selected card stays on screen
///
/// The grid scrolls only as far as needed: the selected row sits on the
/// bottom line once it passes the visible window.
///
/// # Arguments
/// * `selected` - Selected card index, if any
/// * `columns` - Cards per row
/// * `visible_rows` - Rows that fit on screen
///
/// # Examples
/// ```
/// use lepeva::logic::layout::first_visible_row;
///
/// // 3 columns, 2 visible rows: card 7 is on row 2, so row 1 comes first
/// assert_eq!(first_visible_row(Some(7), 3, 2), 1);
/// assert_eq!(first_visible_row(Some(4), 3, 2), 0);
/// assert_eq!(first_visible_row(None, 3, 2), 0);
/// ```
pub fn first_visible_row(selected: Option<usize>, columns: usize, visible_rows: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let row = selected / columns.max(1);
    let visible_rows = visible_rows.max(1);
    (row + 1).saturating_sub(visible_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_rows_minimum() {
        assert_eq!(grid_rows(0), 1);
        assert_eq!(grid_rows(CARD_HEIGHT * 3 + 1), 3);
    }

    #[test]
    fn test_first_visible_row_single_row_window() {
        assert_eq!(first_visible_row(Some(5), 2, 1), 2);
        assert_eq!(first_visible_row(Some(5), 2, 0), 2);
    }

    #[test]
    fn test_first_visible_row_zero_columns() {
        assert_eq!(first_visible_row(Some(3), 0, 2), 2);
    }
}
