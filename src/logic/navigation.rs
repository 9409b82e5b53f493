//! Grid selection logic
//!
//! Folder and file cards are laid out left to right in rows of `columns`
//! cards. These functions move the highlighted card around that grid.

/// Next card, wrapping to the first
///
/// # Examples
/// ```
/// use lepeva::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous card, wrapping to the last
///
/// # Examples
/// ```
/// use lepeva::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => len - 1,
        Some(i) => (i - 1).min(len - 1),
    })
}

/// Card one row below, staying put on the last row
///
/// When the row below is shorter than the current column, lands on the
/// last card instead.
///
/// # Examples
/// ```
/// use lepeva::logic::navigation::row_down;
///
/// // 7 cards in rows of 3: [0 1 2] [3 4 5] [6]
/// assert_eq!(row_down(Some(1), 7, 3), Some(4));
/// assert_eq!(row_down(Some(4), 7, 3), Some(6));
/// assert_eq!(row_down(Some(6), 7, 3), Some(6));
/// ```
pub fn row_down(current: Option<usize>, len: usize, columns: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);

    Some(match current {
        None => 0,
        Some(i) => {
            let i = i.min(len - 1);
            let last_row = (len - 1) / columns;
            if i / columns >= last_row {
                i
            } else {
                (i + columns).min(len - 1)
            }
        }
    })
}

/// Card one row above, staying put on the first row
///
/// # Examples
/// ```
/// use lepeva::logic::navigation::row_up;
///
/// assert_eq!(row_up(Some(4), 7, 3), Some(1));
/// assert_eq!(row_up(Some(1), 7, 3), Some(1));
/// ```
pub fn row_up(current: Option<usize>, len: usize, columns: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let columns = columns.max(1);

    Some(match current {
        None => 0,
        Some(i) => {
            let i = i.min(len - 1);
            i.checked_sub(columns).unwrap_or(i)
        }
    })
}

/// Keep a selection valid after the list it points into changed length
pub fn clamp_selection(current: Option<usize>, len: usize) -> Option<usize> {
    match (current, len) {
        (_, 0) => None,
        (None, _) => Some(0),
        (Some(i), len) => Some(i.min(len - 1)),
    }
}
