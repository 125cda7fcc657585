//! Spreadsheet-style cell names: base-26 column letters and `A1` references.

/// Convert a 1-based column number to its letters (1 → A, 26 → Z, 27 → AA, ...).
///
/// Zero has no label and yields an empty string.
pub fn column_label(number: u64) -> String {
    let mut result = String::new();
    let mut n = number;
    while n > 0 {
        n -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let c = char::from(b'A' + (n % 26) as u8);
        result.insert(0, c);
        n /= 26;
    }
    result
}

/// Convert a 0-based column index to its letters (0 → A, 25 → Z, 26 → AA, ...).
pub fn col_to_letter(col: u32) -> String {
    column_label(u64::from(col) + 1)
}

/// Name of the cell at 0-based `(col, row)`, e.g. `(1, 2)` → `"B3"`.
pub fn cell_name(col: u32, row: u32) -> String {
    format!("{}{}", col_to_letter(col), u64::from(row) + 1)
}

/// Parse a cell reference like "A1" into (col, row) where col and row are 0-indexed.
pub fn parse_cell_ref(cell_ref: &str) -> Option<(u32, u32)> {
    let mut col: u32 = 0;
    let mut row: u32 = 0;
    let mut saw_col = false;
    let mut saw_row = false;

    for ch in cell_ref.trim().chars() {
        if ch == '$' {
            continue;
        }
        if ch.is_ascii_alphabetic() {
            if saw_row {
                return None;
            }
            let upper = ch.to_ascii_uppercase();
            col = col
                .checked_mul(26)?
                .checked_add(upper as u32 - 'A' as u32 + 1)?;
            saw_col = true;
        } else if ch.is_ascii_digit() {
            row = row.checked_mul(10)?.checked_add(ch as u32 - '0' as u32)?;
            saw_row = true;
        } else {
            return None;
        }
    }

    if !saw_col || !saw_row || row == 0 {
        return None;
    }

    Some((col - 1, row - 1))
}

/// Parse a range like "A1:C3" (or a single "B2") into `((x1, y1), (x2, y2))`.
///
/// Corners are returned in the order written; callers normalize.
pub fn parse_cell_range(range: &str) -> Option<((u32, u32), (u32, u32))> {
    if let Some((start, end)) = range.split_once(':') {
        Some((parse_cell_ref(start)?, parse_cell_ref(end)?))
    } else {
        let cell = parse_cell_ref(range)?;
        Some((cell, cell))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_bijective_base_26() {
        let cases = [
            (1, "A"),
            (26, "Z"),
            (27, "AA"),
            (52, "AZ"),
            (53, "BA"),
            (702, "ZZ"),
            (703, "AAA"),
        ];
        for (number, expected) in cases {
            assert_eq!(column_label(number), expected, "label for {number}");
        }
    }

    #[test]
    fn zero_has_no_label() {
        assert_eq!(column_label(0), "");
    }

    #[test]
    fn last_column_index_does_not_overflow() {
        assert_eq!(col_to_letter(u32::MAX), column_label(u64::from(u32::MAX) + 1));
    }

    #[test]
    fn cell_names() {
        assert_eq!(cell_name(0, 0), "A1");
        assert_eq!(cell_name(1, 2), "B3");
        assert_eq!(cell_name(26, 99), "AA100");
    }

    #[test]
    fn parse_refs() {
        assert_eq!(parse_cell_ref("A1"), Some((0, 0)));
        assert_eq!(parse_cell_ref("$B$3"), Some((1, 2)));
        assert_eq!(parse_cell_ref("aa10"), Some((26, 9)));
        assert_eq!(parse_cell_ref("A0"), None);
        assert_eq!(parse_cell_ref("1A"), None);
        assert_eq!(parse_cell_ref("A-1"), None);
        assert_eq!(parse_cell_ref(""), None);
    }

    #[test]
    fn parse_ranges() {
        assert_eq!(parse_cell_range("C3:A1"), Some(((2, 2), (0, 0))));
        assert_eq!(parse_cell_range("B2"), Some(((1, 1), (1, 1))));
        assert_eq!(parse_cell_range("B2:"), None);
    }
}
