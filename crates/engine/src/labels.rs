//! Spreadsheet-style column labels.
//!
//! Bijective base-26: 0=A, 25=Z, 26=AA, 701=ZZ, 702=AAA. There is no
//! digit for zero, which is why the usual base conversion gets an extra
//! `- 1` per digit. Header labels are never stored — they are always
//! recomputed from the column index.

/// Convert a 0-based column index to its letter label.
pub fn column_label(col: usize) -> String {
    let mut result = String::new();
    let mut n = col;
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

/// Decode a letter label back to its 0-based column index.
///
/// Case-insensitive. Returns `None` for empty or non-alphabetic input.
pub fn parse_label(label: &str) -> Option<usize> {
    if label.is_empty() {
        return None;
    }
    let mut n: usize = 0;
    for ch in label.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        n = n * 26 + digit;
    }
    Some(n - 1)
}

/// Format an A1-style cell address: column letters plus 1-based row.
pub fn cell_ref(row: usize, col: usize) -> String {
    format!("{}{}", column_label(col), row + 1)
}

/// Parse an A1-style address back to 0-based (row, col).
pub fn parse_cell_ref(text: &str) -> Option<(usize, usize)> {
    let trimmed = text.trim();
    let split = trimmed.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = trimmed.split_at(split);
    let col = parse_label(letters)?;
    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_label_known_values() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(1), "B");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(51), "AZ");
        assert_eq!(column_label(52), "BA");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
    }

    #[test]
    fn test_round_trip_first_ten_thousand() {
        for col in 0..10_000 {
            let label = column_label(col);
            assert_eq!(parse_label(&label), Some(col), "label {}", label);
        }
    }

    #[test]
    fn test_parse_label_case_insensitive() {
        assert_eq!(parse_label("a"), Some(0));
        assert_eq!(parse_label("aa"), Some(26));
        assert_eq!(parse_label("Zz"), Some(701));
    }

    #[test]
    fn test_parse_label_rejects_garbage() {
        assert_eq!(parse_label(""), None);
        assert_eq!(parse_label("A1"), None);
        assert_eq!(parse_label("1"), None);
        assert_eq!(parse_label("A B"), None);
        assert_eq!(parse_label("Ä"), None);
    }

    #[test]
    fn test_cell_ref() {
        assert_eq!(cell_ref(0, 0), "A1");
        assert_eq!(cell_ref(9, 26), "AA10");
        assert_eq!(cell_ref(2, 1), "B3");
    }

    #[test]
    fn test_parse_cell_ref() {
        assert_eq!(parse_cell_ref("A1"), Some((0, 0)));
        assert_eq!(parse_cell_ref("B3"), Some((2, 1)));
        assert_eq!(parse_cell_ref("aa10"), Some((9, 26)));
        assert_eq!(parse_cell_ref(" Z2 "), Some((1, 25)));

        assert_eq!(parse_cell_ref(""), None);
        assert_eq!(parse_cell_ref("A0"), None); // rows are 1-based
        assert_eq!(parse_cell_ref("12"), None);
        assert_eq!(parse_cell_ref("AB"), None);
        assert_eq!(parse_cell_ref("A1B"), None);
    }
}
