//! Table Sorting
//!
//! Column comparison for sortable data tables. Cells that both start with a
//! number compare numerically, everything else compares as Spanish text.
//!
//! Sorting is ascending only: clicking the same header twice gives the same
//! order.

use std::cmp::Ordering;

/// Parse the numeric prefix of `text` the way a browser's `parseFloat` does.
///
/// `"10"`, `" 2.5 pts"` and `"-3e2"` parse; `"abc"` and `""` do not.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let infinite = if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some(infinite);
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Compare two cell texts for an ascending sort
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    let a = a.trim();
    let b = b.trim();

    match (parse_leading_number(a), parse_leading_number(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => locale_compare(a, b),
    }
}

/// Spanish-aware text comparison.
///
/// Case and accents are ignored at the first level, with `ñ` ordered
/// between `n` and `o`. Remaining ties put lowercase before uppercase and
/// fall back to the raw strings so the order is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .map(primary_weight)
        .cmp(b.chars().map(primary_weight));

    primary
        .then_with(|| a.chars().map(accent_weight).cmp(b.chars().map(accent_weight)))
        .then_with(|| a.chars().map(case_weight).cmp(b.chars().map(case_weight)))
        .then_with(|| a.cmp(b))
}

fn primary_weight(c: char) -> u32 {
    let lower = c.to_lowercase().next().unwrap_or(c);
    let base = match lower {
        'á' | 'à' | 'â' | 'ä' | 'ã' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        // ñ gets its own slot right after n
        'ñ' => return ('n' as u32) * 2 + 1,
        other => other,
    };
    (base as u32) * 2
}

fn accent_weight(c: char) -> u8 {
    let lower = c.to_lowercase().next().unwrap_or(c);
    match lower {
        'á' | 'é' | 'í' | 'ó' | 'ú' => 1,
        'à' | 'è' | 'ì' | 'ò' | 'ù' => 2,
        'â' | 'ê' | 'î' | 'ô' | 'û' => 3,
        'ä' | 'ë' | 'ï' | 'ö' | 'ü' => 4,
        'ã' | 'õ' | 'ç' => 5,
        _ => 0,
    }
}

fn case_weight(c: char) -> u8 {
    if c.is_uppercase() {
        1
    } else {
        0
    }
}

/// Stable ascending sort of `rows` by the text of `column`.
///
/// Rows without that column compare as empty text.
pub fn sort_rows_by_column<R, F>(rows: &mut [R], column: usize, cell_text: F)
where
    F: Fn(&R, usize) -> Option<String>,
{
    rows.sort_by(|a, b| {
        let a = cell_text(a, column).unwrap_or_default();
        let b = cell_text(b, column).unwrap_or_default();
        compare_cells(&a, &b)
    });
}

/// Sort plain string rows, the shape the CLI works with
pub fn sort_string_rows(rows: &mut [Vec<String>], column: usize) {
    sort_rows_by_column(rows, column, |row, col| row.get(col).cloned());
}
