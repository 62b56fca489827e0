//! Type-coercion helpers shared by the traversal engine.
//!
//! These follow the ECMAScript rules for array indices and string-to-number
//! conversion, since keys of a property collection are always strings that
//! may happen to name an array position.

/// Largest valid array index (`2^32 - 2`).
pub const MAX_ARRAY_INDEX: usize = 4_294_967_294;

/// Parse `key` as a canonical array index.
///
/// A canonical index is the decimal form of an integer in
/// `0..=MAX_ARRAY_INDEX` without sign, fraction or leading zeros.
///
/// # Examples
///
/// ```
/// use obj_each_util::coerce::to_array_index;
///
/// assert_eq!(to_array_index("0"), Some(0));
/// assert_eq!(to_array_index("42"), Some(42));
/// assert_eq!(to_array_index("042"), None);
/// assert_eq!(to_array_index("-1"), None);
/// assert_eq!(to_array_index("1.5"), None);
/// assert_eq!(to_array_index("4294967295"), None);
/// ```
pub fn to_array_index(key: &str) -> Option<usize> {
    let bytes = key.as_bytes();
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let n: u64 = key.parse().ok()?;
    if n > MAX_ARRAY_INDEX as u64 {
        return None;
    }
    usize::try_from(n).ok()
}

/// Check if `key` is a canonical array index.
pub fn is_array_index(key: &str) -> bool {
    to_array_index(key).is_some()
}

/// Convert a number to an array index if it is a whole number in range.
pub fn number_to_array_index(n: f64) -> Option<usize> {
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= MAX_ARRAY_INDEX as f64 {
        Some(n as usize)
    } else {
        None
    }
}

/// Convert a string to a number the way `Number(s)` does.
///
/// Surrounding whitespace is ignored, an empty string is `0`, `0x`/`0o`/`0b`
/// prefixes select a radix, and anything unparsable is `NaN`.
///
/// # Examples
///
/// ```
/// use obj_each_util::coerce::to_number;
///
/// assert_eq!(to_number(" 5 "), 5.0);
/// assert_eq!(to_number(""), 0.0);
/// assert_eq!(to_number("0x10"), 16.0);
/// assert_eq!(to_number("-1.5e1"), -15.0);
/// assert!(to_number("abc").is_nan());
/// assert!(to_number("inf").is_nan());
/// ```
pub fn to_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match t.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => 10,
    };
    if radix != 10 {
        let digits = &t[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d));
    }

    // Rust also accepts "inf", "nan" and "infinity", which Number() rejects.
    let numeric = t
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !numeric {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}
