//! Roman numeral codec.
//!
//! Only canonical (subtractive) spellings are accepted: `IV` decodes, `IIII`
//! does not. Input is expected in uppercase; callers holding lowercase
//! numerals normalize before decoding.

/// Largest value with a canonical spelling (`MMMMCMXCIX`).
pub const MAX_VALUE: u32 = 4999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Decodes an uppercase Roman numeral, or `None` if `s` is not one.
pub fn to_int(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }

    let mut rest = s;
    let mut total = 0u32;
    for (value, numeral) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(numeral) {
            total = total.checked_add(value)?;
            rest = tail;
        }
    }
    if !rest.is_empty() {
        return None;
    }

    // Greedy decoding accepts spellings like "IIII"; only keep the value if
    // re-encoding reproduces the input exactly.
    (to_roman(total)? == s).then_some(total)
}

/// Encodes `n` as an uppercase Roman numeral. `None` outside `1..=MAX_VALUE`.
pub fn to_roman(mut n: u32) -> Option<String> {
    if n == 0 || n > MAX_VALUE {
        return None;
    }

    let mut out = String::new();
    for (value, numeral) in NUMERALS {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    Some(out)
}
