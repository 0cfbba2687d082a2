//! Decimal digit primitives shared by the code deriver and decoder.

/// Decimal digits of `n`, most significant first, taken from its canonical
/// base-10 rendering (so `digits(0)` is `[0]`, never empty).
pub fn digits(n: u32) -> Vec<u32> {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(n: u32) -> u32 {
    digits(n).iter().sum()
}

/// Partition a sequence into non-overlapping consecutive pairs in encounter
/// order: element 0 with element 1, element 2 with element 3, and so on.
///
/// A trailing unpaired element of an odd-length input is dropped. The code
/// strings this operates on are always six digits, so the odd case never
/// arises in practice, but the drop is load-bearing legacy behavior and must
/// not be "fixed".
pub fn consecutive_pairs(items: &[u32]) -> Vec<(u32, u32)> {
    items
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect()
}

/// Concatenate single digits positionally into one integer: `[3,0,7] -> 307`.
///
/// Goes through the string form and a fallible parse rather than place-value
/// arithmetic; a non-digit entry (or an empty input) yields `None`.
pub fn join_digits(items: &[u32]) -> Option<u32> {
    if items.is_empty() || items.iter().any(|d| *d > 9) {
        return None;
    }
    let joined: String = items.iter().map(|d| d.to_string()).collect();
    joined.parse().ok()
}
