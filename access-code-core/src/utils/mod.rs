pub mod digits;

pub use digits::{consecutive_pairs, digit_sum, digits, join_digits};
