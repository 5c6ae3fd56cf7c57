//! Storage-layer types for counter identity.
//!
//! The store manages exactly one counter row; [`COUNTER_ID`] is its key.

/// Identifier of a counter row.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterId(pub i64);

/// The singleton counter every backend reads and writes.
pub const COUNTER_ID: CounterId = CounterId(1);

/// Value a counter row holds right after initialization.
pub const INITIAL_VALUE: i64 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singleton_is_row_one() {
        assert_eq!(COUNTER_ID.0, 1);
        assert_eq!(INITIAL_VALUE, 0);
    }
}
