use thiserror::Error;

/// Why a weight table was rejected. The index points at the offending entry
/// in the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("weight table is empty")]
    EmptyTable,
    #[error("entry {index} is not a (label, weight) pair")]
    MalformedEntry { index: usize },
    #[error("entry {index} has a non-numeric weight")]
    NonNumericWeight { index: usize },
    #[error("entry {index} has weight {weight}, but weights must be > 0")]
    NonPositiveWeight { index: usize, weight: f64 },
}
