use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("no items specified")]
    NoItems,
    #[error("no knapsack specified")]
    NoSacks,
    #[error("item {item}: weight is not a positive integer")]
    ZeroWeight { item: usize },
    #[error("sack {sack}: capacity is not a positive integer")]
    ZeroCapacity { sack: usize },
    #[error("item {item}: value is not positive: {value}")]
    NonPositiveValue { item: usize, value: String },
    #[error("item {item}: weight {weight} cannot be represented as a value")]
    ValueOutOfRange { item: usize, weight: String },
    #[error("invalid track: {0}")]
    InvalidTrack(String),
    #[error("solution has {actual} sacks, expected {expected}")]
    SackCount { expected: usize, actual: usize },
    #[error("item ({item}) is out of bounds")]
    ItemIndex { item: usize },
    #[error("sack {sack}: total weight ({weight}) exceeded capacity ({capacity})")]
    Overweight {
        sack: usize,
        weight: String,
        capacity: String,
    },
    #[error("item {item}: placed {count} times but only {bound} available")]
    CountExceeded {
        item: usize,
        count: String,
        bound: String,
    },
    #[error("solution claims value {claimed} but its placement is worth {actual}")]
    ValueMismatch { claimed: String, actual: String },
    #[error("the items that fit are worth more than the value type can hold")]
    ValueOverflow,
    #[error("arithmetic overflow while evaluating sack {sack}")]
    Overflow { sack: usize },
}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
