/// Error types for loading the wide source table
use thiserror::Error;

/// Fatal load-time errors. Any of these means the dataset is unusable.
#[derive(Error, Debug)]
pub enum LoadError {
    /// A period column header is not a base-10 integer
    #[error("Malformed period label: {label:?}")]
    MalformedPeriod { label: String },

    /// A cell is neither a number nor a missing marker
    #[error("Malformed value {raw:?} for {entity} in period {label}")]
    MalformedValue {
        entity: String,
        label: String,
        raw: String,
    },

    /// Two period columns parse to the same period
    #[error("Period {period} declared twice (column {label:?})")]
    DuplicatePeriod { period: i32, label: String },

    /// A data row has a blank entity key
    #[error("Empty entity key in data row {row}")]
    EmptyEntity { row: usize },

    /// The header has an entity column but nothing after it
    #[error("Source table declares no period columns")]
    NoPeriodColumns,

    /// Failed to parse CSV
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to open or decompress the source file
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
