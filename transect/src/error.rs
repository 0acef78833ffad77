use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransectError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{name}: not valid UTF-8")]
    NotText { name: String },

    #[error("{name}: line {line}: expected 2 tab-separated fields, found {found}")]
    ColumnCount {
        name: String,
        line: usize,
        found: usize,
    },

    #[error("{name}: line {line}: unparsable number {value:?}")]
    BadNumber {
        name: String,
        line: usize,
        value: String,
    },

    #[error("{name}: fewer than 2 data rows")]
    TooFewRows { name: String },

    #[error("{name}: distance not strictly increasing at row {row}")]
    NonMonotonicDistance { name: String, row: usize },
}
