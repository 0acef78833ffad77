use thiserror::Error;
use transect::{TransectError, C};

#[derive(Error, Debug)]
pub enum ReliefError {
    #[error("missing required parameters")]
    Builder,

    #[error("{name}: irregular sample spacing (max deviation {max_deviation})")]
    IrregularSpacing { name: String, max_deviation: C },

    #[error("{name}: fewer than 2 distinct distance samples")]
    DegenerateProfile { name: String },

    #[error("aggregation over an empty profile set")]
    EmptyProfileSet,

    #[error("{0}")]
    Transect(#[from] TransectError),
}

/// A pipeline failure attributed to one profile, reported instead of
/// aborting when the run is configured to keep going.
#[derive(Debug)]
pub struct Failure {
    /// Name of the profile the error is attributed to.
    pub name: String,

    pub error: ReliefError,
}
