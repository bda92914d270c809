//! Classification errors

/// Classification error
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// A class specification recursed past the resolution depth limit,
    /// e.g. a function spec returning itself.
    #[error("invalid class specification for selector `{selector}`")]
    InvalidClassSpec { selector: String },
}
