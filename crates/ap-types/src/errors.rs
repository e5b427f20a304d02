use thiserror::Error;

/// Main error type for the Aperture system
#[derive(Error, Debug)]
pub enum ApError {
    #[error("Variable error: {0}")]
    Variable(#[from] VariableError),

    #[error("Problem error: {0}")]
    Problem(#[from] ProblemError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Variable definition errors
#[derive(Error, Debug)]
pub enum VariableError {
    #[error("Variable {name}: lower limit {lower} exceeds upper limit {upper}")]
    InvertedLimits {
        name: String,
        lower: f64,
        upper: f64,
    },

    #[error("Variable {name}: initial value {initial} lies outside [{lower}, {upper}]")]
    InitialOutOfBounds {
        name: String,
        initial: f64,
        lower: f64,
        upper: f64,
    },
}

/// Problem definition errors
#[derive(Error, Debug)]
pub enum ProblemError {
    #[error("Problem defines no variables")]
    NoVariables,

    #[error("Duplicate variable name: {name}")]
    DuplicateVariable { name: String },
}

/// Result type alias for Aperture operations
pub type ApResult<T> = Result<T, ApError>;
