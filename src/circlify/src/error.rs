pub type Result<T> = std::result::Result<T, CirclifyError>;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CirclifyError {
    #[error("nothing to circlify: no labels given")]
    EmptyInput,

    #[error("weight of {label} must be positive and finite, got {weight}")]
    InvalidWeight { label: String, weight: f64 },
}
