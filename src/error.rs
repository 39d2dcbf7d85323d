use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("feature count {features} does not match bit count {bits}")]
    LengthMismatch { features: usize, bits: usize },
    #[error("measured bit at index {index} is {value}, expected 0 or 1")]
    BitOutOfDomain { index: usize, value: u8 },
    #[error("cannot split an empty dataset")]
    EmptySplit,
}
