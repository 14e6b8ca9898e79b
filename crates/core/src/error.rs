use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapGenError {
    #[error("map dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("random fill percent must be within 0..=100, got {0}")]
    InvalidFillPercent(u32),
    #[error("invalid generation config: {0}")]
    Config(String),
}
