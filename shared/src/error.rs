use thiserror::Error;

/// Rejected [`Config`](crate::Config) values.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("particle capacity must be at least 1")]
    ZeroCapacity,

    #[error("palette must hold at least one colour")]
    EmptyPalette,

    #[error("frame interval must be positive, got {0}")]
    FrameInterval(f64),

    #[error("initial size {initial} is below the size floor {floor}")]
    SizeBelowFloor { initial: f64, floor: f64 },

    #[error("{0} must not be negative, got {1}")]
    Negative(&'static str, f64),

    #[error("table of contents offset must be finite, got {0}")]
    TocOffset(f64),
}
