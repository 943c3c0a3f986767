//! Configuration errors
//!
//! These are only produced while building a catalog or a shape. Runtime
//! outcomes such as a rejected placement are plain values, not errors.

use thiserror::Error;

/// A shape definition that cannot be used as a piece.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no rows")]
    NoRows,
    #[error("shape has no filled cells")]
    NoFilledCells,
    #[error("shape cell ({row}, {col}) must be 0 or 1, got {value}")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("shape is {height}x{width}, larger than the board")]
    TooLarge { height: usize, width: usize },
}

/// A catalog configuration the engine refuses to start with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no shape templates")]
    NoTemplates,
    #[error("catalog has no weight classes")]
    NoClasses,
    #[error("weight class `{class}` has zero weight")]
    ZeroWeight { class: String },
    #[error("weight class `{class}` has no templates")]
    EmptyClass { class: String },
    #[error("weight class `{class}` references unknown template {index}")]
    UnknownTemplate { class: String, index: usize },
    #[error("history window must be at least 1")]
    ZeroHistoryWindow,
    #[error("template {index} is malformed: {source}")]
    MalformedTemplate {
        index: usize,
        #[source]
        source: ShapeError,
    },
}
