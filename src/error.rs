use thiserror::Error;

/// Top-level error type for the muralis planning kernel.
#[derive(Debug, Error)]
pub enum MuralisError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Errors raised while planning footprints and opening placements.
///
/// Every variant is a precondition violation by the caller; none is
/// transient and none is retried.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid {dimension}: {value} (must be positive)")]
    InvalidDimension { dimension: &'static str, value: f64 },

    #[error("base level at elevation {base} is not strictly below top level at {top}")]
    InvalidLevelOrder { base: f64, top: f64 },

    #[error("degenerate wall segment: start and end points coincide")]
    DegenerateWall,
}

/// Errors surfaced by the host-document collaborators.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("level not found: {0}")]
    LevelUnresolved(String),

    #[error("catalog type not found: {type_name} in family {family}")]
    CatalogTypeUnresolved { family: String, type_name: String },

    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("model mutation outside an open transaction")]
    NoOpenTransaction,

    #[error("a transaction is already open")]
    NestedTransaction,
}

/// Convenience type alias for results using [`MuralisError`].
pub type Result<T> = std::result::Result<T, MuralisError>;
