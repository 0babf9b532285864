use thiserror::Error;

/// Failures of a sweep. Both variants point at a bug in the driver or in the beach line
/// bookkeeping, not at bad input: the sweep has no recoverable failure modes.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VoronoiError {
    /// A pop was attempted on a schedule holding no valid event.
    #[error("pop from an empty event queue")]
    EmptyQueue,
    /// The geometry or the beach line reached a state the algorithm never produces.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}
