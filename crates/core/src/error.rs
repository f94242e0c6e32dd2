use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The pending input was empty when an add was requested.
    #[error("task text cannot be empty")]
    EmptyInput,
    /// Every id above the highest one in use has been handed out.
    #[error("no task ids left to assign")]
    IdsExhausted,
}
