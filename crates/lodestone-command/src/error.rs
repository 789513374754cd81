//! Error types for the command layer.

/// Errors surfaced by command registration and execution.
///
/// Note what is *not* here: an unresolvable command name is not an error.
/// Dispatch reports it through the sender's feedback channel and returns
/// a not-found outcome, because a player typo is normal traffic, not a
/// fault.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A command with this identity is already registered and the
    /// registry is configured to reject duplicates.
    #[error("command '{namespace}:{name}' is already registered")]
    DuplicateCommand { namespace: String, name: String },

    /// A handler rejected the arguments it was invoked with.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// A handler failed while executing.
    #[error("command failed: {0}")]
    Execution(String),
}
