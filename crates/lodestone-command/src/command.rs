//! The command contract.

use lodestone_protocol::CommandParameter;

use crate::args::CommandArg;
use crate::error::CommandError;
use crate::sender::CommandSender;

/// A named, namespaced unit of server behavior invokable from text input.
///
/// Implementations are registered once at startup and shared across every
/// dispatch, so they must be `Send + Sync` and keep no per-invocation
/// state.
pub trait Command: Send + Sync {
    /// Lowercase command token, unique within its namespace.
    fn name(&self) -> &str;

    /// Namespace the command lives in; empty means the default namespace.
    fn namespace(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        ""
    }

    /// Parameters the command authors itself. The registry appends the
    /// implicit trailing `args` parameter on top of these.
    fn parameters(&self) -> Vec<CommandParameter> {
        Vec::new()
    }

    /// Runs the command.
    ///
    /// `label` is the bare name the sender actually typed (marker and
    /// namespace already removed). Errors propagate through `dispatch`
    /// to the invoking layer untouched.
    fn execute(
        &self,
        sender: &dyn CommandSender,
        args: &[CommandArg],
        label: &str,
    ) -> Result<(), CommandError>;
}

type HandlerFn =
    dyn Fn(&dyn CommandSender, &[CommandArg], &str) -> Result<(), CommandError>
        + Send
        + Sync;

/// Command built from a bare closure via `CommandRegistry::register`.
pub(crate) struct ClosureCommand {
    name: String,
    description: String,
    handler: Box<HandlerFn>,
}

impl ClosureCommand {
    pub(crate) fn new<F>(name: &str, description: &str, handler: F) -> Self
    where
        F: Fn(&dyn CommandSender, &[CommandArg], &str) -> Result<(), CommandError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            handler: Box::new(handler),
        }
    }
}

impl Command for ClosureCommand {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn execute(
        &self,
        sender: &dyn CommandSender,
        args: &[CommandArg],
        label: &str,
    ) -> Result<(), CommandError> {
        (self.handler)(sender, args, label)
    }
}
