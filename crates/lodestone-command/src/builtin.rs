//! Built-in commands and their provider tables.
//!
//! The tables replace runtime discovery: the set of shipped commands is
//! known at compile time and registered in table order by
//! [`crate::CommandRegistry::with_builtins`]. Anything that would mutate
//! the simulation lives with the simulation; the commands here are pure
//! feedback.

use crate::args::CommandArg;
use crate::command::Command;
use crate::error::CommandError;
use crate::sender::CommandSender;

/// Constructs one built-in command instance.
pub type CommandProvider = fn() -> Box<dyn Command>;

/// Commands every server ships, in the default namespace.
pub const STANDARD_COMMANDS: &[CommandProvider] =
    &[|| Box::new(VersionCommand)];

/// Server-software-specific commands, under the `lodestone` namespace.
pub const EXTENSION_COMMANDS: &[CommandProvider] =
    &[|| Box::new(PingCommand)];

/// Reports the server software and version.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn description(&self) -> &str {
        "Shows the server software and version"
    }

    fn execute(
        &self,
        sender: &dyn CommandSender,
        _args: &[CommandArg],
        _label: &str,
    ) -> Result<(), CommandError> {
        sender.deliver_feedback(&format!(
            "§bThis server runs Lodestone v{}§r",
            env!("CARGO_PKG_VERSION")
        ));
        Ok(())
    }
}

/// Replies with a pong. Useful for checking the dispatch path end to end.
pub struct PingCommand;

impl Command for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn namespace(&self) -> &str {
        "lodestone"
    }

    fn description(&self) -> &str {
        "Replies with a pong"
    }

    fn execute(
        &self,
        sender: &dyn CommandSender,
        _args: &[CommandArg],
        _label: &str,
    ) -> Result<(), CommandError> {
        sender.deliver_feedback("§aPong!§r");
        Ok(())
    }
}
