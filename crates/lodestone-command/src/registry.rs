//! Command registry and dispatcher.
//!
//! The registry owns every live command, keyed by `(namespace, name)`.
//! Registration happens once, synchronously, before any dispatch; after
//! that the registry is read-only, so `dispatch` takes `&self` and the
//! surrounding transport may call it from any thread.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use lodestone_protocol::CommandParameter;

use crate::args::CommandArg;
use crate::builtin;
use crate::command::{ClosureCommand, Command};
use crate::error::CommandError;
use crate::sender::CommandSender;

/// The character that marks text input as a command.
pub const COMMAND_MARKER: char = '/';

/// Feedback line for an unresolvable command name.
pub const NOT_FOUND_FEEDBACK: &str = "§cCannot find the desired command!";

/// What became of one dispatch call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A command matched and its handler ran to completion.
    Executed,
    /// No command matched; the sender was told via its feedback channel.
    NotFound,
}

/// How the registry treats a second registration of the same identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Reject the newcomer; the first registration stays live.
    #[default]
    Reject,
    /// Replace the existing command with the newcomer.
    Replace,
}

/// Registry construction options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryConfig {
    pub duplicates: DuplicatePolicy,
}

/// Identity a command is registered and resolved under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CommandId {
    namespace: String,
    name: String,
}

impl CommandId {
    fn new(namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

struct Registered {
    command: Box<dyn Command>,
    /// Authored parameters plus the implicit trailing `args` slot.
    parameters: Vec<CommandParameter>,
}

/// Read-only view of one registered command, for help listings and
/// completion.
#[derive(Debug, Clone, Copy)]
pub struct CommandView<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub parameters: &'a [CommandParameter],
}

/// Owns the set of live commands; resolves text input and invokes the
/// matching handler.
#[derive(Default)]
pub struct CommandRegistry {
    commands: BTreeMap<CommandId, Registered>,
    config: RegistryConfig,
}

impl CommandRegistry {
    /// Creates an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            commands: BTreeMap::new(),
            config,
        }
    }

    /// Creates a registry pre-populated from the built-in provider
    /// tables ([`builtin::STANDARD_COMMANDS`], then
    /// [`builtin::EXTENSION_COMMANDS`]).
    ///
    /// A duplicate identity inside the tables is a configuration fault
    /// and surfaces here, at startup, rather than silently shadowing a
    /// command at dispatch time.
    pub fn with_builtins(config: RegistryConfig) -> Result<Self, CommandError> {
        let mut registry = Self::with_config(config);
        let providers = builtin::STANDARD_COMMANDS
            .iter()
            .chain(builtin::EXTENSION_COMMANDS.iter());
        for provider in providers {
            registry.register_command(provider())?;
        }
        tracing::debug!(
            count = registry.command_count(),
            "registered built-in commands"
        );
        Ok(registry)
    }

    /// Registers a command built around a bare handler closure, in the
    /// default namespace.
    pub fn register<F>(
        &mut self,
        name: &str,
        description: &str,
        handler: F,
    ) -> Result<(), CommandError>
    where
        F: Fn(&dyn CommandSender, &[CommandArg], &str) -> Result<(), CommandError>
            + Send
            + Sync
            + 'static,
    {
        self.register_command(Box::new(ClosureCommand::new(
            name,
            description,
            handler,
        )))
    }

    /// Registers a pre-built polymorphic command.
    ///
    /// Appends the implicit trailing `args` parameter — every command
    /// accepts a raw optional argument list on top of whatever it
    /// authored itself.
    pub fn register_command(
        &mut self,
        command: Box<dyn Command>,
    ) -> Result<(), CommandError> {
        let id = CommandId::new(command.namespace(), command.name());
        let mut parameters = command.parameters();
        parameters.push(CommandParameter::trailing_args());
        let registered = Registered {
            command,
            parameters,
        };

        match self.commands.entry(id) {
            Entry::Occupied(mut occupied) => match self.config.duplicates {
                DuplicatePolicy::Reject => {
                    let id = occupied.key();
                    return Err(CommandError::DuplicateCommand {
                        namespace: id.namespace.clone(),
                        name: id.name.clone(),
                    });
                }
                DuplicatePolicy::Replace => {
                    tracing::debug!(
                        namespace = %occupied.key().namespace,
                        name = %occupied.key().name,
                        "replacing existing command registration"
                    );
                    occupied.insert(registered);
                }
            },
            Entry::Vacant(vacant) => {
                tracing::trace!(
                    namespace = %vacant.key().namespace,
                    name = %vacant.key().name,
                    "command registered"
                );
                vacant.insert(registered);
            }
        }
        Ok(())
    }

    /// Resolves raw text input to a command and invokes it against
    /// `sender`.
    ///
    /// Input without the leading `/` marker draws a warning but is still
    /// dispatched. An unresolvable name is reported through the sender's
    /// feedback channel and returns [`DispatchOutcome::NotFound`] without
    /// running any handler. A handler error propagates to the caller
    /// untouched; isolation policy for failed commands belongs to the
    /// invoking layer.
    pub fn dispatch(
        &self,
        sender: &dyn CommandSender,
        input: &str,
    ) -> Result<DispatchOutcome, CommandError> {
        if !input.starts_with(COMMAND_MARKER) {
            tracing::warn!(input, "received command input without the marker");
        }
        tracing::info!(
            sender = sender.name(),
            input,
            "issued server command"
        );

        let mut tokens = input.split(' ');
        let head = tokens.next().unwrap_or_default();
        let head = head.strip_prefix(COMMAND_MARKER).unwrap_or(head);
        let (namespace, name) = match head.split_once(':') {
            Some((namespace, name)) => (namespace, name),
            None => ("", head),
        };

        // Everything after the head token, by position. An argument that
        // happens to equal the command name survives untouched.
        let args: Vec<CommandArg> = tokens.map(CommandArg::coerce).collect();

        let Some(registered) = self.resolve(namespace, name) else {
            sender.deliver_feedback(NOT_FOUND_FEEDBACK);
            return Ok(DispatchOutcome::NotFound);
        };
        registered.command.execute(sender, &args, name)?;
        Ok(DispatchOutcome::Executed)
    }

    /// An explicit namespace resolves exactly. A bare name tries the
    /// default namespace first, then falls back to the first
    /// namespace-ordered command carrying that name.
    fn resolve(&self, namespace: &str, name: &str) -> Option<&Registered> {
        if !namespace.is_empty() {
            return self.commands.get(&CommandId::new(namespace, name));
        }
        if let Some(found) = self.commands.get(&CommandId::new("", name)) {
            return Some(found);
        }
        self.commands
            .iter()
            .find(|(id, _)| id.name == name)
            .map(|(_, registered)| registered)
    }

    /// Read-only view of the live registry, in `(namespace, name)` order.
    pub fn commands(&self) -> impl Iterator<Item = CommandView<'_>> {
        self.commands.iter().map(|(id, registered)| CommandView {
            namespace: &id.namespace,
            name: &id.name,
            description: registered.command.description(),
            parameters: &registered.parameters,
        })
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
