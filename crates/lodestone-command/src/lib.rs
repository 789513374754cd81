//! Command layer for Lodestone.
//!
//! Turns raw text input into dispatched actions:
//!
//! - **Senders** ([`CommandSender`], [`PlayerSender`], [`ConsoleSender`])
//!   — who issued the command and where feedback goes.
//! - **Commands** ([`Command`], [`CommandArg`]) — the handler contract
//!   and the typed positional arguments it receives.
//! - **Registry** ([`CommandRegistry`]) — registration, text resolution,
//!   and invocation, shared between players and the operator console.
//! - **Built-ins** ([`STANDARD_COMMANDS`], [`EXTENSION_COMMANDS`]) — the
//!   compile-time provider tables registered at startup.
//!
//! Registration happens once at startup; after that the registry is
//! read-mostly and `dispatch` runs to completion on whichever thread the
//! transport schedules it on.

mod args;
mod builtin;
mod command;
mod error;
mod format;
mod registry;
mod sender;

pub use args::CommandArg;
pub use builtin::{
    CommandProvider, PingCommand, VersionCommand, EXTENSION_COMMANDS,
    STANDARD_COMMANDS,
};
pub use command::Command;
pub use error::CommandError;
pub use format::{
    strip_format_codes, AQUA, FORMAT_CHAR, GRAY, GREEN, RED, RESET, YELLOW,
};
pub use registry::{
    CommandRegistry, CommandView, DispatchOutcome, DuplicatePolicy,
    RegistryConfig, COMMAND_MARKER, NOT_FOUND_FEEDBACK,
};
pub use sender::{CommandSender, ConsoleSender, PlayerSender};

// The parameter type space is shared with the wire protocol; re-export it
// so command authors don't need a direct protocol dependency.
pub use lodestone_protocol::{arg_type, CommandParameter};
