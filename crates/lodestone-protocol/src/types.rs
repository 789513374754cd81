//! Types shared across the wire surface: player list records and the
//! command parameter descriptors the dispatcher advertises to clients.

use uuid::Uuid;

use crate::ProtocolError;

// ---------------------------------------------------------------------------
// Player list records
// ---------------------------------------------------------------------------

/// A player's skin as it travels in a roster update.
///
/// `trusted` is carried out-of-band on the wire: the per-entry record holds
/// `id` and `data`, while the trust flags trail the whole entry sequence
/// (see [`crate::PlayerListPacket`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skin {
    /// Stable skin identifier.
    pub id: String,
    /// Raw skin image bytes.
    pub data: Vec<u8>,
    /// Whether the skin passed server-side validation.
    pub trusted: bool,
}

/// One row of a roster *Add* update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerListEntry {
    pub uuid: Uuid,
    /// The entity's unique id in the simulation, stable for its lifetime.
    pub entity_unique_id: i64,
    /// Display name shown in the roster.
    pub name: String,
    pub skin: Skin,
}

/// Discriminant selecting the shape of a player list record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PlayerListAction {
    Add = 0,
    Remove = 1,
}

impl TryFrom<u8> for PlayerListAction {
    type Error = ProtocolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Add),
            1 => Ok(Self::Remove),
            other => Err(ProtocolError::UnknownPlayerListAction(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Command parameter descriptors
// ---------------------------------------------------------------------------

/// Bitmask pieces of the command parameter type space.
///
/// A parameter type is a category flag combined with a base-type ordinal,
/// e.g. `FLAG_VALID | RAW_TEXT`. The values are fixed by the wider
/// protocol and must not be renumbered.
pub mod arg_type {
    /// Marks the parameter as carrying a plain (non-enum) argument type.
    pub const FLAG_VALID: u32 = 0x0010_0000;

    pub const INT: u32 = 0x01;
    pub const FLOAT: u32 = 0x03;
    pub const STRING: u32 = 0x1d;
    /// Raw trailing argument list: consumes the rest of the input.
    pub const RAW_TEXT: u32 = 0x22;
}

/// One formal argument slot of a command.
///
/// Constructed once when the command is registered and immutable after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandParameter {
    pub name: String,
    /// Category flags combined with a base-type ordinal, see [`arg_type`].
    pub param_type: u32,
    pub optional: bool,
}

impl CommandParameter {
    pub fn new(name: impl Into<String>, param_type: u32, optional: bool) -> Self {
        Self {
            name: name.into(),
            param_type,
            optional,
        }
    }

    /// The implicit catch-all parameter appended to every command at
    /// registration time: a raw, optional trailing argument list.
    pub fn trailing_args() -> Self {
        Self::new("args", arg_type::FLAG_VALID | arg_type::RAW_TEXT, true)
    }
}

// =========================================================================
// Tests
// =========================================================================
