//! Wire protocol for Lodestone.
//!
//! This crate defines how structured in-memory records become bytes on the
//! wire and come back:
//!
//! - **Wire primitives** ([`ByteWriter`], [`ByteReader`]) — ordered reads
//!   and writes of bytes, booleans, bounded integers, varints, strings,
//!   and UUIDs.
//! - **Packet contract** ([`Packet`], [`AnyPacket`], [`PacketRegistry`])
//!   — the trait every message kind implements, plus decode-side dispatch
//!   over stable numeric identifiers.
//! - **Concrete packets** ([`PlayerListPacket`]) — the variant-shaped
//!   roster update.
//! - **Shared types** ([`PlayerListEntry`], [`Skin`],
//!   [`CommandParameter`]) — records referenced by both the codec and the
//!   command layer.
//!
//! # Architecture
//!
//! The protocol layer sits between the transport (framing, delivery) and
//! the control layer (commands, simulation events). It never sees a
//! connection: encode fills a caller-owned buffer, decode consumes one.
//!
//! ```text
//! Transport (framed bytes) → Protocol (packets) → Control (commands, state)
//! ```

mod error;
mod packet;
mod player_list;
mod types;
mod wire;

pub use error::ProtocolError;
pub use packet::{net_ids, AnyPacket, Packet, PacketRegistry};
pub use player_list::PlayerListPacket;
pub use types::{
    arg_type, CommandParameter, PlayerListAction, PlayerListEntry, Skin,
};
pub use wire::{ByteReader, ByteWriter};
