//! The contract every wire message kind satisfies, and the decode-side
//! registry that maps packet identifiers to decoders.
//!
//! A packet owns only its payload. The outer frame — length prefix,
//! batching, and writing the identifier itself — belongs to the transport.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::wire::{ByteReader, ByteWriter};
use crate::ProtocolError;

/// Stable packet identifiers. One per packet kind, never reused.
pub mod net_ids {
    pub const PLAYER_LIST: u32 = 0x3f;
}

/// A wire message kind.
///
/// `encode_payload` must write, using only the shared wire primitives,
/// exactly the bytes `decode_payload` reads on the receiving peer, in the
/// same order. The framework does not enforce that mirror property — each
/// kind carries its own round-trip test.
pub trait Packet: Sized {
    /// Stable identifier for this kind, shared by all its instances.
    const NET_ID: u32;

    /// Writes the kind-specific body.
    fn encode_payload(&self, writer: &mut ByteWriter) -> Result<(), ProtocolError>;

    /// Reads the kind-specific body. Mirror of `encode_payload`.
    fn decode_payload(reader: &mut ByteReader) -> Result<Self, ProtocolError>;
}

/// Object-safe view of a decoded packet.
///
/// [`PacketRegistry::decode`] cannot name the concrete kind at compile
/// time, so it returns this; callers downcast via [`AnyPacket::as_any`].
pub trait AnyPacket: fmt::Debug + Send {
    /// The kind's stable identifier.
    fn net_id(&self) -> u32;

    fn as_any(&self) -> &dyn Any;
}

impl<P> AnyPacket for P
where
    P: Packet + fmt::Debug + Send + 'static,
{
    fn net_id(&self) -> u32 {
        P::NET_ID
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

type DecodeFn = fn(&mut ByteReader) -> Result<Box<dyn AnyPacket>, ProtocolError>;

fn decode_erased<P>(reader: &mut ByteReader) -> Result<Box<dyn AnyPacket>, ProtocolError>
where
    P: Packet + fmt::Debug + Send + 'static,
{
    Ok(Box::new(P::decode_payload(reader)?))
}

/// Maps packet identifiers to decoders for inbound dispatch.
///
/// Populated once at startup. An identifier collision is a programming
/// error in the packet table, so `register` panics rather than returning
/// a runtime-recoverable result.
#[derive(Default)]
pub struct PacketRegistry {
    decoders: HashMap<u32, DecodeFn>,
}

impl PacketRegistry {
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registers the decoder for packet kind `P`.
    ///
    /// # Panics
    ///
    /// Panics if another kind already claimed `P::NET_ID`.
    pub fn register<P>(&mut self)
    where
        P: Packet + fmt::Debug + Send + 'static,
    {
        let previous = self.decoders.insert(P::NET_ID, decode_erased::<P>);
        assert!(
            previous.is_none(),
            "packet id {:#04x} registered twice",
            P::NET_ID
        );
        tracing::trace!(net_id = P::NET_ID, "packet decoder registered");
    }

    /// True if a decoder is registered for `net_id`.
    pub fn is_registered(&self, net_id: u32) -> bool {
        self.decoders.contains_key(&net_id)
    }

    /// Decodes the payload of the packet identified by `net_id`.
    ///
    /// The identifier comes from the transport's outer frame; the reader
    /// is positioned at the start of the payload.
    pub fn decode(
        &self,
        net_id: u32,
        reader: &mut ByteReader,
    ) -> Result<Box<dyn AnyPacket>, ProtocolError> {
        let decode = self
            .decoders
            .get(&net_id)
            .ok_or(ProtocolError::UnknownPacketId(net_id))?;
        decode(reader)
    }
}

impl fmt::Debug for PacketRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PacketRegistry")
            .field("registered", &self.decoders.len())
            .finish()
    }
}
