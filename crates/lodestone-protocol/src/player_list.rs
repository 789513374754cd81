//! Roster updates: the player list packet.
//!
//! A single packet batches either additions or removals, never a mix —
//! the action discriminant selects the per-entry record shape. Modeling
//! the packet as an enum makes an invalid discriminant unrepresentable on
//! the encode side; decode rejects unknown action bytes with a typed
//! error.

use uuid::Uuid;

use crate::packet::{net_ids, Packet};
use crate::types::{PlayerListAction, PlayerListEntry, Skin};
use crate::wire::{ByteReader, ByteWriter};
use crate::ProtocolError;

/// Smallest possible *Add* entry on the wire: uuid, one-byte entity id,
/// three empty length prefixes, plus its trailing trust flag.
const MIN_ADD_ENTRY_BYTES: usize = 21;
/// A *Remove* entry is a bare uuid.
const MIN_REMOVE_ENTRY_BYTES: usize = 16;

/// Batch update to the connected-player roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerListPacket {
    /// Adds rows: full identity plus skin payload per entry.
    Add { entries: Vec<PlayerListEntry> },
    /// Removes rows: only the identity needed to drop each one.
    Remove { uuids: Vec<Uuid> },
}

impl PlayerListPacket {
    /// The discriminant written as the first payload byte.
    pub fn action(&self) -> PlayerListAction {
        match self {
            Self::Add { .. } => PlayerListAction::Add,
            Self::Remove { .. } => PlayerListAction::Remove,
        }
    }

    /// Number of roster rows in this update.
    pub fn entry_count(&self) -> usize {
        match self {
            Self::Add { entries } => entries.len(),
            Self::Remove { uuids } => uuids.len(),
        }
    }
}

impl Packet for PlayerListPacket {
    const NET_ID: u32 = net_ids::PLAYER_LIST;

    fn encode_payload(&self, writer: &mut ByteWriter) -> Result<(), ProtocolError> {
        writer.write_byte(self.action() as u8);
        match self {
            Self::Add { entries } => {
                writer.write_unsigned_var_int(entries.len() as u32);
                for entry in entries {
                    writer.write_uuid(&entry.uuid);
                    writer.write_var_long(entry.entity_unique_id);
                    writer.write_string(&entry.name);
                    writer.write_string(&entry.skin.id);
                    writer.write_byte_slice(&entry.skin.data);
                }
                // Protocol quirk: trust flags are out-of-band from the
                // per-entry records. One trailing bool per entry, same
                // order as the records above.
                for entry in entries {
                    writer.write_bool(entry.skin.trusted);
                }
            }
            Self::Remove { uuids } => {
                writer.write_unsigned_var_int(uuids.len() as u32);
                for uuid in uuids {
                    writer.write_uuid(uuid);
                }
            }
        }
        Ok(())
    }

    fn decode_payload(reader: &mut ByteReader) -> Result<Self, ProtocolError> {
        let action = PlayerListAction::try_from(reader.read_byte()?)?;
        match action {
            PlayerListAction::Add => {
                let count = reader.read_length_prefix(MIN_ADD_ENTRY_BYTES)?;
                let mut entries = Vec::with_capacity(count);
                for _ in 0..count {
                    let uuid = reader.read_uuid()?;
                    let entity_unique_id = reader.read_var_long()?;
                    let name = reader.read_string()?;
                    let skin_id = reader.read_string()?;
                    let skin_data = reader.read_byte_slice()?;
                    entries.push(PlayerListEntry {
                        uuid,
                        entity_unique_id,
                        name,
                        skin: Skin {
                            id: skin_id,
                            data: skin_data,
                            // Filled in from the trailing flag pass below.
                            trusted: false,
                        },
                    });
                }
                for entry in &mut entries {
                    entry.skin.trusted = reader.read_bool()?;
                }
                Ok(Self::Add { entries })
            }
            PlayerListAction::Remove => {
                let count = reader.read_length_prefix(MIN_REMOVE_ENTRY_BYTES)?;
                let mut uuids = Vec::with_capacity(count);
                for _ in 0..count {
                    uuids.push(reader.read_uuid()?);
                }
                Ok(Self::Remove { uuids })
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(seed: u128, name: &str, trusted: bool) -> PlayerListEntry {
        PlayerListEntry {
            uuid: Uuid::from_u128(seed),
            entity_unique_id: seed as i64,
            name: name.to_string(),
            skin: Skin {
                id: format!("skin-{name}"),
                data: vec![seed as u8; 4],
                trusted,
            },
        }
    }

    fn encode(packet: &PlayerListPacket) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        packet.encode_payload(&mut writer).unwrap();
        writer.into_bytes().to_vec()
    }

    #[test]
    fn test_add_starts_with_action_and_count() {
        let packet = PlayerListPacket::Add {
            entries: vec![entry(1, "Steve", true)],
        };
        let bytes = encode(&packet);
        assert_eq!(bytes[0], PlayerListAction::Add as u8);
        assert_eq!(bytes[1], 1);
    }

    #[test]
    fn test_zero_entries_still_writes_action_and_count() {
        let add = PlayerListPacket::Add { entries: vec![] };
        assert_eq!(encode(&add), vec![0x00, 0x00]);

        let remove = PlayerListPacket::Remove { uuids: vec![] };
        assert_eq!(encode(&remove), vec![0x01, 0x00]);
    }

    #[test]
    fn test_remove_writes_exactly_identity_rows() {
        // No trust-flag trailer: action + count + 16 bytes per uuid.
        let packet = PlayerListPacket::Remove {
            uuids: vec![Uuid::from_u128(1), Uuid::from_u128(2)],
        };
        assert_eq!(encode(&packet).len(), 1 + 1 + 2 * 16);
    }

    #[test]
    fn test_add_trust_flags_trail_the_entry_records() {
        let packet = PlayerListPacket::Add {
            entries: vec![
                entry(1, "a", true),
                entry(2, "b", false),
                entry(3, "c", true),
            ],
        };
        let bytes = encode(&packet);
        assert_eq!(&bytes[bytes.len() - 3..], &[1, 0, 1]);
    }

    #[test]
    fn test_unknown_action_byte_is_rejected() {
        let mut reader = ByteReader::from(vec![0x09, 0x00]);
        assert!(matches!(
            PlayerListPacket::decode_payload(&mut reader),
            Err(ProtocolError::UnknownPlayerListAction(0x09))
        ));
    }

    #[test]
    fn test_hostile_entry_count_is_rejected() {
        // Claims ~268M add entries with no bytes behind the count.
        let mut writer = ByteWriter::new();
        writer.write_byte(PlayerListAction::Add as u8);
        writer.write_unsigned_var_int(0x0fff_ffff);
        let mut reader = ByteReader::new(writer.into_bytes());
        assert!(matches!(
            PlayerListPacket::decode_payload(&mut reader),
            Err(ProtocolError::LengthOverrun { .. })
        ));
    }

    #[test]
    fn test_truncated_trailer_is_eof() {
        let packet = PlayerListPacket::Add {
            entries: vec![entry(1, "a", true), entry(2, "b", true)],
        };
        let mut bytes = encode(&packet);
        bytes.pop();
        let mut reader = ByteReader::from(bytes);
        assert!(matches!(
            PlayerListPacket::decode_payload(&mut reader),
            Err(ProtocolError::UnexpectedEof { .. })
        ));
    }
}
