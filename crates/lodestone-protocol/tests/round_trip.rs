//! Integration tests for the packet framework: encode/decode mirror
//! property and registry dispatch over net ids.

use lodestone_protocol::{
    net_ids, AnyPacket, ByteReader, ByteWriter, Packet, PacketRegistry,
    PlayerListAction, PlayerListEntry, PlayerListPacket, ProtocolError, Skin,
};
use uuid::Uuid;

// =========================================================================
// Helpers
// =========================================================================

fn sample_entries() -> Vec<PlayerListEntry> {
    vec![
        PlayerListEntry {
            uuid: Uuid::from_u128(0xdead_beef),
            entity_unique_id: 1,
            name: "Steve".to_string(),
            skin: Skin {
                id: "geometry.humanoid".to_string(),
                data: vec![0x10, 0x20, 0x30],
                trusted: true,
            },
        },
        PlayerListEntry {
            uuid: Uuid::from_u128(0xcafe_f00d),
            entity_unique_id: -7,
            name: "Alex".to_string(),
            skin: Skin {
                id: "geometry.humanoid.slim".to_string(),
                data: vec![0xff; 64],
                trusted: false,
            },
        },
        PlayerListEntry {
            uuid: Uuid::from_u128(42),
            entity_unique_id: i64::MAX,
            name: String::new(),
            skin: Skin {
                id: String::new(),
                data: Vec::new(),
                trusted: true,
            },
        },
    ]
}

fn encode<P: Packet>(packet: &P) -> Vec<u8> {
    let mut writer = ByteWriter::new();
    packet
        .encode_payload(&mut writer)
        .expect("encode should succeed");
    writer.into_bytes().to_vec()
}

fn decode(bytes: Vec<u8>) -> Result<PlayerListPacket, ProtocolError> {
    PlayerListPacket::decode_payload(&mut ByteReader::from(bytes))
}

// =========================================================================
// Round trips
// =========================================================================

#[test]
fn test_add_round_trip_preserves_entries_in_order() {
    let packet = PlayerListPacket::Add {
        entries: sample_entries(),
    };
    let decoded = decode(encode(&packet)).expect("decode should succeed");
    assert_eq!(decoded, packet);
}

#[test]
fn test_add_round_trip_preserves_trust_flags() {
    let packet = PlayerListPacket::Add {
        entries: sample_entries(),
    };
    let PlayerListPacket::Add { entries } =
        decode(encode(&packet)).expect("decode should succeed")
    else {
        panic!("decoded the wrong variant");
    };
    let flags: Vec<bool> = entries.iter().map(|e| e.skin.trusted).collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn test_remove_round_trip() {
    let packet = PlayerListPacket::Remove {
        uuids: vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::nil()],
    };
    let decoded = decode(encode(&packet)).expect("decode should succeed");
    assert_eq!(decoded, packet);
}

#[test]
fn test_empty_updates_round_trip() {
    for packet in [
        PlayerListPacket::Add { entries: vec![] },
        PlayerListPacket::Remove { uuids: vec![] },
    ] {
        let decoded = decode(encode(&packet)).expect("decode should succeed");
        assert_eq!(decoded, packet);
        assert_eq!(decoded.entry_count(), 0);
    }
}

#[test]
fn test_remove_never_writes_trust_trailer() {
    for count in [0usize, 1, 5] {
        let packet = PlayerListPacket::Remove {
            uuids: (0..count as u128).map(Uuid::from_u128).collect(),
        };
        let bytes = encode(&packet);
        // action byte + one-byte count + bare identities, nothing after.
        assert_eq!(bytes.len(), 2 + count * 16);
    }
}

#[test]
fn test_action_discriminant_matches_variant() {
    let add = PlayerListPacket::Add { entries: vec![] };
    let remove = PlayerListPacket::Remove { uuids: vec![] };
    assert_eq!(add.action(), PlayerListAction::Add);
    assert_eq!(remove.action(), PlayerListAction::Remove);
}

// =========================================================================
// Registry dispatch
// =========================================================================

#[test]
fn test_registry_decodes_by_net_id() {
    let mut registry = PacketRegistry::new();
    registry.register::<PlayerListPacket>();

    let packet = PlayerListPacket::Add {
        entries: sample_entries(),
    };
    let mut reader = ByteReader::from(encode(&packet));
    let decoded = registry
        .decode(net_ids::PLAYER_LIST, &mut reader)
        .expect("registry decode should succeed");

    assert_eq!(decoded.net_id(), net_ids::PLAYER_LIST);
    let concrete = decoded
        .as_any()
        .downcast_ref::<PlayerListPacket>()
        .expect("should downcast to the registered kind");
    assert_eq!(*concrete, packet);
}

#[test]
fn test_registry_rejects_unknown_net_id() {
    let registry = PacketRegistry::new();
    let mut reader = ByteReader::from(vec![0x00, 0x00]);
    assert!(matches!(
        registry.decode(0x7777, &mut reader),
        Err(ProtocolError::UnknownPacketId(0x7777))
    ));
}

#[test]
#[should_panic(expected = "registered twice")]
fn test_registry_panics_on_net_id_collision() {
    let mut registry = PacketRegistry::new();
    registry.register::<PlayerListPacket>();
    registry.register::<PlayerListPacket>();
}

#[test]
fn test_registry_reports_registered_ids() {
    let mut registry = PacketRegistry::new();
    assert!(!registry.is_registered(net_ids::PLAYER_LIST));
    registry.register::<PlayerListPacket>();
    assert!(registry.is_registered(net_ids::PLAYER_LIST));
}
