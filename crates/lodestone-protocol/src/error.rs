//! Error types for the protocol layer.

/// Errors that can occur while encoding or decoding wire data.
///
/// Decode errors are the common case: every read on [`crate::ByteReader`]
/// is fallible because inbound bytes come from the network and may be
/// truncated, corrupted, or hostile.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The buffer ended before a read could complete.
    #[error("unexpected end of buffer: needed {needed} more byte(s)")]
    UnexpectedEof { needed: usize },

    /// A variable-length integer ran past its maximum encoded width.
    #[error("variable-length integer exceeds {width} bits")]
    VarIntTooLong { width: u32 },

    /// A length prefix claimed more bytes than the buffer holds.
    ///
    /// Checked before allocating, so a hostile prefix cannot force an
    /// allocation proportional to the declared length.
    #[error("declared length {declared} exceeds the {remaining} byte(s) remaining")]
    LengthOverrun { declared: usize, remaining: usize },

    /// A string field did not contain valid UTF-8.
    #[error("invalid UTF-8 in string field: {0}")]
    InvalidString(#[from] std::string::FromUtf8Error),

    /// A player list record carried an action byte outside the known set.
    #[error("unknown player list action {0:#04x}")]
    UnknownPlayerListAction(u8),

    /// No decoder is registered for this packet identifier.
    #[error("unknown packet id {0:#04x}")]
    UnknownPacketId(u32),
}
