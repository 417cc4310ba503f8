//! Custom error types used by this crate

use std::fmt;

/// Custom `Result` to prepopulate `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// The shape a message type's total bit length was expected to take.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LengthConstraint {
    Exact(usize),
    Range(usize, usize),
}

impl fmt::Display for LengthConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{} bits", n),
            Self::Range(lo, hi) => write!(f, "{}..={} bits", lo, hi),
        }
    }
}

/// A general error in decoding or encoding an AIS message
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The sentence does not match the AIVDM/AIVDO grammar
    BadFraming { msg: String },
    /// The computed checksum disagreed with the trailing hex digits
    BadChecksum { expected: u8, found: u8 },
    /// A payload character fell outside the armored character range
    BadArmor { byte: u8 },
    /// The pad digit was out of range, or exceeded the carried bit count
    BadPad { pad: u8 },
    /// `fragCount`, `seqId`, or `fragNum` disagreed with the context in progress
    ReassemblyMismatch { msg: String },
    /// The payload's total bit length violated the message type's constraint
    LengthOutOfRange {
        msg_type: u8,
        got: usize,
        expected: LengthConstraint,
    },
    /// The message type is outside the range this codec understands
    UnsupportedType { msg_type: u8 },
    /// A bit-buffer access exceeded the buffer's capacity
    OutOfRange,
    /// An encoder field value did not fit in its allotted bit width
    ValueOutOfRange { field: &'static str },
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadFraming { msg } => write!(f, "malformed AIVDM/AIVDO sentence: {}", msg),
            Self::BadChecksum { expected, found } => write!(
                f,
                "checksum mismatch: expected 0x{:02X}, computed 0x{:02X}",
                expected, found
            ),
            Self::BadArmor { byte } => write!(f, "armored payload byte out of range: {}", byte),
            Self::BadPad { pad } => write!(f, "invalid pad count: {}", pad),
            Self::ReassemblyMismatch { msg } => write!(f, "fragment out of sequence: {}", msg),
            Self::LengthOutOfRange {
                msg_type,
                got,
                expected,
            } => write!(
                f,
                "type {} payload is {} bits, expected {}",
                msg_type, got, expected
            ),
            Self::UnsupportedType { msg_type } => {
                write!(f, "unsupported message type: {}", msg_type)
            }
            Self::OutOfRange => write!(f, "bit offset exceeds buffer capacity"),
            Self::ValueOutOfRange { field } => write!(f, "value out of range for field: {}", field),
        }
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Self::BadFraming { msg }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Self::BadFraming {
            msg: msg.to_string(),
        }
    }
}
