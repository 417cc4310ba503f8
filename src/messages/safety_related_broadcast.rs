//! Type 14: safety related broadcast message — free-text, six-bit-encoded,
//! broadcast to all stations in range.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;
use crate::sixbit;

pub const HEADER_BITS: usize = 40;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SafetyBroadcast {
    pub text: String,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<SafetyBroadcast> {
    let text_chars = bitlen.saturating_sub(HEADER_BITS) / 6;
    Ok(SafetyBroadcast {
        text: sixbit::decode(buf, HEADER_BITS, text_chars)?,
    })
}

pub fn encode(header: &Header, msg: &SafetyBroadcast, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    let char_count = msg.text.len().max(1);
    sixbit::encode(buf, HEADER_BITS, char_count, &msg.text)?;
    Ok(HEADER_BITS + char_count * 6)
}
