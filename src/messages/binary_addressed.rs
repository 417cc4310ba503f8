//! Type 6: binary addressed message — an opaque application payload routed
//! to a single destination MMSI, tagged with a DAC/FID pair that identifies
//! the payload's schema to receivers that understand it. This crate does
//! not interpret DAC/FID-specific payloads; it hands back the raw bits.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const HEADER_BITS: usize = 88;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressedBinary {
    pub seqno: u8,
    pub dest_mmsi: u32,
    pub retransmit: bool,
    pub dac: u16,
    pub fid: u8,
    /// The application payload, packed MSB-first starting at bit 88.
    pub data: Vec<u8>,
    /// Exact bit length of `data` (may not be a multiple of 8).
    pub data_bits: usize,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<AddressedBinary> {
    let data_bits = bitlen.saturating_sub(HEADER_BITS);
    let data = read_blob(buf, HEADER_BITS, data_bits)?;
    Ok(AddressedBinary {
        seqno: ubits(buf, 38, 2)? as u8,
        dest_mmsi: ubits(buf, 40, 30)? as u32,
        retransmit: ubits(buf, 70, 1)? != 0,
        dac: ubits(buf, 72, 10)? as u16,
        fid: ubits(buf, 82, 6)? as u8,
        data,
        data_bits,
    })
}

pub fn encode(header: &Header, msg: &AddressedBinary, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 2, msg.seqno as u64)?;
    putbits(buf, 40, 30, msg.dest_mmsi as u64)?;
    putbits(buf, 70, 1, msg.retransmit as u64)?;
    putbits(buf, 72, 10, msg.dac as u64)?;
    putbits(buf, 82, 6, msg.fid as u64)?;
    write_blob(buf, HEADER_BITS, &msg.data, msg.data_bits)?;
    Ok(HEADER_BITS + msg.data_bits)
}

/// Reads `bit_count` bits starting at `start` into a packed, MSB-first byte
/// vector, used for the opaque binary payloads carried by several message
/// types (6, 8, 17, 25, 26).
pub(crate) fn read_blob(buf: &[u8], start: usize, bit_count: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity((bit_count + 7) / 8);
    let mut remaining = bit_count;
    let mut offset = start;
    while remaining > 0 {
        let take = remaining.min(8);
        let chunk = ubits(buf, offset, take as u32)? as u8;
        out.push(chunk << (8 - take));
        offset += take;
        remaining -= take;
    }
    Ok(out)
}

/// Inverse of [`read_blob`]: writes `bit_count` bits from a packed,
/// MSB-first byte vector starting at `start`.
pub(crate) fn write_blob(buf: &mut [u8], start: usize, data: &[u8], bit_count: usize) -> Result<()> {
    let mut remaining = bit_count;
    let mut offset = start;
    let mut byte_idx = 0;
    while remaining > 0 {
        let take = remaining.min(8);
        let byte = data.get(byte_idx).copied().unwrap_or(0);
        let value = byte >> (8 - take);
        putbits(buf, offset, take as u32, value as u64)?;
        offset += take;
        remaining -= take;
        byte_idx += 1;
    }
    Ok(())
}
