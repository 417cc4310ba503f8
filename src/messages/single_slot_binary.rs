//! Type 25: single-slot binary message — a short opaque application payload
//! carried in a single reporting slot, optionally addressed to a specific
//! MMSI and optionally tagged with a DAC/FID application identifier.
//!
//! The payload's bit offset is `40 + 30*addressed + 16*structured`. Some
//! reference decoders instead locate it at a fixed byte offset derived from
//! `addressed`/`structured` alone, which silently assumes the header always
//! lands on a byte boundary; it doesn't when `addressed` is set, and that
//! decoder then returns the destination MMSI's low bits as payload. Always
//! computing the offset in bits avoids that.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::messages::binary_addressed::{read_blob, write_blob};
use crate::record::Header;

pub const MIN_BITS: usize = 40;
pub const MAX_BITS: usize = 168;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SingleSlotBinary {
    pub dest_mmsi: Option<u32>,
    pub app_id: Option<u16>,
    /// The application payload, packed MSB-first.
    pub data: Vec<u8>,
    /// Exact bit length of `data` (may not be a multiple of 8).
    pub data_bits: usize,
}

fn payload_offset(addressed: bool, structured: bool) -> usize {
    40 + 30 * addressed as usize + 16 * structured as usize
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<SingleSlotBinary> {
    let addressed = ubits(buf, 38, 1)? != 0;
    let structured = ubits(buf, 39, 1)? != 0;
    let mut offset = 40;
    let dest_mmsi = if addressed {
        let mmsi = ubits(buf, offset, 30)? as u32;
        offset += 30;
        Some(mmsi)
    } else {
        None
    };
    let app_id = if structured {
        let id = ubits(buf, offset, 16)? as u16;
        offset += 16;
        Some(id)
    } else {
        None
    };
    debug_assert_eq!(offset, payload_offset(addressed, structured));
    let data_bits = bitlen.saturating_sub(offset);
    let data = read_blob(buf, offset, data_bits)?;
    Ok(SingleSlotBinary {
        dest_mmsi,
        app_id,
        data,
        data_bits,
    })
}

pub fn encode(header: &Header, msg: &SingleSlotBinary, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 1, msg.dest_mmsi.is_some() as u64)?;
    putbits(buf, 39, 1, msg.app_id.is_some() as u64)?;
    let mut offset = 40;
    if let Some(mmsi) = msg.dest_mmsi {
        putbits(buf, offset, 30, mmsi as u64)?;
        offset += 30;
    }
    if let Some(id) = msg.app_id {
        putbits(buf, offset, 16, id as u64)?;
        offset += 16;
    }
    write_blob(buf, offset, &msg.data, msg.data_bits)?;
    Ok(offset + msg.data_bits)
}
