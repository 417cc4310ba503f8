//! Type 20: data link management message — a base station reserving up to
//! four slot ranges for future use.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const HEADER_BITS: usize = 40;
pub const RESERVATION_BITS: usize = 30;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SlotReservation {
    pub offset: u16,
    pub num_slots: u8,
    pub timeout: u8,
    pub increment: u16,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DataLinkManagement {
    pub reservations: Vec<SlotReservation>,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<DataLinkManagement> {
    let mut reservations = Vec::new();
    let mut offset = HEADER_BITS;
    while offset + RESERVATION_BITS <= bitlen && reservations.len() < 4 {
        reservations.push(SlotReservation {
            offset: ubits(buf, offset, 12)? as u16,
            num_slots: ubits(buf, offset + 12, 4)? as u8,
            timeout: ubits(buf, offset + 16, 3)? as u8,
            increment: ubits(buf, offset + 19, 11)? as u16,
        });
        offset += RESERVATION_BITS;
    }
    Ok(DataLinkManagement { reservations })
}

pub fn encode(header: &Header, msg: &DataLinkManagement, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    let mut offset = HEADER_BITS;
    for r in &msg.reservations {
        putbits(buf, offset, 12, r.offset as u64)?;
        putbits(buf, offset + 12, 4, r.num_slots as u64)?;
        putbits(buf, offset + 16, 3, r.timeout as u64)?;
        putbits(buf, offset + 19, 11, r.increment as u64)?;
        offset += RESERVATION_BITS;
    }
    Ok(offset)
}
