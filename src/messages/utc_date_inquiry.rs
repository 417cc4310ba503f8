//! Type 10: UTC and date inquiry — requests that the addressed station
//! (typically a base station) send a type 11 response.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 72;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UtcDateInquiry {
    pub dest_mmsi: u32,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<UtcDateInquiry> {
    Ok(UtcDateInquiry {
        dest_mmsi: ubits(buf, 40, 30)? as u32,
    })
}

pub fn encode(header: &Header, msg: &UtcDateInquiry, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 40, 30, msg.dest_mmsi as u64)?;
    Ok(BITS)
}
