//! Type 18: standard class B position report — the simplified position
//! report sent by class B (non-SOLAS) transceivers.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 168;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ClassBPositionReport {
    pub sog_tenths: u16,
    pub accuracy: bool,
    pub lon_raw: i32,
    pub lat_raw: i32,
    pub cog_tenths: u16,
    pub heading: u16,
    pub second: u8,
    pub cs_unit: bool,
    pub has_display: bool,
    pub has_dsc: bool,
    pub whole_band: bool,
    pub accepts_message_22: bool,
    pub assigned_mode: bool,
    pub raim: bool,
    /// Raw communication-state selector plus SOTDMA/ITDMA state (20 bits).
    pub radio_status: u32,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<ClassBPositionReport> {
    Ok(ClassBPositionReport {
        sog_tenths: ubits(buf, 46, 10)? as u16,
        accuracy: ubits(buf, 56, 1)? != 0,
        lon_raw: sbits(buf, 57, 28)? as i32,
        lat_raw: sbits(buf, 85, 27)? as i32,
        cog_tenths: ubits(buf, 112, 12)? as u16,
        heading: ubits(buf, 124, 9)? as u16,
        second: ubits(buf, 133, 6)? as u8,
        cs_unit: ubits(buf, 141, 1)? != 0,
        has_display: ubits(buf, 142, 1)? != 0,
        has_dsc: ubits(buf, 143, 1)? != 0,
        whole_band: ubits(buf, 144, 1)? != 0,
        accepts_message_22: ubits(buf, 145, 1)? != 0,
        assigned_mode: ubits(buf, 146, 1)? != 0,
        raim: ubits(buf, 147, 1)? != 0,
        radio_status: ubits(buf, 148, 20)? as u32,
    })
}

pub fn encode(header: &Header, msg: &ClassBPositionReport, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 46, 10, msg.sog_tenths as u64)?;
    putbits(buf, 56, 1, msg.accuracy as u64)?;
    putsbits(buf, 57, 28, msg.lon_raw as i64)?;
    putsbits(buf, 85, 27, msg.lat_raw as i64)?;
    putbits(buf, 112, 12, msg.cog_tenths as u64)?;
    putbits(buf, 124, 9, msg.heading as u64)?;
    putbits(buf, 133, 6, msg.second as u64)?;
    putbits(buf, 141, 1, msg.cs_unit as u64)?;
    putbits(buf, 142, 1, msg.has_display as u64)?;
    putbits(buf, 143, 1, msg.has_dsc as u64)?;
    putbits(buf, 144, 1, msg.whole_band as u64)?;
    putbits(buf, 145, 1, msg.accepts_message_22 as u64)?;
    putbits(buf, 146, 1, msg.assigned_mode as u64)?;
    putbits(buf, 147, 1, msg.raim as u64)?;
    putbits(buf, 148, 20, msg.radio_status as u64)?;
    Ok(BITS)
}
