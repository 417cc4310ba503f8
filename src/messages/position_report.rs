//! Types 1, 2, 3: position reports sent on a scheduled basis (1), by
//! assignment (2), or in response to an interrogation (3). All three share
//! one 168-bit layout; only the header's `msg_type` distinguishes them.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 168;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PositionReport {
    /// Navigational status code (0..=15) per ITU-R M.1371, raw ordinal.
    pub nav_status: u8,
    /// Rate of turn, raw coded field (-128..=127; 128 is "not available").
    pub rot_raw: i8,
    /// Speed over ground in tenths of a knot (1023 = not available).
    pub sog_tenths: u16,
    /// Position accuracy flag (true = high, <=10m).
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units (0x6791AC0 = not available).
    pub lon_raw: i32,
    /// Latitude in 1/10000 minute units (0x3412140 = not available).
    pub lat_raw: i32,
    /// Course over ground in tenths of a degree (3600 = not available).
    pub cog_tenths: u16,
    /// True heading in degrees (511 = not available).
    pub heading: u16,
    /// UTC second of the fix (60 = not available, 61..=63 = status codes).
    pub second: u8,
    /// Maneuver indicator (0 = not available, 1 = no special, 2 = special).
    pub maneuver: u8,
    pub raim: bool,
    /// Raw SOTDMA/ITDMA communication state, uninterpreted.
    pub radio_status: u32,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<PositionReport> {
    Ok(PositionReport {
        nav_status: ubits(buf, 38, 4)? as u8,
        rot_raw: sbits(buf, 42, 8)? as i8,
        sog_tenths: ubits(buf, 50, 10)? as u16,
        accuracy: ubits(buf, 60, 1)? != 0,
        lon_raw: sbits(buf, 61, 28)? as i32,
        lat_raw: sbits(buf, 89, 27)? as i32,
        cog_tenths: ubits(buf, 116, 12)? as u16,
        heading: ubits(buf, 128, 9)? as u16,
        second: ubits(buf, 137, 6)? as u8,
        maneuver: ubits(buf, 143, 2)? as u8,
        raim: ubits(buf, 148, 1)? != 0,
        radio_status: ubits(buf, 149, 19)? as u32,
    })
}

pub fn encode(header: &Header, msg: &PositionReport, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 4, msg.nav_status as u64)?;
    putsbits(buf, 42, 8, msg.rot_raw as i64)?;
    putbits(buf, 50, 10, msg.sog_tenths as u64)?;
    putbits(buf, 60, 1, msg.accuracy as u64)?;
    putsbits(buf, 61, 28, msg.lon_raw as i64)?;
    putsbits(buf, 89, 27, msg.lat_raw as i64)?;
    putbits(buf, 116, 12, msg.cog_tenths as u64)?;
    putbits(buf, 128, 9, msg.heading as u64)?;
    putbits(buf, 137, 6, msg.second as u64)?;
    putbits(buf, 143, 2, msg.maneuver as u64)?;
    putbits(buf, 148, 1, msg.raim as u64)?;
    putbits(buf, 149, 19, msg.radio_status as u64)?;
    Ok(BITS)
}
