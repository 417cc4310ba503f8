//! Type 5: static and voyage related data — the vessel's name, callsign,
//! dimensions, and voyage plan. Sent as a two-sentence fragment pair on the
//! wire (424 bits armors to 71 six-bit characters, more than a single
//! sentence's typical payload), but reassembly is the Sentence Framer's job;
//! by the time this module sees the payload it is already one contiguous
//! bit buffer.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;
use crate::sixbit;

pub const BITS: usize = 424;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StaticAndVoyage {
    pub ais_version: u8,
    pub imo_number: u32,
    pub callsign: String,
    pub vessel_name: String,
    /// Ship and cargo type code (0..=255).
    pub ship_type: u8,
    pub dimension_to_bow: u16,
    pub dimension_to_stern: u16,
    pub dimension_to_port: u16,
    pub dimension_to_starboard: u16,
    /// EPFD type code (0..=15).
    pub epfd: u8,
    pub eta_month: u8,
    pub eta_day: u8,
    pub eta_hour: u8,
    pub eta_minute: u8,
    /// Draught in tenths of a meter.
    pub draught_tenths: u8,
    pub destination: String,
    /// Data terminal equipment ready flag (true = available).
    pub dte: bool,
}

/// Some senders truncate the destination field (and omit the trailing DTE
/// bit entirely) when the payload runs short; decode from whatever bits are
/// actually present rather than demanding the full 424.
pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<StaticAndVoyage> {
    let destination_bits = bitlen.saturating_sub(302).min(120);
    let destination_chars = destination_bits / 6;
    let dte_bit = 302 + destination_chars * 6;
    let dte = if bitlen > dte_bit {
        ubits(buf, dte_bit, 1)? != 0
    } else {
        false
    };
    Ok(StaticAndVoyage {
        ais_version: ubits(buf, 38, 2)? as u8,
        imo_number: ubits(buf, 40, 30)? as u32,
        callsign: sixbit::decode(buf, 70, 7)?,
        vessel_name: sixbit::decode(buf, 112, 20)?,
        ship_type: ubits(buf, 232, 8)? as u8,
        dimension_to_bow: ubits(buf, 240, 9)? as u16,
        dimension_to_stern: ubits(buf, 249, 9)? as u16,
        dimension_to_port: ubits(buf, 258, 6)? as u16,
        dimension_to_starboard: ubits(buf, 264, 6)? as u16,
        epfd: ubits(buf, 270, 4)? as u8,
        eta_month: ubits(buf, 274, 4)? as u8,
        eta_day: ubits(buf, 278, 5)? as u8,
        eta_hour: ubits(buf, 283, 5)? as u8,
        eta_minute: ubits(buf, 288, 6)? as u8,
        draught_tenths: ubits(buf, 294, 8)? as u8,
        destination: sixbit::decode(buf, 302, destination_chars)?,
        dte,
    })
}

pub fn encode(header: &Header, msg: &StaticAndVoyage, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 2, msg.ais_version as u64)?;
    putbits(buf, 40, 30, msg.imo_number as u64)?;
    sixbit::encode(buf, 70, 7, &msg.callsign)?;
    sixbit::encode(buf, 112, 20, &msg.vessel_name)?;
    putbits(buf, 232, 8, msg.ship_type as u64)?;
    putbits(buf, 240, 9, msg.dimension_to_bow as u64)?;
    putbits(buf, 249, 9, msg.dimension_to_stern as u64)?;
    putbits(buf, 258, 6, msg.dimension_to_port as u64)?;
    putbits(buf, 264, 6, msg.dimension_to_starboard as u64)?;
    putbits(buf, 270, 4, msg.epfd as u64)?;
    putbits(buf, 274, 4, msg.eta_month as u64)?;
    putbits(buf, 278, 5, msg.eta_day as u64)?;
    putbits(buf, 283, 5, msg.eta_hour as u64)?;
    putbits(buf, 288, 6, msg.eta_minute as u64)?;
    putbits(buf, 294, 8, msg.draught_tenths as u64)?;
    sixbit::encode(buf, 302, 20, &msg.destination)?;
    putbits(buf, 422, 1, msg.dte as u64)?;
    Ok(BITS)
}
