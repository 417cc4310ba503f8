//! Type 21: aid-to-navigation report — a fixed or floating navigation
//! marker (buoy, beacon, lighthouse) reporting its own position.
//!
//! When the name fills all 20 of its base characters with no early
//! terminator, some senders append up to 88 more bits after the 272-bit
//! base message as a name extension, decoded as additional six-bit
//! characters and appended to `name`.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;
use crate::sixbit;

pub const BASE_BITS: usize = 272;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AidToNavigationReport {
    /// Aid-to-navigation type code (0..=31).
    pub aid_type: u8,
    pub name: String,
    pub accuracy: bool,
    pub lon_raw: i32,
    pub lat_raw: i32,
    pub dimension_to_bow: u16,
    pub dimension_to_stern: u16,
    pub dimension_to_port: u16,
    pub dimension_to_starboard: u16,
    pub epfd: u8,
    pub second: u8,
    pub off_position: bool,
    pub regional_reserved: u8,
    pub raim: bool,
    pub virtual_aid: bool,
    pub assigned_mode: bool,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<AidToNavigationReport> {
    let mut name = sixbit::decode(buf, 43, 20)?;
    if name.chars().count() == 20 && bitlen > BASE_BITS {
        let extra_chars = (bitlen - BASE_BITS) / 6;
        if extra_chars > 0 {
            name.push_str(&sixbit::decode(buf, BASE_BITS, extra_chars)?);
        }
    }
    Ok(AidToNavigationReport {
        aid_type: ubits(buf, 38, 5)? as u8,
        name,
        accuracy: ubits(buf, 163, 1)? != 0,
        lon_raw: sbits(buf, 164, 28)? as i32,
        lat_raw: sbits(buf, 192, 27)? as i32,
        dimension_to_bow: ubits(buf, 219, 9)? as u16,
        dimension_to_stern: ubits(buf, 228, 9)? as u16,
        dimension_to_port: ubits(buf, 237, 6)? as u16,
        dimension_to_starboard: ubits(buf, 243, 6)? as u16,
        epfd: ubits(buf, 249, 4)? as u8,
        second: ubits(buf, 253, 6)? as u8,
        off_position: ubits(buf, 259, 1)? != 0,
        regional_reserved: ubits(buf, 260, 8)? as u8,
        raim: ubits(buf, 268, 1)? != 0,
        virtual_aid: ubits(buf, 269, 1)? != 0,
        assigned_mode: ubits(buf, 270, 1)? != 0,
    })
}

pub fn encode(header: &Header, msg: &AidToNavigationReport, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 5, msg.aid_type as u64)?;
    let name_chars: Vec<char> = msg.name.chars().collect();
    let base_name: String = name_chars.iter().take(20).collect();
    sixbit::encode(buf, 43, 20, &base_name)?;
    putbits(buf, 163, 1, msg.accuracy as u64)?;
    putsbits(buf, 164, 28, msg.lon_raw as i64)?;
    putsbits(buf, 192, 27, msg.lat_raw as i64)?;
    putbits(buf, 219, 9, msg.dimension_to_bow as u64)?;
    putbits(buf, 228, 9, msg.dimension_to_stern as u64)?;
    putbits(buf, 237, 6, msg.dimension_to_port as u64)?;
    putbits(buf, 243, 6, msg.dimension_to_starboard as u64)?;
    putbits(buf, 249, 4, msg.epfd as u64)?;
    putbits(buf, 253, 6, msg.second as u64)?;
    putbits(buf, 259, 1, msg.off_position as u64)?;
    putbits(buf, 260, 8, msg.regional_reserved as u64)?;
    putbits(buf, 268, 1, msg.raim as u64)?;
    putbits(buf, 269, 1, msg.virtual_aid as u64)?;
    putbits(buf, 270, 1, msg.assigned_mode as u64)?;
    if name_chars.len() > 20 {
        let extension: String = name_chars.iter().skip(20).collect();
        sixbit::encode(buf, BASE_BITS, extension.len(), &extension)?;
        Ok(BASE_BITS + extension.len() * 6)
    } else {
        Ok(BASE_BITS)
    }
}
