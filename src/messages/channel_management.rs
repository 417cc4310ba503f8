//! Type 22: channel management — a base station assigning VHF channels and
//! power levels, either to every station within a geographic box or to up
//! to two specific destination MMSIs.
//!
//! The two destination MMSIs are plain 30-bit unsigned values, not signed
//! fields; some reference decoders read them with a signed extractor,
//! which corrupts any MMSI whose 30th bit is set.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 168;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChannelTarget {
    /// A geographic area, given as the northeast and southwest corners.
    Area {
        ne_lon_raw: i32,
        ne_lat_raw: i32,
        sw_lon_raw: i32,
        sw_lat_raw: i32,
    },
    /// Up to two specific destination MMSIs.
    Addressed { dest1: u32, dest2: u32 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChannelManagement {
    pub channel_a: u16,
    pub channel_b: u16,
    pub txrx: u8,
    pub power_low: bool,
    pub target: ChannelTarget,
    pub band_a: bool,
    pub band_b: bool,
    pub zone_size: u8,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<ChannelManagement> {
    let addressed = ubits(buf, 139, 1)? != 0;
    let target = if addressed {
        ChannelTarget::Addressed {
            dest1: ubits(buf, 69, 30)? as u32,
            dest2: ubits(buf, 104, 30)? as u32,
        }
    } else {
        ChannelTarget::Area {
            ne_lon_raw: sbits(buf, 69, 18)? as i32,
            ne_lat_raw: sbits(buf, 87, 17)? as i32,
            sw_lon_raw: sbits(buf, 104, 18)? as i32,
            sw_lat_raw: sbits(buf, 122, 17)? as i32,
        }
    };
    Ok(ChannelManagement {
        channel_a: ubits(buf, 40, 12)? as u16,
        channel_b: ubits(buf, 52, 12)? as u16,
        txrx: ubits(buf, 64, 4)? as u8,
        power_low: ubits(buf, 68, 1)? != 0,
        target,
        band_a: ubits(buf, 140, 1)? != 0,
        band_b: ubits(buf, 141, 1)? != 0,
        zone_size: ubits(buf, 142, 3)? as u8,
    })
}

pub fn encode(header: &Header, msg: &ChannelManagement, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 40, 12, msg.channel_a as u64)?;
    putbits(buf, 52, 12, msg.channel_b as u64)?;
    putbits(buf, 64, 4, msg.txrx as u64)?;
    putbits(buf, 68, 1, msg.power_low as u64)?;
    match msg.target {
        ChannelTarget::Area {
            ne_lon_raw,
            ne_lat_raw,
            sw_lon_raw,
            sw_lat_raw,
        } => {
            putbits(buf, 139, 1, 0)?;
            putsbits(buf, 69, 18, ne_lon_raw as i64)?;
            putsbits(buf, 87, 17, ne_lat_raw as i64)?;
            putsbits(buf, 104, 18, sw_lon_raw as i64)?;
            putsbits(buf, 122, 17, sw_lat_raw as i64)?;
        }
        ChannelTarget::Addressed { dest1, dest2 } => {
            putbits(buf, 139, 1, 1)?;
            putbits(buf, 69, 30, dest1 as u64)?;
            putbits(buf, 104, 30, dest2 as u64)?;
        }
    }
    putbits(buf, 140, 1, msg.band_a as u64)?;
    putbits(buf, 141, 1, msg.band_b as u64)?;
    putbits(buf, 142, 3, msg.zone_size as u64)?;
    Ok(BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_addressed_mmsi_above_sign_bit() {
        let header = Header {
            msg_type: 22,
            repeat: 0,
            mmsi: 3_669_702,
        };
        // dest1 has bit 29 set, which a signed 30-bit read would corrupt.
        let msg = ChannelManagement {
            channel_a: 2087,
            channel_b: 2088,
            txrx: 0,
            power_low: false,
            target: ChannelTarget::Addressed {
                dest1: 0x3FFF_FFFF,
                dest2: 987_654_321,
            },
            band_a: false,
            band_b: false,
            zone_size: 0,
        };
        let mut buf = [0u8; 21];
        encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, &header).unwrap(), msg);
    }

    #[test]
    fn roundtrip_area() {
        let header = Header {
            msg_type: 22,
            repeat: 0,
            mmsi: 3_669_702,
        };
        let msg = ChannelManagement {
            channel_a: 2087,
            channel_b: 2088,
            txrx: 0,
            power_low: true,
            target: ChannelTarget::Area {
                ne_lon_raw: 100,
                ne_lat_raw: 200,
                sw_lon_raw: -100,
                sw_lat_raw: -200,
            },
            band_a: true,
            band_b: false,
            zone_size: 1,
        };
        let mut buf = [0u8; 21];
        encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, &header).unwrap(), msg);
    }
}
