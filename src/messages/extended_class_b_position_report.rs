//! Type 19: extended class B position report — like type 18, but also
//! carries the vessel's name and dimensions so receivers don't need a
//! separate type 24 to identify it.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;
use crate::sixbit;

pub const BITS: usize = 312;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExtendedClassBPositionReport {
    pub sog_tenths: u16,
    pub accuracy: bool,
    pub lon_raw: i32,
    pub lat_raw: i32,
    pub cog_tenths: u16,
    pub heading: u16,
    pub second: u8,
    pub name: String,
    pub ship_type: u8,
    pub dimension_to_bow: u16,
    pub dimension_to_stern: u16,
    pub dimension_to_port: u16,
    pub dimension_to_starboard: u16,
    pub epfd: u8,
    pub raim: bool,
    pub dte: bool,
    pub assigned_mode: bool,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<ExtendedClassBPositionReport> {
    Ok(ExtendedClassBPositionReport {
        sog_tenths: ubits(buf, 46, 10)? as u16,
        accuracy: ubits(buf, 56, 1)? != 0,
        lon_raw: sbits(buf, 57, 28)? as i32,
        lat_raw: sbits(buf, 85, 27)? as i32,
        cog_tenths: ubits(buf, 112, 12)? as u16,
        heading: ubits(buf, 124, 9)? as u16,
        second: ubits(buf, 133, 6)? as u8,
        name: sixbit::decode(buf, 143, 20)?,
        ship_type: ubits(buf, 263, 8)? as u8,
        dimension_to_bow: ubits(buf, 271, 9)? as u16,
        dimension_to_stern: ubits(buf, 280, 9)? as u16,
        dimension_to_port: ubits(buf, 289, 6)? as u16,
        dimension_to_starboard: ubits(buf, 295, 6)? as u16,
        epfd: ubits(buf, 301, 4)? as u8,
        raim: ubits(buf, 305, 1)? != 0,
        dte: ubits(buf, 306, 1)? != 0,
        assigned_mode: ubits(buf, 307, 1)? != 0,
    })
}

pub fn encode(
    header: &Header,
    msg: &ExtendedClassBPositionReport,
    buf: &mut [u8],
) -> Result<usize> {
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
    sixbit::encode(buf, 143, 20, &msg.name)?;
    putbits(buf, 263, 8, msg.ship_type as u64)?;
    putbits(buf, 271, 9, msg.dimension_to_bow as u64)?;
    putbits(buf, 280, 9, msg.dimension_to_stern as u64)?;
    putbits(buf, 289, 6, msg.dimension_to_port as u64)?;
    putbits(buf, 295, 6, msg.dimension_to_starboard as u64)?;
    putbits(buf, 301, 4, msg.epfd as u64)?;
    putbits(buf, 305, 1, msg.raim as u64)?;
    putbits(buf, 306, 1, msg.dte as u64)?;
    putbits(buf, 307, 1, msg.assigned_mode as u64)?;
    Ok(BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 19,
            repeat: 0,
            mmsi: 413_954_782,
        };
        let msg = ExtendedClassBPositionReport {
            sog_tenths: 0,
            accuracy: true,
            lon_raw: 1_201_285,
            lat_raw: 319_316,
            cog_tenths: 407,
            heading: 40,
            second: 60,
            name: "SU YOU 333".to_string(),
            ship_type: 70,
            dimension_to_bow: 35,
            dimension_to_stern: 13,
            dimension_to_port: 4,
            dimension_to_starboard: 4,
            epfd: 0,
            raim: false,
            dte: true,
            assigned_mode: false,
        };
        let mut buf = [0u8; 39];
        encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, &header).unwrap(), msg);
    }
}
