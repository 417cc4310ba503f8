//! Type 9: standard SAR aircraft position report — the airborne-search
//! analogue of the class A position report, replacing rate-of-turn and
//! heading with altitude.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 168;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SarPositionReport {
    /// Altitude in meters (4095 = not available, 4094 = 4094m or higher).
    pub altitude: u16,
    /// Speed over ground in knots, not tenths (1023 = not available).
    pub sog: u16,
    pub accuracy: bool,
    pub lon_raw: i32,
    pub lat_raw: i32,
    pub cog_tenths: u16,
    pub second: u8,
    pub dte: bool,
    pub assigned_mode: bool,
    pub raim: bool,
    pub radio_status: u32,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<SarPositionReport> {
    Ok(SarPositionReport {
        altitude: ubits(buf, 38, 12)? as u16,
        sog: ubits(buf, 50, 10)? as u16,
        accuracy: ubits(buf, 60, 1)? != 0,
        lon_raw: sbits(buf, 61, 28)? as i32,
        lat_raw: sbits(buf, 89, 27)? as i32,
        cog_tenths: ubits(buf, 116, 12)? as u16,
        second: ubits(buf, 128, 6)? as u8,
        dte: ubits(buf, 142, 1)? != 0,
        assigned_mode: ubits(buf, 146, 1)? != 0,
        raim: ubits(buf, 147, 1)? != 0,
        radio_status: ubits(buf, 148, 20)? as u32,
    })
}

pub fn encode(header: &Header, msg: &SarPositionReport, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 12, msg.altitude as u64)?;
    putbits(buf, 50, 10, msg.sog as u64)?;
    putbits(buf, 60, 1, msg.accuracy as u64)?;
    putsbits(buf, 61, 28, msg.lon_raw as i64)?;
    putsbits(buf, 89, 27, msg.lat_raw as i64)?;
    putbits(buf, 116, 12, msg.cog_tenths as u64)?;
    putbits(buf, 128, 6, msg.second as u64)?;
    putbits(buf, 142, 1, msg.dte as u64)?;
    putbits(buf, 146, 1, msg.assigned_mode as u64)?;
    putbits(buf, 147, 1, msg.raim as u64)?;
    putbits(buf, 148, 20, msg.radio_status as u64)?;
    Ok(BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 9,
            repeat: 0,
            mmsi: 111_232_511,
        };
        let msg = SarPositionReport {
            altitude: 303,
            sog: 42,
            accuracy: false,
            lon_raw: -6_278_843,
            lat_raw: 58_144_000,
            cog_tenths: 1545,
            second: 15,
            dte: true,
            assigned_mode: false,
            raim: false,
            radio_status: 12345,
        };
        let mut buf = [0u8; 21];
        encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, &header).unwrap(), msg);
    }
}
