//! Types 4, 11: base station report and UTC/date response. Both carry the
//! base station's own position and a UTC timestamp it believes is current;
//! type 11 is sent only in response to a type 10 inquiry.

use crate::bitbuffer::{putbits, putsbits, sbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const BITS: usize = 168;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BaseStationReport {
    /// UTC year (0 = not available, 1..=9999 otherwise).
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub accuracy: bool,
    pub lon_raw: i32,
    pub lat_raw: i32,
    /// EPFD type code (0..=15).
    pub epfd: u8,
    pub raim: bool,
    pub radio_status: u32,
}

pub fn decode(buf: &[u8], _header: &Header) -> Result<BaseStationReport> {
    Ok(BaseStationReport {
        year: ubits(buf, 38, 14)? as u16,
        month: ubits(buf, 52, 4)? as u8,
        day: ubits(buf, 56, 5)? as u8,
        hour: ubits(buf, 61, 5)? as u8,
        minute: ubits(buf, 66, 6)? as u8,
        second: ubits(buf, 72, 6)? as u8,
        accuracy: ubits(buf, 78, 1)? != 0,
        lon_raw: sbits(buf, 79, 28)? as i32,
        lat_raw: sbits(buf, 107, 27)? as i32,
        epfd: ubits(buf, 134, 4)? as u8,
        raim: ubits(buf, 148, 1)? != 0,
        radio_status: ubits(buf, 149, 19)? as u32,
    })
}

pub fn encode(header: &Header, msg: &BaseStationReport, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 14, msg.year as u64)?;
    putbits(buf, 52, 4, msg.month as u64)?;
    putbits(buf, 56, 5, msg.day as u64)?;
    putbits(buf, 61, 5, msg.hour as u64)?;
    putbits(buf, 66, 6, msg.minute as u64)?;
    putbits(buf, 72, 6, msg.second as u64)?;
    putbits(buf, 78, 1, msg.accuracy as u64)?;
    putsbits(buf, 79, 28, msg.lon_raw as i64)?;
    putsbits(buf, 107, 27, msg.lat_raw as i64)?;
    putbits(buf, 134, 4, msg.epfd as u64)?;
    putbits(buf, 148, 1, msg.raim as u64)?;
    putbits(buf, 149, 19, msg.radio_status as u64)?;
    Ok(BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 4,
            repeat: 0,
            mmsi: 3_669_145,
        };
        let msg = BaseStationReport {
            year: 2017,
            month: 12,
            day: 27,
            hour: 17,
            minute: 15,
            second: 11,
            accuracy: true,
            lon_raw: -1_224_647_75,
            lat_raw: 377_943_08,
            epfd: 0,
            raim: true,
            radio_status: 2250,
        };
        let mut buf = [0u8; 21];
        encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, &header).unwrap(), msg);
    }
}
