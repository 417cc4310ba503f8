//! Type 17: GNSS broadcast binary message — a base station rebroadcasting
//! DGNSS corrections (RTCM SC-104 style) for a reference position. The
//! correction payload itself is opaque to this crate.

use crate::bitbuffer::{putbits, sbits, ubits};
use crate::errors::Result;
use crate::messages::binary_addressed::{read_blob, write_blob};
use crate::record::Header;

pub const HEADER_BITS: usize = 80;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GnssBinary {
    /// Longitude in 1/10 minute units (108600 = not available).
    pub lon_raw: i32,
    /// Latitude in 1/10 minute units (54600 = not available).
    pub lat_raw: i32,
    pub data: Vec<u8>,
    pub data_bits: usize,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<GnssBinary> {
    let data_bits = bitlen.saturating_sub(HEADER_BITS);
    Ok(GnssBinary {
        lon_raw: sbits(buf, 40, 18)? as i32,
        lat_raw: sbits(buf, 58, 17)? as i32,
        data: read_blob(buf, HEADER_BITS, data_bits)?,
        data_bits,
    })
}

pub fn encode(header: &Header, msg: &GnssBinary, buf: &mut [u8]) -> Result<usize> {
    use crate::bitbuffer::putsbits;
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putsbits(buf, 40, 18, msg.lon_raw as i64)?;
    putsbits(buf, 58, 17, msg.lat_raw as i64)?;
    write_blob(buf, HEADER_BITS, &msg.data, msg.data_bits)?;
    Ok(HEADER_BITS + msg.data_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 17,
            repeat: 0,
            mmsi: 2_734_450,
        };
        let msg = GnssBinary {
            lon_raw: 17_478,
            lat_raw: 35_992,
            data: vec![0x01, 0x02, 0x03, 0x04, 0x05],
            data_bits: 40,
        };
        let mut buf = [0u8; 16];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, bits, &header).unwrap(), msg);
    }
}
