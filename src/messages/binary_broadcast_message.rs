//! Type 8: binary broadcast message — an opaque application payload
//! broadcast to all stations in range, tagged with a DAC/FID pair. Common
//! real-world uses include meteorological and hydrological data, but this
//! crate treats the payload as opaque bits.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::messages::binary_addressed::{read_blob, write_blob};
use crate::record::Header;

pub const HEADER_BITS: usize = 56;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BroadcastBinary {
    pub dac: u16,
    pub fid: u8,
    pub data: Vec<u8>,
    pub data_bits: usize,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<BroadcastBinary> {
    let data_bits = bitlen.saturating_sub(HEADER_BITS);
    Ok(BroadcastBinary {
        dac: ubits(buf, 38, 10)? as u16,
        fid: ubits(buf, 48, 6)? as u8,
        data: read_blob(buf, HEADER_BITS, data_bits)?,
        data_bits,
    })
}

pub fn encode(header: &Header, msg: &BroadcastBinary, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 10, msg.dac as u64)?;
    putbits(buf, 48, 6, msg.fid as u64)?;
    write_blob(buf, HEADER_BITS, &msg.data, msg.data_bits)?;
    Ok(HEADER_BITS + msg.data_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 8,
            repeat: 1,
            mmsi: 2_300_061,
        };
        let msg = BroadcastBinary {
            dac: 1,
            fid: 11,
            data: vec![0xAB, 0xCD, 0xEF],
            data_bits: 24,
        };
        let mut buf = [0u8; 11];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, bits, &header).unwrap(), msg);
    }
}
