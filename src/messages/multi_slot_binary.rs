//! Type 26: multi-slot binary message — like type 25, but spanning several
//! reporting slots and carrying a trailing 20-bit communication-state field
//! that bounds the payload from the end of the message rather than from a
//! fixed base offset.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::messages::binary_addressed::{read_blob, write_blob};
use crate::record::Header;

pub const MIN_BITS: usize = 60;
pub const MAX_BITS: usize = 1004;
const RADIO_STATUS_BITS: usize = 20;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MultiSlotBinary {
    pub dest_mmsi: Option<u32>,
    pub app_id: Option<u16>,
    /// The application payload, packed MSB-first.
    pub data: Vec<u8>,
    /// Exact bit length of `data` (may not be a multiple of 8).
    pub data_bits: usize,
    pub radio_status: u32,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<MultiSlotBinary> {
    let addressed = ubits(buf, 38, 1)? != 0;
    let structured = ubits(buf, 39, 1)? != 0;
    let mut offset = 40;
    let dest_mmsi = if addressed {
        let mmsi = ubits(buf, offset, 30)? as u32;
        offset += 30;
        Some(mmsi)
    } else {
        None
    };
    let app_id = if structured {
        let id = ubits(buf, offset, 16)? as u16;
        offset += 16;
        Some(id)
    } else {
        None
    };
    let radio_status_offset = bitlen.saturating_sub(RADIO_STATUS_BITS);
    let data_bits = radio_status_offset.saturating_sub(offset);
    let data = read_blob(buf, offset, data_bits)?;
    let radio_status = ubits(buf, radio_status_offset, RADIO_STATUS_BITS as u32)? as u32;
    Ok(MultiSlotBinary {
        dest_mmsi,
        app_id,
        data,
        data_bits,
        radio_status,
    })
}

pub fn encode(header: &Header, msg: &MultiSlotBinary, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 1, msg.dest_mmsi.is_some() as u64)?;
    putbits(buf, 39, 1, msg.app_id.is_some() as u64)?;
    let mut offset = 40;
    if let Some(mmsi) = msg.dest_mmsi {
        putbits(buf, offset, 30, mmsi as u64)?;
        offset += 30;
    }
    if let Some(id) = msg.app_id {
        putbits(buf, offset, 16, id as u64)?;
        offset += 16;
    }
    write_blob(buf, offset, &msg.data, msg.data_bits)?;
    let radio_status_offset = offset + msg.data_bits;
    putbits(
        buf,
        radio_status_offset,
        RADIO_STATUS_BITS as u32,
        msg.radio_status as u64,
    )?;
    Ok(radio_status_offset + RADIO_STATUS_BITS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_addressed_structured() {
        let header = Header {
            msg_type: 26,
            repeat: 0,
            mmsi: 400_000_000,
        };
        let msg = MultiSlotBinary {
            dest_mmsi: Some(987_654_321),
            app_id: Some(235),
            data: vec![0xde, 0xad, 0xbe, 0xef],
            data_bits: 32,
            radio_status: 0x3_FFFF,
        };
        let mut buf = [0u8; 18];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(bits, 40 + 30 + 16 + 32 + 20);
        let decoded = decode(&buf, bits, &header).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn roundtrip_unaddressed_unstructured() {
        let header = Header {
            msg_type: 26,
            repeat: 0,
            mmsi: 400_000_000,
        };
        let msg = MultiSlotBinary {
            dest_mmsi: None,
            app_id: None,
            data: vec![0x12, 0x34, 0x56],
            data_bits: 24,
            radio_status: 12345,
        };
        let mut buf = [0u8; 11];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(bits, 40 + 24 + 20);
        let decoded = decode(&buf, bits, &header).unwrap();
        assert_eq!(decoded, msg);
    }
}
