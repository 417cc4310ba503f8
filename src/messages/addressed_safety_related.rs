//! Type 12: addressed safety related message — free-text, six-bit-encoded,
//! routed to a single destination MMSI.

use crate::bitbuffer::ubits;
use crate::bitbuffer::putbits;
use crate::errors::Result;
use crate::record::Header;
use crate::sixbit;

pub const HEADER_BITS: usize = 72;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddressedSafetyRelated {
    pub seqno: u8,
    pub dest_mmsi: u32,
    pub retransmit: bool,
    pub text: String,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<AddressedSafetyRelated> {
    let text_chars = bitlen.saturating_sub(HEADER_BITS) / 6;
    Ok(AddressedSafetyRelated {
        seqno: ubits(buf, 38, 2)? as u8,
        dest_mmsi: ubits(buf, 40, 30)? as u32,
        retransmit: ubits(buf, 70, 1)? != 0,
        text: sixbit::decode(buf, HEADER_BITS, text_chars)?,
    })
}

pub fn encode(header: &Header, msg: &AddressedSafetyRelated, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 2, msg.seqno as u64)?;
    putbits(buf, 40, 30, msg.dest_mmsi as u64)?;
    putbits(buf, 70, 1, msg.retransmit as u64)?;
    let char_count = msg.text.len().max(1);
    sixbit::encode(buf, HEADER_BITS, char_count, &msg.text)?;
    Ok(HEADER_BITS + char_count * 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let header = Header {
            msg_type: 12,
            repeat: 0,
            mmsi: 351_853_000,
        };
        let msg = AddressedSafetyRelated {
            seqno: 0,
            dest_mmsi: 316_123_456,
            retransmit: false,
            text: "GOOD".to_string(),
        };
        let mut buf = [0u8; 12];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, bits, &header).unwrap(), msg);
    }
}
