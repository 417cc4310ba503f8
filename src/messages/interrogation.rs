//! Type 15: interrogation — one station asking `mmsi1` to send up to three
//! specific message types on its next transmission opportunities.
//!
//! The third request's bit offset is a known source of confusion: some
//! implementations copy the second request's decode and read it from bits
//! 90/96 again instead of 110/116. This decoder reads the third request
//! from its correct, non-overlapping position.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const MIN_BITS: usize = 88;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InterrogationRequest {
    pub msg_type: u8,
    pub slot_offset: u16,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interrogation {
    pub mmsi1: u32,
    /// 1 to 3 requested message types, in wire order.
    pub requests: Vec<InterrogationRequest>,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<Interrogation> {
    let mut requests = vec![InterrogationRequest {
        msg_type: ubits(buf, 70, 6)? as u8,
        slot_offset: ubits(buf, 76, 12)? as u16,
    }];
    if bitlen > 90 {
        requests.push(InterrogationRequest {
            msg_type: ubits(buf, 90, 6)? as u8,
            slot_offset: ubits(buf, 96, 12)? as u16,
        });
    }
    if bitlen > 110 {
        requests.push(InterrogationRequest {
            msg_type: ubits(buf, 110, 6)? as u8,
            slot_offset: ubits(buf, 116, 12)? as u16,
        });
    }
    Ok(Interrogation {
        mmsi1: ubits(buf, 40, 30)? as u32,
        requests,
    })
}

pub fn encode(header: &Header, msg: &Interrogation, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 40, 30, msg.mmsi1 as u64)?;
    let mut bits = 70;
    for (i, req) in msg.requests.iter().enumerate().take(3) {
        let (type_offset, slot_offset) = match i {
            0 => (70, 76),
            1 => (90, 96),
            _ => (110, 116),
        };
        putbits(buf, type_offset, 6, req.msg_type as u64)?;
        putbits(buf, slot_offset, 12, req.slot_offset as u64)?;
        bits = slot_offset + 12;
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_single_request() {
        let header = Header {
            msg_type: 15,
            repeat: 0,
            mmsi: 3_669_981,
        };
        let msg = Interrogation {
            mmsi1: 230_682_000,
            requests: vec![InterrogationRequest {
                msg_type: 5,
                slot_offset: 0,
            }],
        };
        let mut buf = [0u8; 12];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        assert_eq!(decode(&buf, bits, &header).unwrap(), msg);
    }

    #[test]
    fn roundtrip_three_requests_uses_fixed_offset() {
        let header = Header {
            msg_type: 15,
            repeat: 0,
            mmsi: 4_310_311,
        };
        let msg = Interrogation {
            mmsi1: 431_008_813,
            requests: vec![
                InterrogationRequest {
                    msg_type: 5,
                    slot_offset: 0,
                },
                InterrogationRequest {
                    msg_type: 3,
                    slot_offset: 0,
                },
                InterrogationRequest {
                    msg_type: 24,
                    slot_offset: 0,
                },
            ],
        };
        let mut buf = [0u8; 17];
        let bits = encode(&header, &msg, &mut buf).unwrap();
        let decoded = decode(&buf, bits, &header).unwrap();
        assert_eq!(decoded, msg);
        // The third request must not alias the second's bit range.
        assert_eq!(ubits(&buf, 90, 6).unwrap() as u8, 3);
        assert_eq!(ubits(&buf, 110, 6).unwrap() as u8, 24);
    }
}
