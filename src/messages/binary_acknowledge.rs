//! Types 7, 13: binary acknowledge and safety related acknowledge. Both
//! carry a list of 1 to 4 (destination MMSI, sequence number) pairs
//! acknowledging earlier addressed messages; the two types differ only in
//! which earlier message type they acknowledge, which this crate does not
//! track.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;
use crate::record::Header;

pub const HEADER_BITS: usize = 40;
pub const ACK_BITS: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Acknowledgement {
    pub mmsi: u32,
    pub seq_num: u8,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryAck {
    pub acks: Vec<Acknowledgement>,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<BinaryAck> {
    let mut acks = Vec::new();
    let mut offset = HEADER_BITS;
    while offset + ACK_BITS <= bitlen && acks.len() < 4 {
        acks.push(Acknowledgement {
            mmsi: ubits(buf, offset, 30)? as u32,
            seq_num: ubits(buf, offset + 30, 2)? as u8,
        });
        offset += ACK_BITS;
    }
    Ok(BinaryAck { acks })
}

pub fn encode(header: &Header, msg: &BinaryAck, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    let mut offset = HEADER_BITS;
    for ack in &msg.acks {
        putbits(buf, offset, 30, ack.mmsi as u64)?;
        putbits(buf, offset + 30, 2, ack.seq_num as u64)?;
        offset += ACK_BITS;
    }
    Ok(offset)
}
