//! Type 16: assignment mode command — a base station assigning up to two
//! other stations a specific slot offset and transmission increment.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::{Error, Result};
use crate::record::Header;

pub const BITS_ONE_STATION: usize = 96;
pub const BITS_TWO_STATIONS: usize = 144;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assignment {
    pub mmsi: u32,
    pub offset: u16,
    pub increment: u16,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssignmentModeCommand {
    pub assignments: Vec<Assignment>,
}

pub fn decode(buf: &[u8], bitlen: usize, _header: &Header) -> Result<AssignmentModeCommand> {
    let mut assignments = vec![Assignment {
        mmsi: ubits(buf, 40, 30)? as u32,
        offset: ubits(buf, 70, 12)? as u16,
        increment: ubits(buf, 82, 10)? as u16,
    }];
    if bitlen >= BITS_TWO_STATIONS {
        assignments.push(Assignment {
            mmsi: ubits(buf, 92, 30)? as u32,
            offset: ubits(buf, 122, 12)? as u16,
            increment: ubits(buf, 134, 10)? as u16,
        });
    }
    Ok(AssignmentModeCommand { assignments })
}

pub fn encode(header: &Header, msg: &AssignmentModeCommand, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    let a1 = msg.assignments.first().ok_or(Error::ValueOutOfRange {
        field: "assignments",
    })?;
    putbits(buf, 40, 30, a1.mmsi as u64)?;
    putbits(buf, 70, 12, a1.offset as u64)?;
    putbits(buf, 82, 10, a1.increment as u64)?;
    if let Some(a2) = msg.assignments.get(1) {
        putbits(buf, 92, 30, a2.mmsi as u64)?;
        putbits(buf, 122, 12, a2.offset as u64)?;
        putbits(buf, 134, 10, a2.increment as u64)?;
        Ok(BITS_TWO_STATIONS)
    } else {
        Ok(BITS_ONE_STATION)
    }
}
