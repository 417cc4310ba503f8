//! Type 24: class B static data report, sent as two complementary parts
//! that together describe one vessel.
//!
//! Part A (sub-message 0) carries only the shipname. Part B (sub-message 1)
//! carries the rest, but does not repeat the name; a receiver is expected
//! to remember the most recent Part A for a given MMSI and merge it with
//! the following Part B. That merge is [`ClassBStatic`]; decoding a lone
//! Part A yields only a shipname via [`decode_part_a`].

use crate::bitbuffer::ubits;
use crate::bitbuffer::putbits;
use crate::errors::Result;
use crate::record::Header;
use crate::sixbit;

pub const BITS_PART_A: usize = 160;
pub const BITS_PART_B: usize = 168;

/// MMSIs in the `98MIDXXXXX` range identify auxiliary craft associated with
/// a parent vessel; Part B reports that vessel's MMSI instead of dimensions.
pub fn is_auxiliary_mmsi(mmsi: u32) -> bool {
    mmsi / 10_000_000 == 98
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VesselReference {
    Dimensions {
        dimension_to_bow: u16,
        dimension_to_stern: u16,
        dimension_to_port: u16,
        dimension_to_starboard: u16,
    },
    MothershipMmsi(u32),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassBStatic {
    pub shipname: String,
    pub ship_type: u8,
    pub vendor_id: String,
    pub callsign: String,
    pub reference: VesselReference,
}

/// Reads just the sub-message discriminant out of a type-24 payload,
/// without committing to either part's layout.
pub fn sub_message(buf: &[u8]) -> Result<u8> {
    Ok(ubits(buf, 38, 2)? as u8)
}

pub fn decode_part_a(buf: &[u8]) -> Result<String> {
    sixbit::decode(buf, 40, 20)
}

pub fn encode_part_a(header: &Header, shipname: &str, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 2, 0)?;
    sixbit::encode(buf, 40, 20, shipname)?;
    Ok(BITS_PART_A)
}

pub fn decode_part_b(buf: &[u8], header: &Header, shipname: String) -> Result<ClassBStatic> {
    let reference = if is_auxiliary_mmsi(header.mmsi) {
        VesselReference::MothershipMmsi(ubits(buf, 132, 30)? as u32)
    } else {
        VesselReference::Dimensions {
            dimension_to_bow: ubits(buf, 132, 9)? as u16,
            dimension_to_stern: ubits(buf, 141, 9)? as u16,
            dimension_to_port: ubits(buf, 150, 6)? as u16,
            dimension_to_starboard: ubits(buf, 156, 6)? as u16,
        }
    };
    Ok(ClassBStatic {
        shipname,
        ship_type: ubits(buf, 40, 8)? as u8,
        vendor_id: sixbit::decode(buf, 48, 7)?,
        callsign: sixbit::decode(buf, 90, 7)?,
        reference,
    })
}

pub fn encode_part_b(header: &Header, msg: &ClassBStatic, buf: &mut [u8]) -> Result<usize> {
    putbits(buf, 0, 6, header.msg_type as u64)?;
    putbits(buf, 6, 2, header.repeat as u64)?;
    putbits(buf, 8, 30, header.mmsi as u64)?;
    putbits(buf, 38, 2, 1)?;
    putbits(buf, 40, 8, msg.ship_type as u64)?;
    sixbit::encode(buf, 48, 7, &msg.vendor_id)?;
    sixbit::encode(buf, 90, 7, &msg.callsign)?;
    match msg.reference {
        VesselReference::MothershipMmsi(mmsi) => {
            putbits(buf, 132, 30, mmsi as u64)?;
        }
        VesselReference::Dimensions {
            dimension_to_bow,
            dimension_to_stern,
            dimension_to_port,
            dimension_to_starboard,
        } => {
            putbits(buf, 132, 9, dimension_to_bow as u64)?;
            putbits(buf, 141, 9, dimension_to_stern as u64)?;
            putbits(buf, 150, 6, dimension_to_port as u64)?;
            putbits(buf, 156, 6, dimension_to_starboard as u64)?;
        }
    }
    Ok(BITS_PART_B)
}
