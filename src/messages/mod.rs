//! One module per AIS message family, plus the central type-dispatched
//! decode/encode entry points used by the sentence framer.

pub mod addressed_safety_related;
pub mod aid_to_navigation_report;
pub mod assignment_mode_command;
pub mod base_station_report;
pub mod binary_acknowledge;
pub mod binary_addressed;
pub mod binary_broadcast_message;
pub mod channel_management;
pub mod data_link_management_message;
pub mod dgnss_broadcast_binary_message;
pub mod extended_class_b_position_report;
pub mod group_assignment_command;
pub mod interrogation;
pub mod multi_slot_binary;
pub mod position_report;
pub mod safety_related_broadcast;
pub mod single_slot_binary;
pub mod standard_aircraft_position_report;
pub mod standard_class_b_position_report;
pub mod static_and_voyage_related_data;
pub mod static_data_report;
pub mod utc_date_inquiry;

pub use addressed_safety_related::AddressedSafetyRelated;
pub use aid_to_navigation_report::AidToNavigationReport;
pub use assignment_mode_command::AssignmentModeCommand as AssignedModeCommand;
pub use base_station_report::BaseStationReport;
pub use binary_acknowledge::BinaryAck;
pub use binary_addressed::AddressedBinary;
pub use binary_broadcast_message::BroadcastBinary;
pub use channel_management::ChannelManagement;
pub use data_link_management_message::DataLinkManagement;
pub use dgnss_broadcast_binary_message::GnssBinary;
pub use extended_class_b_position_report::ExtendedClassBPositionReport;
pub use group_assignment_command::GroupAssignmentCommand;
pub use interrogation::Interrogation;
pub use multi_slot_binary::MultiSlotBinary;
pub use position_report::PositionReport;
pub use safety_related_broadcast::SafetyBroadcast;
pub use single_slot_binary::SingleSlotBinary;
pub use standard_aircraft_position_report::SarPositionReport;
pub use standard_class_b_position_report::ClassBPositionReport;
pub use static_and_voyage_related_data::StaticAndVoyage;
pub use static_data_report::ClassBStatic;
pub use utc_date_inquiry::UtcDateInquiry;

use crate::bitbuffer::ubits;
use crate::errors::{Error, LengthConstraint, Result};
use crate::record::{AisRecord, Header};

/// The outcome of decoding one fully-reassembled payload's worth of bits.
/// Type 24 Part A never yields a full record on its own; its shipname must
/// be staged by the caller and merged into the following Part B.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    Record(AisRecord),
    Partial24AShipname(String),
    /// The common header decoded fine, but the payload's length violated
    /// its type's constraint (`LengthOutOfRange`) or the type itself is
    /// outside 1..=26 (`UnsupportedType`). Carries the header so callers
    /// can still route by MMSI even though the body couldn't be decoded.
    HeaderOnly(Header, Error),
}

/// The bit-length constraint each message type's payload must satisfy,
/// checked centrally before any per-type decode runs.
pub fn length_constraint(msg_type: u8) -> Option<LengthConstraint> {
    use LengthConstraint::{Exact, Range};
    Some(match msg_type {
        1..=3 => Exact(position_report::BITS),
        4 | 11 => Exact(base_station_report::BITS),
        5 => Range(1, static_and_voyage_related_data::BITS),
        6 => Range(binary_addressed::HEADER_BITS, 1008),
        7 | 13 => Range(binary_acknowledge::HEADER_BITS, 168),
        8 => Range(binary_broadcast_message::HEADER_BITS, 1008),
        9 => Exact(standard_aircraft_position_report::BITS),
        10 => Exact(utc_date_inquiry::BITS),
        12 => Range(addressed_safety_related::HEADER_BITS, 1008),
        14 => Range(safety_related_broadcast::HEADER_BITS, 1008),
        15 => Range(interrogation::MIN_BITS, 160),
        16 => Range(
            assignment_mode_command::BITS_ONE_STATION,
            assignment_mode_command::BITS_TWO_STATIONS,
        ),
        17 => Range(dgnss_broadcast_binary_message::HEADER_BITS, 816),
        18 => Exact(standard_class_b_position_report::BITS),
        19 => Exact(extended_class_b_position_report::BITS),
        20 => Range(
            data_link_management_message::HEADER_BITS,
            data_link_management_message::HEADER_BITS
                + 4 * data_link_management_message::RESERVATION_BITS,
        ),
        21 => Range(aid_to_navigation_report::BASE_BITS, 360),
        22 => Exact(channel_management::BITS),
        23 => Exact(group_assignment_command::BITS),
        24 => Range(static_data_report::BITS_PART_A, static_data_report::BITS_PART_B),
        25 => Range(single_slot_binary::MIN_BITS, single_slot_binary::MAX_BITS),
        26 => Range(multi_slot_binary::MIN_BITS, multi_slot_binary::MAX_BITS),
        _ => return None,
    })
}

fn check_length(msg_type: u8, bitlen: usize) -> Result<()> {
    match length_constraint(msg_type) {
        None => Err(Error::UnsupportedType { msg_type }),
        Some(constraint) => {
            let ok = match constraint {
                LengthConstraint::Exact(n) => bitlen == n,
                LengthConstraint::Range(lo, hi) => bitlen >= lo && bitlen <= hi,
            };
            if ok {
                Ok(())
            } else {
                Err(Error::LengthOutOfRange {
                    msg_type,
                    got: bitlen,
                    expected: constraint,
                })
            }
        }
    }
}

pub fn decode_header(buf: &[u8]) -> Result<Header> {
    Ok(Header {
        msg_type: ubits(buf, 0, 6)? as u8,
        repeat: ubits(buf, 6, 2)? as u8,
        mmsi: ubits(buf, 8, 30)? as u32,
    })
}

/// Decodes one fully-reassembled payload. `shipname_24a` is the shipname
/// staged from a prior type-24 Part A, consumed only when this payload is a
/// type-24 Part B.
pub fn decode(buf: &[u8], bitlen: usize, shipname_24a: Option<String>) -> Result<Decoded> {
    let header = decode_header(buf)?;
    if let Err(e) = check_length(header.msg_type, bitlen) {
        return Ok(Decoded::HeaderOnly(header, e));
    }
    let record = match header.msg_type {
        1..=3 => AisRecord::PositionReport(header, position_report::decode(buf, &header)?),
        4 | 11 => AisRecord::BaseStation(header, base_station_report::decode(buf, &header)?),
        5 => AisRecord::StaticVoyage(
            header,
            static_and_voyage_related_data::decode(buf, bitlen, &header)?,
        ),
        6 => AisRecord::AddressedBinary(header, binary_addressed::decode(buf, bitlen, &header)?),
        7 => AisRecord::BinaryAck(header, binary_acknowledge::decode(buf, bitlen, &header)?),
        8 => AisRecord::BroadcastBinary(header, binary_broadcast_message::decode(buf, bitlen, &header)?),
        9 => AisRecord::SarPosition(
            header,
            standard_aircraft_position_report::decode(buf, &header)?,
        ),
        10 => AisRecord::UtcDateInquiry(header, utc_date_inquiry::decode(buf, &header)?),
        12 => AisRecord::AddressedSafety(
            header,
            addressed_safety_related::decode(buf, bitlen, &header)?,
        ),
        13 => AisRecord::SafetyAck(header, binary_acknowledge::decode(buf, bitlen, &header)?),
        14 => AisRecord::SafetyBroadcast(
            header,
            safety_related_broadcast::decode(buf, bitlen, &header)?,
        ),
        15 => AisRecord::Interrogation(header, interrogation::decode(buf, bitlen, &header)?),
        16 => AisRecord::AssignedMode(
            header,
            assignment_mode_command::decode(buf, bitlen, &header)?,
        ),
        17 => AisRecord::GnssBinary(header, dgnss_broadcast_binary_message::decode(buf, bitlen, &header)?),
        18 => AisRecord::ClassBPosition(
            header,
            standard_class_b_position_report::decode(buf, &header)?,
        ),
        19 => AisRecord::ExtendedClassBPosition(
            header,
            extended_class_b_position_report::decode(buf, &header)?,
        ),
        20 => AisRecord::DataLinkManagement(
            header,
            data_link_management_message::decode(buf, bitlen, &header)?,
        ),
        21 => AisRecord::AidToNavigation(
            header,
            aid_to_navigation_report::decode(buf, bitlen, &header)?,
        ),
        22 => AisRecord::ChannelManagement(header, channel_management::decode(buf, &header)?),
        23 => AisRecord::GroupAssignment(header, group_assignment_command::decode(buf, &header)?),
        24 => match static_data_report::sub_message(buf)? {
            0 => return Ok(Decoded::Partial24AShipname(static_data_report::decode_part_a(buf)?)),
            1 => {
                let shipname = shipname_24a.unwrap_or_default();
                AisRecord::ClassBStatic(header, static_data_report::decode_part_b(buf, &header, shipname)?)
            }
            other => {
                return Err(Error::ReassemblyMismatch {
                    msg: format!("unknown type 24 sub-message {}", other),
                })
            }
        },
        25 => AisRecord::SingleSlotBinary(header, single_slot_binary::decode(buf, bitlen, &header)?),
        26 => AisRecord::MultiSlotBinary(header, multi_slot_binary::decode(buf, bitlen, &header)?),
        other => return Err(Error::UnsupportedType { msg_type: other }),
    };
    Ok(Decoded::Record(record))
}

/// Encodes a full record back into a packed bit buffer, returning the exact
/// bit count written. `buf` must be large enough for the message's maximum
/// size (`MAX_SENTENCE_SIZE_BYTES` in `sentence`, suffices for all types).
pub fn encode(rec: &AisRecord, buf: &mut [u8]) -> Result<usize> {
    Ok(match rec {
        AisRecord::PositionReport(h, m) => position_report::encode(h, m, buf)?,
        AisRecord::BaseStation(h, m) => base_station_report::encode(h, m, buf)?,
        AisRecord::StaticVoyage(h, m) => static_and_voyage_related_data::encode(h, m, buf)?,
        AisRecord::AddressedBinary(h, m) => binary_addressed::encode(h, m, buf)?,
        AisRecord::BinaryAck(h, m) => binary_acknowledge::encode(h, m, buf)?,
        AisRecord::BroadcastBinary(h, m) => binary_broadcast_message::encode(h, m, buf)?,
        AisRecord::SarPosition(h, m) => standard_aircraft_position_report::encode(h, m, buf)?,
        AisRecord::UtcDateInquiry(h, m) => utc_date_inquiry::encode(h, m, buf)?,
        AisRecord::AddressedSafety(h, m) => addressed_safety_related::encode(h, m, buf)?,
        AisRecord::SafetyAck(h, m) => binary_acknowledge::encode(h, m, buf)?,
        AisRecord::SafetyBroadcast(h, m) => safety_related_broadcast::encode(h, m, buf)?,
        AisRecord::Interrogation(h, m) => interrogation::encode(h, m, buf)?,
        AisRecord::AssignedMode(h, m) => assignment_mode_command::encode(h, m, buf)?,
        AisRecord::GnssBinary(h, m) => dgnss_broadcast_binary_message::encode(h, m, buf)?,
        AisRecord::ClassBPosition(h, m) => standard_class_b_position_report::encode(h, m, buf)?,
        AisRecord::ExtendedClassBPosition(h, m) => {
            extended_class_b_position_report::encode(h, m, buf)?
        }
        AisRecord::DataLinkManagement(h, m) => data_link_management_message::encode(h, m, buf)?,
        AisRecord::AidToNavigation(h, m) => aid_to_navigation_report::encode(h, m, buf)?,
        AisRecord::ChannelManagement(h, m) => channel_management::encode(h, m, buf)?,
        AisRecord::GroupAssignment(h, m) => group_assignment_command::encode(h, m, buf)?,
        AisRecord::ClassBStatic(h, m) => static_data_report::encode_part_b(h, m, buf)?,
        AisRecord::SingleSlotBinary(h, m) => single_slot_binary::encode(h, m, buf)?,
        AisRecord::MultiSlotBinary(h, m) => multi_slot_binary::encode(h, m, buf)?,
    })
}
