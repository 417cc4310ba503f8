//! The decoded-message data model: the common header every AIS message
//! shares, and the tagged union of all message bodies this crate
//! understands.

use crate::messages::{
    AddressedSafetyRelated, AidToNavigationReport, AssignedModeCommand, BaseStationReport,
    BinaryAck, BroadcastBinary, ChannelManagement, ClassBPositionReport, ClassBStatic,
    DataLinkManagement, ExtendedClassBPositionReport, GnssBinary, GroupAssignmentCommand,
    Interrogation, MultiSlotBinary, PositionReport, SafetyBroadcast, SarPositionReport,
    SingleSlotBinary, StaticAndVoyage, UtcDateInquiry,
};
use crate::messages::binary_addressed::AddressedBinary;

/// Fields common to every AIS message, regardless of type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Header {
    pub msg_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
}

/// A fully decoded AIS message, tagged by type.
#[derive(Clone, Debug, PartialEq)]
pub enum AisRecord {
    /// Types 1, 2, 3: scheduled and assigned position reports.
    PositionReport(Header, PositionReport),
    /// Types 4, 11: base station report and UTC/date response.
    BaseStation(Header, BaseStationReport),
    /// Type 5: static and voyage related data.
    StaticVoyage(Header, StaticAndVoyage),
    /// Type 6: binary addressed message.
    AddressedBinary(Header, AddressedBinary),
    /// Type 7: binary acknowledge.
    BinaryAck(Header, BinaryAck),
    /// Type 8: binary broadcast message.
    BroadcastBinary(Header, BroadcastBinary),
    /// Type 9: standard SAR aircraft position report.
    SarPosition(Header, SarPositionReport),
    /// Type 10: UTC and date inquiry.
    UtcDateInquiry(Header, UtcDateInquiry),
    /// Type 12: addressed safety related message.
    AddressedSafety(Header, AddressedSafetyRelated),
    /// Type 13: safety related acknowledge.
    SafetyAck(Header, BinaryAck),
    /// Type 14: safety related broadcast message.
    SafetyBroadcast(Header, SafetyBroadcast),
    /// Type 15: interrogation.
    Interrogation(Header, Interrogation),
    /// Type 16: assigned mode command.
    AssignedMode(Header, AssignedModeCommand),
    /// Type 17: GNSS binary broadcast message.
    GnssBinary(Header, GnssBinary),
    /// Type 18: standard class B position report.
    ClassBPosition(Header, ClassBPositionReport),
    /// Type 19: extended class B position report.
    ExtendedClassBPosition(Header, ExtendedClassBPositionReport),
    /// Type 20: data link management message.
    DataLinkManagement(Header, DataLinkManagement),
    /// Type 21: aid-to-navigation report.
    AidToNavigation(Header, AidToNavigationReport),
    /// Type 22: channel management.
    ChannelManagement(Header, ChannelManagement),
    /// Type 23: group assignment command.
    GroupAssignment(Header, GroupAssignmentCommand),
    /// Type 24: class B static data report (parts A and B combined).
    ClassBStatic(Header, ClassBStatic),
    /// Type 25: single slot binary message.
    SingleSlotBinary(Header, SingleSlotBinary),
    /// Type 26: multiple slot binary message.
    MultiSlotBinary(Header, MultiSlotBinary),
}

impl AisRecord {
    pub fn header(&self) -> &Header {
        match self {
            Self::PositionReport(h, _)
            | Self::BaseStation(h, _)
            | Self::StaticVoyage(h, _)
            | Self::AddressedBinary(h, _)
            | Self::BinaryAck(h, _)
            | Self::BroadcastBinary(h, _)
            | Self::SarPosition(h, _)
            | Self::UtcDateInquiry(h, _)
            | Self::AddressedSafety(h, _)
            | Self::SafetyAck(h, _)
            | Self::SafetyBroadcast(h, _)
            | Self::Interrogation(h, _)
            | Self::AssignedMode(h, _)
            | Self::GnssBinary(h, _)
            | Self::ClassBPosition(h, _)
            | Self::ExtendedClassBPosition(h, _)
            | Self::DataLinkManagement(h, _)
            | Self::AidToNavigation(h, _)
            | Self::ChannelManagement(h, _)
            | Self::GroupAssignment(h, _)
            | Self::ClassBStatic(h, _)
            | Self::SingleSlotBinary(h, _)
            | Self::MultiSlotBinary(h, _) => h,
        }
    }
}
