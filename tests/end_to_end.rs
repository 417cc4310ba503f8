//! End-to-end scenarios against literal AIVDM captures, exercising the
//! public decode/encode API the way a caller actually would: one sentence
//! at a time through a single `AssemblyContext`.

use ais::messages::static_data_report;
use ais::record::Header;
use ais::{decode_sentence, encode, AisRecord, AssemblyContext, DecodeOutcome};

#[test]
fn type1_single_part_decodes_and_reencodes() {
    let mut ctx = AssemblyContext::new();
    let line = "!AIVDM,1,1,,A,15RTgt0PAso;90TKcjM8h6g208CQ,0*4A";
    let record = match decode_sentence(line.as_bytes(), &mut ctx) {
        DecodeOutcome::Message(record) => record,
        other => panic!("expected Message, got {:?}", other),
    };
    let (header, report) = match &record {
        AisRecord::PositionReport(header, report) => (header, report),
        other => panic!("expected PositionReport, got {:?}", other),
    };
    assert_eq!(header.msg_type, 1);
    assert_eq!(header.repeat, 0);
    assert_eq!(header.mmsi, 371_798_000);
    assert_eq!(report.nav_status, 0);
    assert_eq!(report.rot_raw, -127);
    assert_eq!(report.sog_tenths, 123);
    assert!(report.accuracy);
    assert_eq!(report.lon_raw, -74_037_230);
    assert_eq!(report.lat_raw, 29_028_980);
    assert_eq!(report.cog_tenths, 2240);
    assert_eq!(report.heading, 215);
    assert_eq!(report.second, 33);

    let sentences = encode(&record).unwrap();
    assert_eq!(sentences, vec![line.to_string()]);
}

#[test]
fn type5_two_part_decodes_and_reencodes() {
    let mut ctx = AssemblyContext::new();
    let part1 = "!AIVDM,2,1,1,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1C";
    let part2 = "!AIVDM,2,2,1,A,88888888880,2*25";

    match decode_sentence(part1.as_bytes(), &mut ctx) {
        DecodeOutcome::Incomplete => {}
        other => panic!("expected Incomplete, got {:?}", other),
    }
    let record = match decode_sentence(part2.as_bytes(), &mut ctx) {
        DecodeOutcome::Message(record) => record,
        other => panic!("expected Message, got {:?}", other),
    };
    let (header, voyage) = match &record {
        AisRecord::StaticVoyage(header, voyage) => (header, voyage),
        other => panic!("expected StaticVoyage, got {:?}", other),
    };
    assert_eq!(header.mmsi, 351_759_000);
    assert_eq!(voyage.imo_number, 9_134_270);
    assert_eq!(voyage.callsign, "3FOF8");
    assert_eq!(voyage.vessel_name, "EVER DIADEM");
    assert_eq!(voyage.ship_type, 70);
    assert_eq!(voyage.dimension_to_bow, 225);
    assert_eq!(voyage.dimension_to_stern, 70);
    assert_eq!(voyage.dimension_to_port, 1);
    assert_eq!(voyage.dimension_to_starboard, 31);
    assert_eq!(voyage.eta_month, 5);
    assert_eq!(voyage.eta_day, 15);
    assert_eq!(voyage.eta_hour, 14);
    assert_eq!(voyage.eta_minute, 0);
    assert_eq!(voyage.draught_tenths, 122);
    assert_eq!(voyage.destination, "NEW YORK");
    assert!(!voyage.dte);

    let sentences = encode(&record).unwrap();
    assert_eq!(sentences, vec![part1.to_string(), part2.to_string()]);
}

#[test]
fn checksum_failure_leaves_context_idle() {
    let mut ctx = AssemblyContext::new();
    let line = b"!AIVDM,1,1,,A,15RTgt0PAso;90TKcjM8h6g208CQ,0*4B";
    match decode_sentence(line, &mut ctx) {
        DecodeOutcome::Error(_) => {}
        other => panic!("expected Error(BadChecksum), got {:?}", other),
    }
    // A fresh single-part sentence still decodes, proving the failed
    // checksum never left the context mid-assembly.
    let line = b"!AIVDM,1,1,,A,15RTgt0PAso;90TKcjM8h6g208CQ,0*4A";
    match decode_sentence(line, &mut ctx) {
        DecodeOutcome::Message(_) => {}
        other => panic!("expected Message, got {:?}", other),
    }
}

#[test]
fn out_of_order_fragments_reject_then_recover() {
    let mut ctx = AssemblyContext::new();
    let part1 = b"!AIVDM,2,1,1,A,55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8,0*1C";
    let part2 = b"!AIVDM,2,2,1,A,88888888880,2*25";

    match decode_sentence(part2, &mut ctx) {
        DecodeOutcome::Error(_) => {}
        other => panic!("expected Error(ReassemblyMismatch), got {:?}", other),
    }
    match decode_sentence(part1, &mut ctx) {
        DecodeOutcome::Incomplete => {}
        other => panic!("expected Incomplete, got {:?}", other),
    }
}

#[test]
fn type24_part_a_then_part_b_merges_shipname() {
    let header_a = Header {
        msg_type: 24,
        repeat: 0,
        mmsi: 257_855_600,
    };
    let mut buf_a = [0u8; 20];
    static_data_report::encode_part_a(&header_a, "EXAMPLE             ", &mut buf_a).unwrap();
    let sentence_a = armor_sentence(&buf_a, static_data_report::BITS_PART_A);

    let header_b = header_a;
    let msg_b = static_data_report::ClassBStatic {
        shipname: String::new(),
        ship_type: 30,
        vendor_id: "SMT".to_string(),
        callsign: "LG6584".to_string(),
        reference: static_data_report::VesselReference::Dimensions {
            dimension_to_bow: 5,
            dimension_to_stern: 8,
            dimension_to_port: 2,
            dimension_to_starboard: 2,
        },
    };
    let mut buf_b = [0u8; 21];
    static_data_report::encode_part_b(&header_b, &msg_b, &mut buf_b).unwrap();
    let sentence_b = armor_sentence(&buf_b, static_data_report::BITS_PART_B);

    let mut ctx = AssemblyContext::new();
    match decode_sentence(sentence_a.as_bytes(), &mut ctx) {
        DecodeOutcome::Partial24A => {}
        other => panic!("expected Partial24A, got {:?}", other),
    }
    let record = match decode_sentence(sentence_b.as_bytes(), &mut ctx) {
        DecodeOutcome::Message(record) => record,
        other => panic!("expected Message, got {:?}", other),
    };
    match record {
        AisRecord::ClassBStatic(header, msg) => {
            assert_eq!(header.mmsi, 257_855_600);
            assert_eq!(msg.shipname, "EXAMPLE");
            assert_eq!(msg.callsign, "LG6584");
            assert_eq!(
                msg.reference,
                static_data_report::VesselReference::Dimensions {
                    dimension_to_bow: 5,
                    dimension_to_stern: 8,
                    dimension_to_port: 2,
                    dimension_to_starboard: 2,
                }
            );
        }
        other => panic!("expected ClassBStatic, got {:?}", other),
    }
}

#[test]
fn type24_auxiliary_mmsi_carries_mothership() {
    let header_a = Header {
        msg_type: 24,
        repeat: 0,
        mmsi: 985_380_196,
    };
    assert!(static_data_report::is_auxiliary_mmsi(header_a.mmsi));
    let mut buf_a = [0u8; 20];
    static_data_report::encode_part_a(&header_a, "AUX TENDER", &mut buf_a).unwrap();
    let sentence_a = armor_sentence(&buf_a, static_data_report::BITS_PART_A);

    let msg_b = static_data_report::ClassBStatic {
        shipname: String::new(),
        ship_type: 37,
        vendor_id: "VSP".to_string(),
        callsign: String::new(),
        reference: static_data_report::VesselReference::MothershipMmsi(367_123_456),
    };
    let mut buf_b = [0u8; 21];
    static_data_report::encode_part_b(&header_a, &msg_b, &mut buf_b).unwrap();
    let sentence_b = armor_sentence(&buf_b, static_data_report::BITS_PART_B);

    let mut ctx = AssemblyContext::new();
    assert!(matches!(
        decode_sentence(sentence_a.as_bytes(), &mut ctx),
        DecodeOutcome::Partial24A
    ));
    match decode_sentence(sentence_b.as_bytes(), &mut ctx) {
        DecodeOutcome::Message(AisRecord::ClassBStatic(_, msg)) => {
            assert_eq!(
                msg.reference,
                static_data_report::VesselReference::MothershipMmsi(367_123_456)
            );
        }
        other => panic!("expected ClassBStatic, got {:?}", other),
    }
}

#[test]
fn type24_public_encode_roundtrips_through_decode_sentence() {
    let header = Header {
        msg_type: 24,
        repeat: 0,
        mmsi: 257_855_600,
    };
    let record = AisRecord::ClassBStatic(
        header,
        static_data_report::ClassBStatic {
            shipname: "WAN SHUN HANG 6868".to_string(),
            ship_type: 30,
            vendor_id: "SMT".to_string(),
            callsign: "LG6584".to_string(),
            reference: static_data_report::VesselReference::Dimensions {
                dimension_to_bow: 5,
                dimension_to_stern: 8,
                dimension_to_port: 2,
                dimension_to_starboard: 2,
            },
        },
    );

    let sentences = encode(&record).unwrap();
    assert_eq!(sentences.len(), 2, "expected separate Part A and Part B sentences");

    let mut ctx = AssemblyContext::new();
    match decode_sentence(sentences[0].as_bytes(), &mut ctx) {
        DecodeOutcome::Partial24A => {}
        other => panic!("expected Partial24A from re-encoded Part A, got {:?}", other),
    }
    match decode_sentence(sentences[1].as_bytes(), &mut ctx) {
        DecodeOutcome::Message(round_tripped) => assert_eq!(round_tripped, record),
        other => panic!("expected Message, got {:?}", other),
    }
}

#[test]
fn boundary_pad_bits_are_discarded_before_field_offsets() {
    let mut ctx = AssemblyContext::new();
    // 11 armored characters -> 66 raw bits; pad=3 leaves a 63-bit payload
    // (type 14's safety broadcast header is 40 bits, so 63 is a valid,
    // non-multiple-of-6 body length).
    let line = b"!AIVDM,1,1,,A,>1mg=5@td00,3*78";
    match decode_sentence(line, &mut ctx) {
        DecodeOutcome::Message(AisRecord::SafetyBroadcast(header, msg)) => {
            assert_eq!(header.msg_type, 14);
            assert_eq!(header.mmsi, 123_456_789);
            assert_eq!(msg.text, "OK");
        }
        other => panic!("expected SafetyBroadcast, got {:?}", other),
    }
}

/// Armors a fixed-length payload into a single complete AIVDM sentence,
/// computing its checksum the same way the framer verifies one.
fn armor_sentence(buf: &[u8], bitlen: usize) -> String {
    let (payload, pad) = ais::armor::armor_from_bits(buf, bitlen).unwrap();
    let body = format!("AIVDM,1,1,,A,{},{}", payload, pad);
    let checksum = body.bytes().fold(0u8, |acc, b| acc ^ b);
    format!("!{}*{:02X}", body, checksum)
}
