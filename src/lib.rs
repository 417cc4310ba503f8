//! A codec for AIS (Automatic Identification System) messages carried over
//! AIVDM/AIVDO NMEA-0183 sentences, per ITU-R M.1371.
//!
//! [`sentence::decode_sentence`] is the decode entry point: feed it one
//! line at a time along with a caller-owned [`sentence::AssemblyContext`],
//! and it reassembles multi-part messages before handing the completed
//! payload to [`messages::decode`], producing a tagged [`record::AisRecord`].
//! [`sentence::encode`] is the inverse, splitting a record back into one or
//! more armored, checksummed sentence strings.

pub mod armor;
pub mod bitbuffer;
pub mod errors;
pub mod messages;
pub mod record;
pub mod sentence;
pub mod sixbit;

pub use record::AisRecord;
pub use sentence::{decode_sentence, encode, AssemblyContext, DecodeOutcome};

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_MESSAGES: [&'static [u8]; 7] = [
        b"!AIVDM,1,1,,B,13u?etPv2;0n:dDPwUM1U1Cb069D,0*27",
        b"!AIVDM,1,1,,A,15RTgt0PAso;90TKcjM8h6g208CQ,0*4A",
        b"!AIVDM,1,1,,A,403OtVAv6s5l1o?I``E`4I?02<34,0*21",
        b"!AIVDM,1,1,,A,D03Ovk1T1N>5N8ffqMhNfp0,0*68",
        b"!AIVDM,1,1,,B,H6:lEgQL4r1<QDr0P4pN3KSKP00,2*46",
        b"!AIVDM,2,1,1,B,53`soB8000010KSOW<0P4eDp4l6000000000000U0p<24t@P05H3S833CDP00000,0*78",
        b"!AIVDM,2,2,1,B,0000000,2*26",
    ];

    #[test]
    fn sample_sentences_all_decode_without_error() {
        let mut ctx = AssemblyContext::new();
        for line in TEST_MESSAGES.iter() {
            match decode_sentence(*line, &mut ctx) {
                DecodeOutcome::Error(e) => panic!("{:?} failed to decode: {:?}", line, e),
                _ => {}
            }
        }
    }
}
