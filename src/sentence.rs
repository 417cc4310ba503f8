//! The AIVDM/AIVDO sentence framer: parses the comma-delimited NMEA-0183
//! envelope with `nom`, verifies the checksum, and accumulates one or more
//! fragments' armored payload into a single bit buffer before handing it to
//! [`crate::messages::decode`].

use crate::armor::{self, unarmor_into};
use crate::errors::{Error, Result};
use crate::messages::{self, Decoded};
use crate::record::AisRecord;
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_until};
use nom::character::complete::{anychar, digit1};
use nom::combinator::{map, map_res, opt, peek, verify};
use nom::number::complete::hex_u32;
use nom::sequence::{delimited, terminated};
use nom::IResult;

pub const MAX_SENTENCE_SIZE_BYTES: usize = 384;
/// The assembly buffer is sized for the longest message this crate decodes
/// (type 26, up to 1004 bits) plus headroom for a handful of fragments.
const ASSEMBLY_BUF_BYTES: usize = 256;

/// Talker ID for the AIS station, identifying what kind of station produced
/// the sentence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TalkerId {
    AB,
    AD,
    AI,
    AN,
    AR,
    AS,
    AT,
    AX,
    BS,
    SA,
    Unknown,
}

impl From<&[u8]> for TalkerId {
    fn from(talker_id: &[u8]) -> Self {
        match talker_id {
            b"AB" => Self::AB,
            b"AD" => Self::AD,
            b"AI" => Self::AI,
            b"AN" => Self::AN,
            b"AR" => Self::AR,
            b"AS" => Self::AS,
            b"AT" => Self::AT,
            b"AX" => Self::AX,
            b"BS" => Self::BS,
            b"SA" => Self::SA,
            _ => Self::Unknown,
        }
    }
}

/// Whether the sentence reports another vessel (VDM) or this station's own
/// transmission (VDO).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportType {
    Vdm,
    Vdo,
    Unknown,
}

impl From<&[u8]> for ReportType {
    fn from(typ: &[u8]) -> Self {
        match typ {
            b"VDM" => Self::Vdm,
            b"VDO" => Self::Vdo,
            _ => Self::Unknown,
        }
    }
}

/// One parsed NMEA-0183 envelope, before payload reassembly.
#[derive(Debug)]
struct Envelope<'a> {
    talker_id: TalkerId,
    report_type: ReportType,
    num_fragments: u8,
    fragment_number: u8,
    sequence_id: Option<u8>,
    channel: Option<char>,
    payload: &'a [u8],
    fill_bits: u8,
}

fn parse_numeric_string(data: &[u8]) -> IResult<&[u8], &str> {
    map_res(digit1, std::str::from_utf8)(data)
}

fn parse_u8_digit(data: &[u8]) -> IResult<&[u8], u8> {
    map_res(parse_numeric_string, std::str::FromStr::from_str)(data)
}

fn parse_envelope(data: &[u8]) -> IResult<&[u8], Envelope> {
    let (data, talker_id) = map(take(2u8), Into::into)(data)?;
    let (data, report_type) = map(take(3u8), Into::into)(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, num_fragments) = parse_u8_digit(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, fragment_number) = parse_u8_digit(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, sequence_id) = opt(parse_u8_digit)(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, channel_bytes) = take_until(",")(data)?;
    let (_, channel) = opt(anychar)(channel_bytes)?;
    let (data, _) = tag(",")(data)?;
    let (data, payload) = take_until(",")(data)?;
    let (data, _) = tag(",")(data)?;
    let (data, fill_bits) = verify(parse_u8_digit, |val| *val < 6)(data)?;
    Ok((
        data,
        Envelope {
            talker_id,
            report_type,
            num_fragments,
            fragment_number,
            sequence_id,
            channel,
            payload,
            fill_bits,
        },
    ))
}

fn parse_nmea_sentence(data: &[u8]) -> IResult<&[u8], (&[u8], Envelope, u8)> {
    let (data, _) = opt(delimited(tag("\\"), take_until("\\"), tag("\\")))(data)?;
    let (data, _) = alt((tag("!"), tag("$")))(data)?;
    let (data, raw) = peek(take_until("*"))(data)?;
    let (data, envelope) = terminated(parse_envelope, tag("*"))(data)?;
    let (data, checksum) = verify(hex_u32, |val| val <= &0xff)(data)?;
    Ok((data, (raw, envelope, checksum as u8)))
}

fn check_checksum(sentence: &[u8], expected: u8) -> Result<()> {
    let computed = sentence.iter().fold(0u8, |acc, &b| acc ^ b);
    if computed != expected {
        Err(Error::BadChecksum {
            expected,
            found: computed,
        })
    } else {
        Ok(())
    }
}

/// Where a multi-fragment reassembly currently stands.
#[derive(Clone, Debug, Eq, PartialEq)]
enum AssemblyState {
    Idle,
    Accumulating {
        expected_parts: u8,
        last_part: u8,
        sequence_id: Option<u8>,
    },
}

/// Carries reassembly state across calls to [`decode_sentence`]: the
/// in-progress bit buffer for a fragmented message, and the shipname staged
/// by a type-24 Part A until its Part B arrives.
pub struct AssemblyContext {
    state: AssemblyState,
    bits: [u8; ASSEMBLY_BUF_BYTES],
    bitlen: usize,
    shipname_24a: Option<String>,
}

impl Default for AssemblyContext {
    fn default() -> Self {
        Self {
            state: AssemblyState::Idle,
            bits: [0; ASSEMBLY_BUF_BYTES],
            bitlen: 0,
            shipname_24a: None,
        }
    }
}

impl AssemblyContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The result of feeding one line to [`decode_sentence`].
#[derive(Debug)]
pub enum DecodeOutcome {
    /// A complete message was decoded.
    Message(AisRecord),
    /// More fragments are needed before the message can be decoded.
    Incomplete,
    /// A type-24 Part A was decoded; its shipname is staged in the context
    /// awaiting a matching Part B, and no record was produced.
    Partial24A,
    /// The common header decoded but the payload's length violated its
    /// type's constraint, or the type itself is unsupported. The header is
    /// still valid, so callers can route by MMSI even without a body.
    HeaderOnly(crate::record::Header, Error),
    /// Framing, checksum, reassembly, or message decode failed.
    Error(Error),
}

/// Feeds one line (with or without a trailing CRLF) into the framer.
pub fn decode_sentence(line: &[u8], ctx: &mut AssemblyContext) -> DecodeOutcome {
    let line = trim_trailing_newline(line);
    let (_, (raw, envelope, checksum)) = match parse_nmea_sentence(line) {
        Ok(parsed) => parsed,
        Err(e) => {
            ctx.state = AssemblyState::Idle;
            ctx.bitlen = 0;
            return DecodeOutcome::Error(Error::BadFraming {
                msg: format!("{:?}", e),
            });
        }
    };
    if let Err(e) = check_checksum(raw, checksum) {
        ctx.state = AssemblyState::Idle;
        ctx.bitlen = 0;
        return DecodeOutcome::Error(e);
    }
    if envelope.fragment_number == 1 {
        ctx.bitlen = 0;
        ctx.state = if envelope.num_fragments == 1 {
            AssemblyState::Idle
        } else {
            AssemblyState::Accumulating {
                expected_parts: envelope.num_fragments,
                last_part: 1,
                sequence_id: envelope.sequence_id,
            }
        };
    } else {
        match &mut ctx.state {
            AssemblyState::Accumulating {
                expected_parts,
                last_part,
                sequence_id,
            } => {
                if *sequence_id != envelope.sequence_id {
                    ctx.state = AssemblyState::Idle;
                    return DecodeOutcome::Error(Error::ReassemblyMismatch {
                        msg: "fragment sequence id changed mid-message".to_string(),
                    });
                }
                if envelope.num_fragments != *expected_parts || envelope.fragment_number != *last_part + 1
                {
                    ctx.state = AssemblyState::Idle;
                    return DecodeOutcome::Error(Error::ReassemblyMismatch {
                        msg: format!(
                            "expected fragment {} of {}, got fragment {} of {}",
                            *last_part + 1,
                            expected_parts,
                            envelope.fragment_number,
                            envelope.num_fragments
                        ),
                    });
                }
                *last_part = envelope.fragment_number;
            }
            AssemblyState::Idle => {
                return DecodeOutcome::Error(Error::ReassemblyMismatch {
                    msg: "fragment arrived with no message in progress".to_string(),
                });
            }
        }
    }

    let new_bitlen = match unarmor_into(envelope.payload, &mut ctx.bits, ctx.bitlen) {
        Ok(n) => n,
        Err(e) => {
            ctx.state = AssemblyState::Idle;
            return DecodeOutcome::Error(e);
        }
    };
    let is_last = envelope.fragment_number == envelope.num_fragments;
    if !is_last {
        ctx.bitlen = new_bitlen;
        return DecodeOutcome::Incomplete;
    }
    ctx.state = AssemblyState::Idle;
    ctx.bitlen = new_bitlen.saturating_sub(envelope.fill_bits as usize);

    let staged_name = ctx.shipname_24a.take();
    match messages::decode(&ctx.bits, ctx.bitlen, staged_name) {
        Ok(Decoded::Record(record)) => DecodeOutcome::Message(record),
        Ok(Decoded::Partial24AShipname(name)) => {
            ctx.shipname_24a = Some(name);
            DecodeOutcome::Partial24A
        }
        Ok(Decoded::HeaderOnly(header, e)) => DecodeOutcome::HeaderOnly(header, e),
        Err(e) => DecodeOutcome::Error(e),
    }
}

/// VHF channel stamped on encoded sentences. `AisRecord` carries no channel
/// of its own — which channel a message went out on is a reception detail,
/// not part of the message, and spec.md's non-goals exclude transport
/// concerns — so encoding always uses channel A.
const ENCODE_CHANNEL: char = 'A';

/// Payloads up to this many armored characters fit in one sentence.
const SINGLE_SENTENCE_MAX_CHARS: usize = 62;
/// Longer payloads are split into sentences of this many characters each,
/// with the remainder in the final fragment.
const FRAGMENT_CHARS: usize = 60;

/// Encodes a record into one or more complete AIVDM sentence strings
/// (checksum included, no trailing CRLF), splitting across fragments when
/// the armored payload doesn't fit in a single sentence.
///
/// A type-24 `ClassBStatic` record is special: on the wire its shipname and
/// the rest of its fields travel as two independent sentences (Part A, then
/// Part B), not as fragments of one logical message, so it's encoded as the
/// concatenation of two single-sentence payloads rather than run through the
/// general fragmentation below.
pub fn encode(rec: &AisRecord) -> Result<Vec<String>> {
    if let AisRecord::ClassBStatic(header, msg) = rec {
        let mut buf_a = [0u8; ASSEMBLY_BUF_BYTES];
        let bits_a = messages::static_data_report::encode_part_a(header, &msg.shipname, &mut buf_a)?;
        let mut sentences = bits_to_sentences(&buf_a, bits_a)?;
        let mut buf_b = [0u8; ASSEMBLY_BUF_BYTES];
        let bits_b = messages::static_data_report::encode_part_b(header, msg, &mut buf_b)?;
        sentences.extend(bits_to_sentences(&buf_b, bits_b)?);
        return Ok(sentences);
    }
    let mut buf = [0u8; ASSEMBLY_BUF_BYTES];
    let bitlen = messages::encode(rec, &mut buf)?;
    bits_to_sentences(&buf, bitlen)
}

/// Armors `bitlen` bits from `buf` and splits the result into one or more
/// complete AIVDM sentence strings, fragmenting when the armored payload
/// doesn't fit in a single sentence.
fn bits_to_sentences(buf: &[u8], bitlen: usize) -> Result<Vec<String>> {
    let (armored, final_pad) = armor::armor_from_bits(buf, bitlen)?;
    let chars: Vec<char> = armored.chars().collect();

    let frag_count = if chars.len() <= SINGLE_SENTENCE_MAX_CHARS {
        1
    } else {
        (chars.len() + FRAGMENT_CHARS - 1) / FRAGMENT_CHARS
    };
    let chunk_size = if frag_count == 1 { chars.len() } else { FRAGMENT_CHARS };

    let mut sentences = Vec::with_capacity(frag_count);
    for frag_num in 1..=frag_count {
        let start = (frag_num - 1) * chunk_size;
        let end = (start + chunk_size).min(chars.len());
        let payload: String = chars[start..end].iter().collect();
        let pad = if frag_num == frag_count { final_pad } else { 0 };
        let seq_id = if frag_count == 1 { String::new() } else { "1".to_string() };
        let body = format!(
            "AIVDM,{},{},{},{},{},{}",
            frag_count, frag_num, seq_id, ENCODE_CHANNEL, payload, pad
        );
        let checksum = body.bytes().fold(0u8, |acc, b| acc ^ b);
        sentences.push(format!("!{}*{:02X}", body, checksum));
    }
    Ok(sentences)
}

fn trim_trailing_newline(line: &[u8]) -> &[u8] {
    let mut end = line.len();
    while end > 0 && (line[end - 1] == b'\n' || line[end - 1] == b'\r') {
        end -= 1;
    }
    &line[..end]
}
