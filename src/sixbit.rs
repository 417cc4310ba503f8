//! Six-bit ASCII text codec, used for names, callsigns, destinations, and
//! safety-message free text.

use crate::bitbuffer::{putbits, ubits};
use crate::errors::Result;

/// The 64-character AIS text alphabet, indexed by 6-bit code.
const ALPHABET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^- !\"#$%&'()*+,-./0123456789:;<=>?";

fn char_to_code(c: u8) -> u8 {
    ALPHABET.iter().position(|&a| a == c).map_or(32, |p| p as u8) // unknown -> space
}

/// Decodes `char_count` six-bit characters starting at `start`, stopping
/// early at the first `@` (code 0), then trimming trailing spaces.
pub fn decode(buf: &[u8], start: usize, char_count: usize) -> Result<String> {
    let mut s = String::with_capacity(char_count);
    for i in 0..char_count {
        let code = ubits(buf, start + i * 6, 6)? as u8;
        if code == 0 {
            break;
        }
        s.push(ALPHABET[code as usize] as char);
    }
    while s.ends_with(' ') {
        s.pop();
    }
    Ok(s)
}

/// Encodes `text` as `char_count` six-bit characters at `start`, padding
/// with spaces; characters outside the alphabet encode as space. Text
/// longer than `char_count` is truncated.
pub fn encode(buf: &mut [u8], start: usize, char_count: usize, text: &str) -> Result<()> {
    let chars: Vec<u8> = text.bytes().collect();
    for i in 0..char_count {
        let code = chars.get(i).map_or(32, |&c| char_to_code(c));
        putbits(buf, start + i * 6, 6, code as u64)?;
    }
    Ok(())
}
