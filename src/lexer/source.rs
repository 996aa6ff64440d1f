use std::{
    collections::VecDeque,
    io::{BufReader, Bytes, Read},
};

use tracing::warn;

/// Adapts a byte reader into a pull-based character source.
///
/// UTF-8 sequences are decoded, so a reader yields the same characters as
/// the equivalent `&str`. A byte that does not start a valid sequence
/// becomes the `char` with the same code. A read error ends the input.
pub struct ByteChars<R: Read> {
    bytes: Bytes<BufReader<R>>,
    /// Bytes read ahead while rejecting an invalid sequence
    pending: VecDeque<u8>,
}

impl<R: Read> ByteChars<R> {
    pub fn new(reader: R) -> Self {
        ByteChars {
            bytes: BufReader::new(reader).bytes(),
            pending: VecDeque::new(),
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        if let Some(byte) = self.pending.pop_front() {
            return Some(byte);
        }

        match self.bytes.next()? {
            Ok(byte) => Some(byte),
            Err(error) => {
                warn!(%error, "read failed, treating as end of input");
                None
            }
        }
    }
}

/// Length of the UTF-8 sequence started by `lead`, or 1 if it starts none.
fn sequence_len(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

impl<R: Read> Iterator for ByteChars<R> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let lead = self.next_byte()?;
        let len = sequence_len(lead);
        if len == 1 {
            return Some(char::from(lead));
        }

        let mut buf = [lead, 0, 0, 0];
        let mut read = 1;
        while read < len {
            match self.next_byte() {
                Some(byte) if byte & 0xC0 == 0x80 => {
                    buf[read] = byte;
                    read += 1;
                }
                Some(byte) => {
                    self.pending.push_front(byte);
                    break;
                }
                None => break,
            }
        }

        if let Some(c) = std::str::from_utf8(&buf[..read])
            .ok()
            .filter(|_| read == len)
            .and_then(|s| s.chars().next())
        {
            return Some(c);
        }

        for &byte in buf[1..read].iter().rev() {
            self.pending.push_front(byte);
        }
        Some(char::from(lead))
    }
}
