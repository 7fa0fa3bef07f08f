use std::collections::VecDeque;
use std::io::{ErrorKind, Read};

use tracing::{debug, trace};

use crate::crc8;
use crate::esp3::{Header, SYNC};
use crate::Result;

/// Rebuilds complete ESP3 frames from arbitrarily chunked serial input.
///
/// The reassembler is either idle or accumulating a partial frame. An idle
/// reassembler starts a frame at the first sync byte of a chunk and drops the
/// bytes before it, or the whole chunk if it holds no sync byte. While
/// accumulating, chunks are appended as is.
///
/// A candidate frame whose header fails CRC8H is not a frame start. Its sync
/// byte is dropped and the search continues at the next sync byte, so a stray
/// 0x55 cannot hold the reassembler on a bogus declared length.
///
/// Once the accumulated bytes cover the length declared in the header the frame
/// is emitted. Bytes past the end of the frame are scanned for the next sync byte
/// and accumulation resumes from there, so one chunk may complete several frames.
/// If no sync byte follows, the leftover bytes are discarded and the reassembler
/// goes idle.
#[derive(Debug, Default, Clone)]
pub struct Reassembler {
    buf: Vec<u8>,
}

impl Reassembler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no partial frame is buffered.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of bytes of the partial frame buffered so far.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.buf.len()
    }

    /// Discard any partial frame.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    /// Add a chunk of input, returning the frames it completed in stream order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Vec<u8>> {
        trace!(len = chunk.len(), pending = self.buf.len(), "chunk");
        let mut chunk = chunk;
        if self.is_idle() {
            match chunk.iter().position(|&b| b == SYNC) {
                Some(0) => (),
                Some(idx) => {
                    debug!(dropped = idx, "skipping bytes before sync byte");
                    chunk = &chunk[idx..];
                }
                None => {
                    if !chunk.is_empty() {
                        debug!(len = chunk.len(), "dropping chunk without sync byte");
                    }
                    return Vec::new();
                }
            }
        }
        self.buf.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while self.buf.len() >= Header::LEN {
            if !crc8::verify(self.buf[5], &self.buf[1..5]) {
                debug!("header CRC mismatch, not a frame start");
                self.buf.drain(..1);
                self.resync();
                continue;
            }
            let Some(header) = Header::decode(&self.buf) else {
                break;
            };
            let frame_len = header.frame_len();
            if self.buf.len() < frame_len {
                break;
            }
            let rest = self.buf.split_off(frame_len);
            let frame = std::mem::replace(&mut self.buf, rest);
            trace!(len = frame.len(), packet_type = header.packet_type, "frame");
            frames.push(frame);
            self.resync();
        }
        frames
    }

    /// Move to the next sync byte in the buffered bytes, if any.
    fn resync(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        match self.buf.iter().position(|&b| b == SYNC) {
            Some(0) => (),
            Some(idx) => {
                debug!(dropped = idx, "skipping bytes before next sync byte");
                self.buf.drain(..idx);
            }
            None => {
                debug!(dropped = self.buf.len(), "no sync byte left");
                self.buf.clear();
            }
        }
    }
}

/// Iterates over the frames reassembled from a reader. Created by [read_frames].
pub struct FrameIter<R>
where
    R: Read,
{
    reader: R,
    reassembler: Reassembler,
    chunk: Vec<u8>,
    ready: VecDeque<Vec<u8>>,
    done: bool,
}

impl<R> Iterator for FrameIter<R>
where
    R: Read,
{
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(frame) = self.ready.pop_front() {
                return Some(Ok(frame));
            }
            if self.done {
                return None;
            }
            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    if !self.reassembler.is_idle() {
                        debug!(
                            pending = self.reassembler.pending(),
                            "partial frame at end of input"
                        );
                    }
                    self.done = true;
                }
                Ok(n) => self.ready.extend(self.reassembler.push(&self.chunk[..n])),
                Err(err) if err.kind() == ErrorKind::Interrupted => (),
                Err(err) => {
                    self.done = true;
                    return Some(Err(err.into()));
                }
            }
        }
    }
}

/// Creates an iterator over the ESP3 frames in `reader`.
///
/// The reader is consumed `chunk_size` bytes at a time and every read is pushed
/// into a [Reassembler] as one chunk, mirroring how a serial port delivers data.
/// A partial frame at the end of the input is dropped.
///
/// # Errors
/// A read error is produced once, after which the iterator ends.
pub fn read_frames<R>(reader: R, chunk_size: usize) -> FrameIter<R>
where
    R: Read,
{
    FrameIter {
        reader,
        reassembler: Reassembler::new(),
        chunk: vec![0u8; chunk_size.max(1)],
        ready: VecDeque::new(),
        done: false,
    }
}
