//! # lookahead
//!
//! A buffered reader that supports peeking a bounded number of bytes ahead
//! without consuming them.

use std::io::{self, Read};

/// Size of the internal read buffer.
const BUF_SIZE: usize = 1024;

/// Buffered reader over a byte stream with bounded lookahead.
///
/// The reader refills its buffer from the underlying stream whenever fewer
/// than `lookahead` bytes remain buffered, so `peek_ahead` is guaranteed to
/// see at least `lookahead` bytes past the current position while input
/// remains. End of input is reported as `None`.
///
/// Refills block on the underlying reader; all accessors therefore return
/// `io::Result`.
pub struct LookaheadReader<R> {
    inner: R,
    /// Number of bytes the buffer must hold before the current position is
    /// allowed to advance without a refill.
    lookahead: usize,
    buf: Box<[u8; BUF_SIZE]>,
    /// Current position in the read buffer.
    pos: usize,
    /// Number of buffered bytes.
    len: usize,
    /// Set once the underlying reader reports end of input.
    eof: bool,
}

impl<R: Read> LookaheadReader<R> {
    /// Creates a reader with the given lookahead width.
    ///
    /// # Panics
    ///
    /// Panics if `lookahead` does not fit within the internal buffer.
    pub fn new(inner: R, lookahead: usize) -> Self {
        assert!(lookahead < BUF_SIZE, "too large lookahead");
        LookaheadReader {
            inner,
            lookahead,
            buf: Box::new([0; BUF_SIZE]),
            pos: 0,
            len: 0,
            eof: false,
        }
    }

    /// Returns the next byte without consuming it, or `None` at end of input.
    pub fn peek(&mut self) -> io::Result<Option<u8>> {
        self.peek_ahead(0)
    }

    /// Looks `offset` bytes ahead without consuming anything.
    ///
    /// Offsets past the buffered region read as end of input, so peeking
    /// further than the configured lookahead is not reliable.
    pub fn peek_ahead(&mut self, offset: usize) -> io::Result<Option<u8>> {
        self.refill()?;
        if self.pos + offset < self.len {
            Ok(Some(self.buf[self.pos + offset]))
        } else {
            Ok(None)
        }
    }

    /// Consumes and returns the next byte, or `None` at end of input.
    pub fn pop(&mut self) -> io::Result<Option<u8>> {
        self.refill()?;
        if self.pos < self.len {
            let byte = self.buf[self.pos];
            self.pos += 1;
            Ok(Some(byte))
        } else {
            Ok(None)
        }
    }

    /// Skips up to `num` buffered bytes and returns how many were skipped.
    pub fn skip(&mut self, num: usize) -> io::Result<usize> {
        self.refill()?;
        let skipped = num.min(self.len - self.pos);
        self.pos += skipped;
        Ok(skipped)
    }

    /// Returns `true` while more input may be available, i.e. buffered bytes
    /// remain or the underlying reader has not reported end of input.
    pub fn ready(&self) -> bool {
        self.pos < self.len || !self.eof
    }

    /// Refills the buffer if it no longer satisfies the required lookahead.
    fn refill(&mut self) -> io::Result<()> {
        if self.len - self.pos <= self.lookahead && !self.eof {
            if self.len > self.pos {
                self.buf.copy_within(self.pos..self.len, 0);
                self.len -= self.pos;
            } else {
                self.len = 0;
            }
            self.pos = 0;
            let read = self.inner.read(&mut self.buf[self.len..])?;
            if read == 0 {
                self.eof = true;
            }
            self.len += read;
        }
        Ok(())
    }
}

impl<R: Read> Read for LookaheadReader<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }
        self.refill()?;
        let num = out.len().min(self.len - self.pos);
        out[..num].copy_from_slice(&self.buf[self.pos..self.pos + num]);
        self.pos += num;
        Ok(num)
    }
}
