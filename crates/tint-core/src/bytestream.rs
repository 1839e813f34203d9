/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple cursor over an in-memory buffer
//!
//! Reads past the end of the stream do not panic, they return zero,
//! callers are expected to check [`ByteReader::eof`] or [`ByteReader::has`]
//! where that matters.

pub struct ByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

impl<'a> ByteReader<'a> {
    /// Create a new reader starting at the beginning of `stream`
    pub const fn new(stream: &'a [u8]) -> ByteReader<'a> {
        ByteReader {
            stream,
            position: 0
        }
    }

    /// Return true if at least `num` bytes remain
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }

    /// Return true if no bytes remain
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }

    /// Number of bytes left in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }

    /// Current offset into the stream
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Read a single byte and advance, returns 0 at the end of the stream
    #[inline]
    pub fn get_u8(&mut self) -> u8 {
        let byte = self.peek_u8();
        self.position += usize::from(!self.eof());
        byte
    }

    /// Look at the next byte without advancing, returns 0 at the end
    #[inline]
    pub fn peek_u8(&self) -> u8 {
        self.stream.get(self.position).copied().unwrap_or(0)
    }

    /// Move the cursor back by `num` bytes, saturating at the start
    #[inline]
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Move the cursor forward by `num` bytes, saturating at the end
    #[inline]
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }

    /// Return every byte that has not been read yet
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.stream[self.position.min(self.stream.len())..]
    }
}
