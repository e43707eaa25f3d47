//! A bounds-checked cursor over a datagram.
//!
//! All integers on the BEP 15 wire are in network byte order. The reads go
//! through [`byteorder`] on a [`Cursor`]; a read that does not fit returns
//! [`Error::MalformedPacket`] and leaves the cursor where it was.
use std::io::{self, BufRead, Cursor, Read};

use byteorder::{NetworkEndian, ReadBytesExt};

use crate::udp::error::Error;

#[derive(Debug, Clone)]
pub struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    fn bytes(&self) -> &'a [u8] {
        *self.cursor.get_ref()
    }

    /// Offset of the next byte to read, from the start of the buffer.
    #[must_use]
    pub fn position(&self) -> usize {
        // The cursor is only moved by the reads below, which stop at the end.
        usize::try_from(self.cursor.position()).unwrap_or(usize::MAX)
    }

    /// The bytes that have not been read yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        self.bytes().get(self.position()..).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining().is_empty()
    }

    /// Runs one read on the cursor. On failure the cursor goes back to where
    /// the read started.
    #[track_caller]
    fn read_with<T>(&mut self, read: impl FnOnce(&mut Cursor<&'a [u8]>) -> io::Result<T>) -> Result<T, Error> {
        let start = self.cursor.position();

        match read(&mut self.cursor) {
            Ok(value) => Ok(value),
            Err(err) => {
                self.cursor.set_position(start);

                Err(Error::malformed_packet(format!(
                    "{err} at offset {start}, only {} bytes left",
                    self.remaining().len()
                )))
            }
        }
    }

    /// Returns the next `len` bytes and advances the cursor past them.
    ///
    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if fewer than `len` bytes remain.
    #[track_caller]
    pub fn take(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let remaining = self.remaining();

        let Some(taken) = remaining.get(..len) else {
            return Err(Error::malformed_packet(format!(
                "cannot read {len} bytes at offset {}, only {} left",
                self.position(),
                remaining.len()
            )));
        };

        self.cursor.consume(len);

        Ok(taken)
    }

    /// Advances the cursor past `len` bytes without looking at them.
    ///
    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if fewer than `len` bytes remain.
    #[track_caller]
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.take(len).map(|_| ())
    }

    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if fewer than `N` bytes remain.
    #[track_caller]
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
        self.read_with(|cursor| {
            let mut array = [0u8; N];
            cursor.read_exact(&mut array)?;
            Ok(array)
        })
    }

    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if the buffer is exhausted.
    #[track_caller]
    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.read_with(ReadBytesExt::read_u8)
    }

    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if fewer than 2 bytes remain.
    #[track_caller]
    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.read_with(ReadBytesExt::read_u16::<NetworkEndian>)
    }

    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if fewer than 4 bytes remain.
    #[track_caller]
    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.read_with(ReadBytesExt::read_u32::<NetworkEndian>)
    }

    /// # Errors
    ///
    /// Will return `Error::MalformedPacket` if fewer than 8 bytes remain.
    #[track_caller]
    pub fn read_u64(&mut self) -> Result<u64, Error> {
        self.read_with(ReadBytesExt::read_u64::<NetworkEndian>)
    }
}
