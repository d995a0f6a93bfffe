//! Shared test fixtures

use alloc::vec::Vec;

use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation};

/// Variable-advance test font covering `0x20..=0x7E`
///
/// Space is a 3 px sentinel glyph; every other glyph is 5 px wide, 8 px tall
/// and stores 5 bitmap bytes. 'A' uses a real letter shape.
pub(crate) fn test_font() -> Vec<u8> {
    const FIRST: u8 = 0x20;
    const COUNT: u8 = 95;

    let mut table = Vec::new();
    let mut data = Vec::new();
    for code in FIRST..FIRST + COUNT {
        if code == b' ' {
            table.extend_from_slice(&[0xFF, 0xFF, 0, 3]);
            continue;
        }
        let offset = data.len() as u16;
        table.extend_from_slice(&offset.to_be_bytes());
        table.extend_from_slice(&[5, 5]);
        if code == b'A' {
            data.extend_from_slice(&[0x7E, 0x11, 0x11, 0x11, 0x7E]);
        } else {
            data.extend_from_slice(&[code, 0x81, code, 0x81, code]);
        }
    }

    let mut blob = Vec::from([8, FIRST, COUNT]);
    blob.extend_from_slice(&table);
    blob.extend_from_slice(&data);
    blob
}

/// I2C bus that records every write transaction
#[derive(Debug, Default)]
pub(crate) struct RecordingBus {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
    /// Start failing once this many writes have been recorded
    pub fail_after: Option<usize>,
}

impl RecordingBus {
    /// Payload bytes of every data-mode packet, in order
    pub fn data_bytes(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes.first() == Some(&0x40))
            .flat_map(|(_, bytes)| bytes[1..].iter().copied())
            .collect()
    }

    /// Command bytes, in order
    pub fn commands(&self) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes.first() == Some(&0x80))
            .map(|(_, bytes)| bytes[1])
            .collect()
    }

    /// Number of data-mode packets
    pub fn data_packets(&self) -> usize {
        self.writes
            .iter()
            .filter(|(_, bytes)| bytes.first() == Some(&0x40))
            .count()
    }
}

impl ErrorType for RecordingBus {
    type Error = ErrorKind;
}

impl I2c for RecordingBus {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail || self.fail_after.is_some_and(|limit| self.writes.len() >= limit) {
            return Err(ErrorKind::Bus);
        }
        for op in operations {
            if let Operation::Write(bytes) = op {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}
