use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};

use crate::code::Code;

/// Packs bits into bytes, least significant bit first.
pub struct BitWriter<W: Write> {
    index: u8,
    current: u8,
    bytes_written: u64,
    sink: BufWriter<W>,
}

impl<W: Write> BitWriter<W> {
    pub fn new(sink: W) -> Self {
        BitWriter {
            index: 0,
            current: 0,
            bytes_written: 0,
            sink: BufWriter::new(sink),
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        if bit {
            self.current |= 1 << self.index;
        }
        self.index += 1;
        if self.index == 8 {
            self.emit()?;
        }
        Ok(())
    }

    pub fn write_code(&mut self, code: &Code) -> io::Result<()> {
        for bit in code.bits() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    fn emit(&mut self) -> io::Result<()> {
        self.sink.write_all(&[self.current])?;
        self.bytes_written += 1;
        self.current = 0;
        self.index = 0;
        Ok(())
    }

    /// Bytes handed to the sink so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Emits the pending byte, even if it holds no bits, and returns the
    /// sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.emit()?;
        self.sink.into_inner().map_err(|e| e.into_error())
    }
}

/// Reads bits back in the order [`BitWriter`] wrote them.
pub struct BitReader<R: Read> {
    index: u8,
    current: u8,
    at_end: bool,
    source: BufReader<R>,
}

impl<R: Read> BitReader<R> {
    /// Loads the first byte right away, so an empty source is at its end
    /// before any bit is read.
    pub fn new(source: R) -> io::Result<Self> {
        let mut reader = BitReader {
            index: 0,
            current: 0,
            at_end: false,
            source: BufReader::new(source),
        };
        reader.load()?;
        Ok(reader)
    }

    fn load(&mut self) -> io::Result<()> {
        let mut buf = [0u8];
        loop {
            match self.source.read(&mut buf) {
                Ok(0) => {
                    self.at_end = true;
                    self.current = 0;
                    return Ok(());
                }
                Ok(_) => {
                    self.current = buf[0];
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    pub fn read_bit(&mut self) -> io::Result<bool> {
        let bit = (self.current >> self.index) & 0x01 == 1;
        self.index += 1;
        if self.index == 8 {
            self.load()?;
            self.index = 0;
        }
        Ok(bit)
    }

    /// True once a load has found nothing left. Not predictive: after the
    /// last byte is loaded this stays false until its bits are consumed.
    pub fn at_end(&self) -> bool {
        self.at_end
    }
}
