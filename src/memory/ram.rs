use super::*;
use log::debug;
use std::cell::Cell;
use std::fmt;

/// The 256 bytes of LS-8 RAM.
///
/// Every access goes through the Memory Address Register (MAR) and the Memory
/// Data Register (MDR) so the last transfer can be inspected while debugging.
pub struct RAM {
    ram: [u8; MEMORY_SIZE],
    stack_floor: usize,
    mar: Cell<u8>,
    mdr: Cell<u8>,
}

impl RAM {
    pub fn new() -> RAM {
        RAM {
            ram: [0x00; MEMORY_SIZE],
            stack_floor: 0,
            mar: Cell::new(0),
            mdr: Cell::new(0),
        }
    }

    pub fn read(&self, addr: usize, len: usize) -> Result<Vec<u8>, MemoryError> {
        if addr + len > self.ram.len() {
            return Err(MemoryError::ReadOutOfRange { addr, len });
        }
        let bytes = self.ram[addr..addr + len].to_vec();

        if let Some(last) = bytes.last() {
            self.mar.set((addr + len - 1) as u8);
            self.mdr.set(*last);
        }

        Ok(bytes)
    }

    pub fn write(&mut self, location: usize, data: &[u8]) -> Result<(), MemoryError> {
        if location + data.len() > self.ram.len() {
            return Err(MemoryError::WriteOutOfRange { addr: location, len: data.len() });
        }

        for (offset, byte) in data.iter().enumerate() {
            self.mar.set((location + offset) as u8);
            self.mdr.set(*byte);
            self.ram[location + offset] = *byte;
        }

        Ok(())
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8, MemoryError> {
        let byte = self.read(addr, 1)?[0];
        debug!("ram_read(0x{:02X}) = 0x{:02X}", addr, byte);

        Ok(byte)
    }

    pub fn write_byte(&mut self, addr: usize, byte: u8) -> Result<(), MemoryError> {
        let old = self.peek(addr);
        self.write(addr, &[byte])?;
        debug!("ram_write(0x{:02X}, 0x{:02X}); was: {:02X?}", addr, byte, old);

        Ok(())
    }

    /// Read a byte without touching MAR / MDR, `None` outside of the memory.
    pub fn peek(&self, addr: usize) -> Option<u8> {
        self.ram.get(addr).copied()
    }

    /// Copy the program at address 0. The stack may not grow below the end of
    /// the loaded program.
    pub fn load(&mut self, program: &[u8]) -> Result<(), MemoryError> {
        self.write(0, program)?;
        self.stack_floor = program.len();

        Ok(())
    }

    pub fn stack_floor(&self) -> usize {
        self.stack_floor
    }

    pub fn get_mar(&self) -> u8 {
        self.mar.get()
    }

    pub fn get_mdr(&self) -> u8 {
        self.mdr.get()
    }

    pub fn get_size(&self) -> usize {
        self.ram.len()
    }
}

impl Default for RAM {
    fn default() -> Self {
        RAM::new()
    }
}

impl fmt::Debug for RAM {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "RAM [{} bytes | MAR:0x{:02x} MDR:0x{:02x} | stack floor:0x{:02x}]",
            self.ram.len(),
            self.mar.get(),
            self.mdr.get(),
            self.stack_floor
        )
    }
}
