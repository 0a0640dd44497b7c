use super::MEMMAX;
use std::error;
use std::fmt;

/// Access to memory cells outside of the 256 bytes of RAM. Addresses never
/// wrap around.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum MemoryError {
    ReadOutOfRange { addr: usize, len: usize },
    WriteOutOfRange { addr: usize, len: usize },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (operation, addr, len) = match *self {
            MemoryError::ReadOutOfRange { addr, len } => ("read", addr, len),
            MemoryError::WriteOutOfRange { addr, len } => ("write", addr, len),
        };

        write!(
            f,
            "cannot {} {} byte(s) at #0x{:02X}, last address is #0x{:02X}",
            operation, len, addr, MEMMAX
        )
    }
}

impl error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
