use crate::addressing_mode;
use crate::alu;
use crate::memory;
use crate::registers;
use std::error;
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MicrocodeError {
    // ↓ when an access falls out of the 256 bytes of memory
    MemoryOverflow(memory::MemoryError),
    Resolution(addressing_mode::ResolutionError),
    Register(registers::RegisterError),
    Stack(registers::StackError),
    Alu(alu::AluError),
}

pub type Result<T> = std::result::Result<T, MicrocodeError>;

impl fmt::Display for MicrocodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MicrocodeError::MemoryOverflow(e) => {
                write!(f, "memory overflow during microcode operation: {}", e)
            }
            MicrocodeError::Resolution(e) => {
                write!(f, "resolution error caught in microcode operation: {}", e)
            }
            MicrocodeError::Register(e) => {
                write!(f, "register error caught in microcode operation: {}", e)
            }
            MicrocodeError::Stack(e) => write!(f, "{}", e),
            MicrocodeError::Alu(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for MicrocodeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<addressing_mode::ResolutionError> for MicrocodeError {
    fn from(err: addressing_mode::ResolutionError) -> MicrocodeError {
        MicrocodeError::Resolution(err)
    }
}

impl std::convert::From<memory::MemoryError> for MicrocodeError {
    fn from(err: memory::MemoryError) -> MicrocodeError {
        MicrocodeError::MemoryOverflow(err)
    }
}

impl std::convert::From<registers::RegisterError> for MicrocodeError {
    fn from(err: registers::RegisterError) -> MicrocodeError {
        MicrocodeError::Register(err)
    }
}

impl std::convert::From<registers::StackError> for MicrocodeError {
    fn from(err: registers::StackError) -> MicrocodeError {
        MicrocodeError::Stack(err)
    }
}

impl std::convert::From<alu::AluError> for MicrocodeError {
    fn from(err: alu::AluError) -> MicrocodeError {
        MicrocodeError::Alu(err)
    }
}
