use super::memory;
use super::memory::RAM as Memory;
use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, ResolutionError>;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum ResolutionError {
    Operand(AddressingMode, usize), // addressing mode, operand position
    Memory(memory::MemoryError),
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ResolutionError::Operand(addressing_mode, position) => write!(
                f,
                "addressing mode '{:?}' has no operand at position {}",
                addressing_mode, position
            ),
            ResolutionError::Memory(e) => {
                write!(f, "memory error during operands resolution: {}", e)
            }
        }
    }
}

impl error::Error for ResolutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<memory::MemoryError> for ResolutionError {
    fn from(err: memory::MemoryError) -> ResolutionError {
        ResolutionError::Memory(err)
    }
}

/// Shape of the operands following an opcode, as declared in the opcode
/// table. Solving a shape against memory gives the `AddressingMode` holding
/// the actual operand bytes.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum OperandShape {
    Implied,
    Register,
    RegisterPair,
    RegisterImmediate,
}

impl OperandShape {
    pub fn len(&self) -> usize {
        match *self {
            OperandShape::Implied => 0,
            OperandShape::Register => 1,
            OperandShape::RegisterPair | OperandShape::RegisterImmediate => 2,
        }
    }

    pub fn solve(&self, opcode_address: usize, memory: &Memory) -> Result<AddressingMode> {
        let bytes = memory.read(opcode_address + 1, self.len())?;
        let mode = match *self {
            OperandShape::Implied => AddressingMode::Implied,
            OperandShape::Register => AddressingMode::Register([bytes[0]]),
            OperandShape::RegisterPair => AddressingMode::RegisterPair([bytes[0], bytes[1]]),
            OperandShape::RegisterImmediate => {
                AddressingMode::RegisterImmediate([bytes[0], bytes[1]])
            }
        };

        Ok(mode)
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Implied,
    Register([u8; 1]),
    RegisterPair([u8; 2]),
    RegisterImmediate([u8; 2]),
}

impl AddressingMode {
    pub fn get_operands(&self) -> Vec<u8> {
        match *self {
            AddressingMode::Implied => vec![],
            AddressingMode::Register(v) => v.to_vec(),
            AddressingMode::RegisterPair(v) => v.to_vec(),
            AddressingMode::RegisterImmediate(v) => v.to_vec(),
        }
    }

    /// Index of the first register operand.
    pub fn register_a(&self) -> Result<usize> {
        match *self {
            AddressingMode::Register([r])
            | AddressingMode::RegisterPair([r, _])
            | AddressingMode::RegisterImmediate([r, _]) => Ok(r as usize),
            AddressingMode::Implied => Err(ResolutionError::Operand(*self, 0)),
        }
    }

    /// Index of the second register operand.
    pub fn register_b(&self) -> Result<usize> {
        match *self {
            AddressingMode::RegisterPair([_, r]) => Ok(r as usize),
            _ => Err(ResolutionError::Operand(*self, 1)),
        }
    }

    pub fn immediate(&self) -> Result<u8> {
        match *self {
            AddressingMode::RegisterImmediate([_, value]) => Ok(value),
            _ => Err(ResolutionError::Operand(*self, 1)),
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AddressingMode::Implied => write!(f, ""),
            AddressingMode::Register([r]) => write!(f, "R{}", r),
            AddressingMode::RegisterPair([a, b]) => write!(f, "R{},R{}", a, b),
            AddressingMode::RegisterImmediate([r, value]) => write!(f, "R{},#${:02x}", r, value),
        }
    }
}
