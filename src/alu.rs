use crate::registers::{RegisterError, Registers};
use std::error;
use std::fmt;
use std::str::FromStr;

/// Operations of the arithmetic and logic unit. They all take two register
/// operands A and B and store their result in A, but CMP which updates the
/// flags register instead. INC, DEC and NOT do not use B.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AluOperation {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Inc,
    Dec,
    Cmp,
    And,
    Or,
    Xor,
    Not,
    Shl,
    Shr,
}

impl AluOperation {
    pub fn is_unary(&self) -> bool {
        matches!(self, AluOperation::Inc | AluOperation::Dec | AluOperation::Not)
    }

    pub fn mnemonic(&self) -> &'static str {
        match *self {
            AluOperation::Add => "ADD",
            AluOperation::Sub => "SUB",
            AluOperation::Mul => "MUL",
            AluOperation::Div => "DIV",
            AluOperation::Mod => "MOD",
            AluOperation::Inc => "INC",
            AluOperation::Dec => "DEC",
            AluOperation::Cmp => "CMP",
            AluOperation::And => "AND",
            AluOperation::Or => "OR",
            AluOperation::Xor => "XOR",
            AluOperation::Not => "NOT",
            AluOperation::Shl => "SHL",
            AluOperation::Shr => "SHR",
        }
    }
}

impl fmt::Display for AluOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

impl FromStr for AluOperation {
    type Err = AluError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let operation = match name.to_ascii_uppercase().as_str() {
            "ADD" => AluOperation::Add,
            "SUB" => AluOperation::Sub,
            "MUL" => AluOperation::Mul,
            "DIV" => AluOperation::Div,
            "MOD" => AluOperation::Mod,
            "INC" => AluOperation::Inc,
            "DEC" => AluOperation::Dec,
            "CMP" => AluOperation::Cmp,
            "AND" => AluOperation::And,
            "OR" => AluOperation::Or,
            "XOR" => AluOperation::Xor,
            "NOT" => AluOperation::Not,
            "SHL" => AluOperation::Shl,
            "SHR" => AluOperation::Shr,
            _ => return Err(AluError::UnsupportedOperation(name.to_owned())),
        };

        Ok(operation)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AluError {
    UnsupportedOperation(String),
    DivisionByZero,
    Register(RegisterError),
}

impl fmt::Display for AluError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AluError::UnsupportedOperation(name) => {
                write!(f, "Unsupported ALU operation '{}'", name)
            }
            AluError::DivisionByZero => write!(f, "division by zero"),
            AluError::Register(e) => write!(f, "register error in ALU operation: {}", e),
        }
    }
}

impl error::Error for AluError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<RegisterError> for AluError {
    fn from(err: RegisterError) -> AluError {
        AluError::Register(err)
    }
}

/// Apply the operation on registers A and B, the result is masked to 8 bits
/// and stored in A (the flags register for CMP). Returns the new value of A.
pub fn apply(
    registers: &mut Registers,
    operation: AluOperation,
    reg_a: usize,
    reg_b: usize,
) -> Result<u8, AluError> {
    let a = registers.read(reg_a)? as usize;
    let b = if operation.is_unary() {
        0
    } else {
        registers.read(reg_b)? as usize
    };

    let result = match operation {
        AluOperation::Add => a + b,
        AluOperation::Sub => 0x100 + a - b,
        AluOperation::Mul => a * b,
        AluOperation::Div if b == 0 => return Err(AluError::DivisionByZero),
        AluOperation::Div => a / b,
        AluOperation::Mod if b == 0 => return Err(AluError::DivisionByZero),
        AluOperation::Mod => a % b,
        AluOperation::Inc => a + 1,
        AluOperation::Dec => a + 0xff,
        AluOperation::Cmp => {
            registers.set_comparison(a as u8, b as u8);
            return Ok(a as u8);
        }
        AluOperation::And => a & b,
        AluOperation::Or => a | b,
        AluOperation::Xor => a ^ b,
        AluOperation::Not => !a,
        AluOperation::Shl if b >= 8 => 0,
        AluOperation::Shl => a << b,
        AluOperation::Shr if b >= 8 => 0,
        AluOperation::Shr => a >> b,
    };
    registers.write(reg_a, result)?;

    Ok(registers.read(reg_a)?)
}

/// Same as `apply` with the operation given by its mnemonic.
pub fn apply_named(
    registers: &mut Registers,
    name: &str,
    reg_a: usize,
    reg_b: usize,
) -> Result<u8, AluError> {
    apply(registers, name.parse()?, reg_a, reg_b)
}
