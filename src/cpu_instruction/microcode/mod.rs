#[cfg(test)]
use crate::addressing_mode::*;
use crate::alu::{self, AluOperation};
use crate::cpu_instruction::{CPUInstruction, Flow, LogLine};
use crate::memory::RAM as Memory;
use crate::registers::Registers;

mod error;
pub use error::{MicrocodeError, Result};

mod arithmetic;
mod call;
mod hlt;
mod int;
mod iret;
mod jcc;
mod jmp;
mod ld;
mod ldi;
mod logical;
mod nop;
mod pop;
mod pra;
mod prn;
mod push;
mod ret;
mod st;

pub use arithmetic::{add, cmp, dec, div, inc, modulo, mul, sub};
pub use call::call;
pub use hlt::hlt;
pub use int::int;
pub use iret::iret;
pub use jcc::{jeq, jge, jgt, jle, jlt, jne};
pub use jmp::jmp;
pub use ld::ld;
pub use ldi::ldi;
pub use logical::{and, not, or, shl, shr, xor};
pub use nop::nop;
pub use pop::pop;
pub use pra::pra;
pub use prn::prn;
pub use push::push;
pub use ret::ret;
pub use st::st;

/// Common part of every ALU instruction: hand both register operands to the
/// ALU, unary operations only have one.
fn alu_operation(
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
    operation: AluOperation,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.addressing_mode.register_a()?;
    let reg_b = if operation.is_unary() {
        reg_a
    } else {
        cpu_instruction.addressing_mode.register_b()?
    };
    let result = alu::apply(registers, operation, reg_a, reg_b)?;

    let outcome = match operation {
        AluOperation::Cmp => format!("[FL={}]", registers.format_flags()),
        _ => format!("[R{}=0x{:02x}]", reg_a, result),
    };

    Ok(LogLine::new(cpu_instruction, Flow::Next, outcome))
}
