use super::*;

/// # AND
///
/// Bitwise AND of registers A and B, the result is stored in A.
pub fn and(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::And)
}

/// # OR
pub fn or(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Or)
}

/// # XOR
pub fn xor(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Xor)
}

/// # NOT
///
/// Bitwise NOT of the given register.
pub fn not(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Not)
}

/// # SHL
///
/// Shift register A left by the number of bits held in register B, zeros
/// come in from the right.
pub fn shl(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Shl)
}

/// # SHR
pub fn shr(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Shr)
}
