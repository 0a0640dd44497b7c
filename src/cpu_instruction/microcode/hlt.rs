use super::*;

/// # HLT
///
/// Halt the CPU.
pub fn hlt(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, Flow::Halt, String::new()))
}
