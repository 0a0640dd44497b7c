use super::*;

/// # JMP
///
/// Jump to the address stored in the given register.
pub fn jmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let target = registers.read(reg)? as usize;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Jump(target),
        format!("[PC=0x{:02x}]", target),
    ))
}
