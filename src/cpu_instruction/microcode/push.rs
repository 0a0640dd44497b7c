use super::*;

/// # PUSH
///
/// Decrement the stack pointer and copy the value of the given register at
/// the address it points to.
pub fn push(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let value = registers.read(reg)?;
    registers.stack_push(memory, value)?;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Next,
        format!("[SP=0x{:02x}]", registers.get_stack_pointer()),
    ))
}
