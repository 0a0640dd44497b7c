use super::*;

/// # POP
///
/// Copy the value at the top of the stack in the given register and increment
/// the stack pointer.
pub fn pop(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let value = registers.stack_pull(memory)?;
    registers.write(reg, value as usize)?;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Next,
        format!(
            "[R{}=0x{:02x}][SP=0x{:02x}]",
            reg,
            value,
            registers.get_stack_pointer()
        ),
    ))
}
