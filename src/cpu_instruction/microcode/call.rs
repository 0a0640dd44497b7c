use super::*;

/// # CALL
///
/// Calls a subroutine at the address stored in the register. The address of
/// the instruction following CALL is pushed on the stack so RET can get back
/// to it.
pub fn call(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let target = registers.read(reg)? as usize;
    registers.stack_push_address(memory, cpu_instruction.next_address())?;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Jump(target),
        format!(
            "[PC=0x{:02x}][SP=0x{:02x}]",
            target,
            registers.get_stack_pointer()
        ),
    ))
}
