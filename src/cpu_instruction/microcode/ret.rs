use super::*;

/// # RET
///
/// Return from subroutine, pop the value from the top of the stack and store
/// it in the program counter.
pub fn ret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let target = registers.stack_pull(memory)? as usize;

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
