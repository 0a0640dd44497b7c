use super::*;

/// # INT
///
/// Issue the interrupt number stored in the given register: the matching bit
/// of the interrupt status register (IS) is set.
pub fn int(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let interrupt = registers.read(reg)? & 0x07;
    let status = registers.get_interrupt_status() | (1 << interrupt);
    registers.set_interrupt_status(status);

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Next,
        format!("[IS=0b{:08b}]", status),
    ))
}
