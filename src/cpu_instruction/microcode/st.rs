use super::*;

/// # ST
///
/// Store the value of register B at the memory address held by register A.
pub fn st(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.addressing_mode.register_a()?;
    let reg_b = cpu_instruction.addressing_mode.register_b()?;
    let address = registers.read(reg_a)? as usize;
    let byte = registers.read(reg_b)?;
    memory.write_byte(address, byte)?;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Next,
        format!("[#0x{:02X}=0x{:02x}]", address, byte),
    ))
}
