use super::*;

/// # LD
///
/// Loads register A with the value at the memory address stored in register B.
pub fn ld(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg_a = cpu_instruction.addressing_mode.register_a()?;
    let reg_b = cpu_instruction.addressing_mode.register_b()?;
    let address = registers.read(reg_b)? as usize;
    let byte = memory.read_byte(address)?;
    registers.write(reg_a, byte as usize)?;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Next,
        format!("(#0x{:02X})[R{}=0x{:02x}]", address, reg_a, byte),
    ))
}
