use super::*;

/// # LDI
///
/// Set the value of a register to an integer.
pub fn ldi(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let value = cpu_instruction.addressing_mode.immediate()?;
    registers.write(reg, value as usize)?;

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Next,
        format!("[R{}=0x{:02x}]", reg, value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::registers::RegisterError;

    #[test]
    fn test_ldi() {
        let cpu_instruction = CPUInstruction::new(
            0x00,
            0x82,
            "LDI",
            AddressingMode::RegisterImmediate([0x00, 0x08]),
            ldi,
        );
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x82, 0x00, 0x08]);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("LDI".to_owned(), log_line.mnemonic);
        assert_eq!(0x08, registers.read(0).unwrap());
        assert_eq!(Flow::Next, log_line.flow);
        assert_eq!("#0x00: (82 00 08) LDI  R0,#$08  [R0=0x08]", log_line.to_string());
    }

    #[test]
    fn test_ldi_unknown_register() {
        let cpu_instruction = CPUInstruction::new(
            0x00,
            0x82,
            "LDI",
            AddressingMode::RegisterImmediate([0x09, 0x08]),
            ldi,
        );
        let (mut memory, mut registers) = get_stuff(0x00, vec![0x82, 0x09, 0x08]);
        assert_eq!(
            MicrocodeError::Register(RegisterError::OutOfRange(9)),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
    }
}
