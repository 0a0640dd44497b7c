use super::*;

/// # PRA
///
/// Print the ASCII character corresponding to the value of the given register.
pub fn pra(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let character = registers.read(reg)? as char;

    Ok(
        LogLine::new(cpu_instruction, Flow::Next, format!("({:?})", character))
            .with_output(character.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_pra() {
        let cpu_instruction =
            CPUInstruction::new(0x10, 0x48, "PRA", AddressingMode::Register([0x02]), pra);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x48, 0x02]);
        registers.write(2, 0x41).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(Some("A".to_owned()), log_line.output);
        assert_eq!("#0x10: (48 02)    PRA  R2       ('A')", log_line.to_string());
    }
}
