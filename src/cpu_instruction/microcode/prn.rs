use super::*;

/// # PRN
///
/// Print the numeric value stored in the given register, as a decimal integer
/// followed by a new line.
pub fn prn(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let value = registers.read(reg)?;

    Ok(
        LogLine::new(cpu_instruction, Flow::Next, format!("({})", value))
            .with_output(format!("{}\n", value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_prn() {
        let cpu_instruction =
            CPUInstruction::new(0x03, 0x47, "PRN", AddressingMode::Register([0x00]), prn);
        let (mut memory, mut registers) = get_stuff(0x03, vec![0x47, 0x00]);
        registers.write(0, 8).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(Some("8\n".to_owned()), log_line.output);
        assert_eq!(Flow::Next, log_line.flow);
        assert_eq!("#0x03: (47 00)    PRN  R0       (8)", log_line.to_string());
    }

    #[test]
    fn test_prn_max_value() {
        let cpu_instruction =
            CPUInstruction::new(0x03, 0x47, "PRN", AddressingMode::Register([0x04]), prn);
        let (mut memory, mut registers) = get_stuff(0x03, vec![0x47, 0x04]);
        registers.write(4, 0xff).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(Some("255\n".to_owned()), log_line.output);
    }
}
