use super::*;

/// # NOP
///
/// No operation, the program counter moves to the next instruction.
pub fn nop(
    _memory: &mut Memory,
    _registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    Ok(LogLine::new(cpu_instruction, Flow::Next, String::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_nop() {
        let cpu_instruction = CPUInstruction::new(0x10, 0x00, "NOP", AddressingMode::Implied, nop);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x00]);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!("NOP".to_owned(), log_line.mnemonic);
        assert_eq!(Flow::Next, log_line.flow);
        assert_eq!([0, 0, 0, 0, 0, 0, 0, 0xf4], registers.general_purpose());
        assert_eq!("#0x10: (00)       NOP", log_line.to_string());
    }
}
