use super::*;

/// # IRET
///
/// Return from an interrupt handler:
///
/// * registers R6 to R0 are popped from the stack in that order,
/// * the flags register is popped from the stack,
/// * the program counter is popped from the stack,
/// * interrupts are enabled again.
pub fn iret(
    memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    for reg in (0..=6).rev() {
        let value = registers.stack_pull(memory)?;
        registers.write(reg, value as usize)?;
    }
    let flags = registers.stack_pull(memory)?;
    registers.set_flags_register(flags);
    let target = registers.stack_pull(memory)? as usize;
    registers.set_interrupts_enabled(true);

    Ok(LogLine::new(
        cpu_instruction,
        Flow::Jump(target),
        format!(
            "[PC=0x{:02x}][SP=0x{:02x}][FL={}]",
            target,
            registers.get_stack_pointer(),
            registers.format_flags()
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_iret() {
        let cpu_instruction =
            CPUInstruction::new(0x30, 0x13, "IRET", AddressingMode::Implied, iret);
        let (mut memory, mut registers) = get_stuff(0x30, vec![0x13]);
        // PC, FL then R0 to R6 as pushed by the interrupt sequence
        memory
            .write(0xeb, &[0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x10, 0b001, 0x12])
            .unwrap();
        registers.set_stack_pointer(0xeb);
        registers.set_interrupts_enabled(false);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(
            [0x10, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0xf4],
            registers.general_purpose()
        );
        assert!(registers.e_flag_is_set());
        assert!(registers.interrupts_enabled());
        assert_eq!(Flow::Jump(0x12), log_line.flow);
        assert_eq!("#0x30: (13)       IRET          [PC=0x12][SP=0xf4][FL=lgE]", log_line.to_string());
    }
}
