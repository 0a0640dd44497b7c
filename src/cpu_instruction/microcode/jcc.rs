use super::*;

/// Jump to the address stored in the given register when the condition
/// holds, go on with the next instruction otherwise.
fn conditional_jump(
    registers: &Registers,
    cpu_instruction: &CPUInstruction,
    condition: bool,
) -> Result<LogLine> {
    let reg = cpu_instruction.addressing_mode.register_a()?;
    let target = registers.read(reg)? as usize;
    let flow = if condition {
        Flow::Jump(target)
    } else {
        Flow::Next
    };
    let pc = match flow {
        Flow::Jump(addr) => addr,
        _ => cpu_instruction.next_address(),
    };

    Ok(LogLine::new(cpu_instruction, flow, format!("[PC=0x{:02x}]", pc)))
}

/// # JEQ
///
/// Jump if the equal flag is set.
pub fn jeq(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    conditional_jump(registers, cpu_instruction, registers.e_flag_is_set())
}

/// # JNE
///
/// Jump if the equal flag is clear.
pub fn jne(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    conditional_jump(registers, cpu_instruction, !registers.e_flag_is_set())
}

/// # JGT
///
/// Jump if the greater-than flag is set.
pub fn jgt(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    conditional_jump(registers, cpu_instruction, registers.g_flag_is_set())
}

/// # JLT
///
/// Jump if the less-than flag is set.
pub fn jlt(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    conditional_jump(registers, cpu_instruction, registers.l_flag_is_set())
}

/// # JLE
///
/// Jump if the less-than flag or the equal flag is set.
pub fn jle(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.l_flag_is_set() || registers.e_flag_is_set();
    conditional_jump(registers, cpu_instruction, condition)
}

/// # JGE
///
/// Jump if the greater-than flag or the equal flag is set.
pub fn jge(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let condition = registers.g_flag_is_set() || registers.e_flag_is_set();
    conditional_jump(registers, cpu_instruction, condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;
    use crate::cpu_instruction::Microcode;

    fn jump_taken(mnemonic: &str, microcode: Microcode, a: u8, b: u8) -> bool {
        let cpu_instruction =
            CPUInstruction::new(0x10, 0x55, mnemonic, AddressingMode::Register([0x03]), microcode);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x55, 0x03]);
        registers.write(3, 0x30).unwrap();
        registers.set_comparison(a, b);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();

        match log_line.flow {
            Flow::Jump(addr) => {
                assert_eq!(0x30, addr);
                true
            }
            Flow::Next => false,
            Flow::Halt => panic!("a jump must not halt"),
        }
    }

    #[test]
    fn test_jeq() {
        assert!(jump_taken("JEQ", jeq, 5, 5));
        assert!(!jump_taken("JEQ", jeq, 3, 9));
        assert!(!jump_taken("JEQ", jeq, 9, 3));
    }

    #[test]
    fn test_jne() {
        assert!(!jump_taken("JNE", jne, 5, 5));
        assert!(jump_taken("JNE", jne, 3, 9));
        assert!(jump_taken("JNE", jne, 9, 3));
    }

    #[test]
    fn test_jgt() {
        assert!(!jump_taken("JGT", jgt, 5, 5));
        assert!(!jump_taken("JGT", jgt, 3, 9));
        assert!(jump_taken("JGT", jgt, 9, 3));
    }

    #[test]
    fn test_jlt() {
        assert!(!jump_taken("JLT", jlt, 5, 5));
        assert!(jump_taken("JLT", jlt, 3, 9));
        assert!(!jump_taken("JLT", jlt, 9, 3));
    }

    #[test]
    fn test_jle() {
        assert!(jump_taken("JLE", jle, 5, 5));
        assert!(jump_taken("JLE", jle, 3, 9));
        assert!(!jump_taken("JLE", jle, 9, 3));
    }

    #[test]
    fn test_jge() {
        assert!(jump_taken("JGE", jge, 5, 5));
        assert!(!jump_taken("JGE", jge, 3, 9));
        assert!(jump_taken("JGE", jge, 9, 3));
    }

    #[test]
    fn test_jeq_log_line() {
        let cpu_instruction =
            CPUInstruction::new(0x10, 0x55, "JEQ", AddressingMode::Register([0x03]), jeq);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x55, 0x03]);
        registers.write(3, 0x30).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(Flow::Next, log_line.flow);
        assert_eq!("#0x10: (55 03)    JEQ  R3       [PC=0x12]", log_line.to_string());
    }
}
