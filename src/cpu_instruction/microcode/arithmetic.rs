use super::*;

/// # ADD
///
/// Add the value of register B to register A, the result is stored in A.
pub fn add(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Add)
}

/// # SUB
pub fn sub(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Sub)
}

/// # MUL
pub fn mul(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Mul)
}

/// # DIV
///
/// Divide register A by register B. A zero divisor leaves both registers
/// untouched and raises a division by zero error.
pub fn div(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Div)
}

/// # MOD
///
/// Remainder of register A divided by register B, same rule as DIV when B is
/// zero.
pub fn modulo(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Mod)
}

/// # INC
pub fn inc(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Inc)
}

/// # DEC
pub fn dec(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Dec)
}

/// # CMP
///
/// Compare registers A and B and set the flags register accordingly:
///
/// * E when A equals B,
/// * L when A is less than B,
/// * G when A is greater than B.
pub fn cmp(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    alu_operation(registers, cpu_instruction, AluOperation::Cmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu::AluError;
    use crate::cpu_instruction::cpu_instruction::tests::get_stuff;

    #[test]
    fn test_add() {
        let cpu_instruction = CPUInstruction::new(
            0x10,
            0xa0,
            "ADD",
            AddressingMode::RegisterPair([0x00, 0x01]),
            add,
        );
        let (mut memory, mut registers) = get_stuff(0x10, vec![0xa0, 0x00, 0x01]);
        registers.write(0, 200).unwrap();
        registers.write(1, 100).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0x2c, registers.read(0).unwrap());
        assert_eq!(Flow::Next, log_line.flow);
        assert_eq!("#0x10: (a0 00 01) ADD  R0,R1    [R0=0x2c]", log_line.to_string());
    }

    #[test]
    fn test_mul() {
        let cpu_instruction = CPUInstruction::new(
            0x10,
            0xa2,
            "MUL",
            AddressingMode::RegisterPair([0x00, 0x01]),
            mul,
        );
        let (mut memory, mut registers) = get_stuff(0x10, vec![0xa2, 0x00, 0x01]);
        registers.write(0, 8).unwrap();
        registers.write(1, 9).unwrap();
        cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(72, registers.read(0).unwrap());
    }

    #[test]
    fn test_div_by_zero() {
        let cpu_instruction = CPUInstruction::new(
            0x10,
            0xa3,
            "DIV",
            AddressingMode::RegisterPair([0x00, 0x01]),
            div,
        );
        let (mut memory, mut registers) = get_stuff(0x10, vec![0xa3, 0x00, 0x01]);
        registers.write(0, 42).unwrap();
        assert_eq!(
            MicrocodeError::Alu(AluError::DivisionByZero),
            cpu_instruction
                .execute(&mut memory, &mut registers)
                .unwrap_err()
        );
        assert_eq!(42, registers.read(0).unwrap());
    }

    #[test]
    fn test_dec_ignores_second_operand() {
        let cpu_instruction =
            CPUInstruction::new(0x10, 0x66, "DEC", AddressingMode::Register([0x02]), dec);
        let (mut memory, mut registers) = get_stuff(0x10, vec![0x66, 0x02]);
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert_eq!(0xff, registers.read(2).unwrap());
        assert_eq!("[R2=0xff]", log_line.outcome);
    }

    #[test]
    fn test_cmp() {
        let cpu_instruction = CPUInstruction::new(
            0x10,
            0xa7,
            "CMP",
            AddressingMode::RegisterPair([0x00, 0x01]),
            cmp,
        );
        let (mut memory, mut registers) = get_stuff(0x10, vec![0xa7, 0x00, 0x01]);
        registers.write(0, 3).unwrap();
        registers.write(1, 9).unwrap();
        let log_line = cpu_instruction
            .execute(&mut memory, &mut registers)
            .unwrap();
        assert!(registers.l_flag_is_set());
        assert_eq!(3, registers.read(0).unwrap());
        assert_eq!("#0x10: (a7 00 01) CMP  R0,R1    [FL=Lge]", log_line.to_string());
    }
}
