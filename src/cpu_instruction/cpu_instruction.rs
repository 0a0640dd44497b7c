use super::microcode::Result as MicrocodeResult;
use crate::addressing_mode::*;
use crate::memory::RAM as Memory;
use crate::registers::Registers;
use std::fmt;

pub type Microcode = fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>;

/// What the dispatch loop does with the program counter once an instruction
/// has been executed.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Flow {
    /// Skip the opcode and its operands.
    Next,
    /// The instruction set the program counter itself.
    Jump(usize),
    /// Skip the opcode and stop the processor.
    Halt,
}

pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub addressing_mode: AddressingMode,
    pub microcode: Microcode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &str,
        addressing_mode: AddressingMode,
        microcode: Microcode,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            addressing_mode,
            microcode,
        }
    }

    pub fn execute(&self, memory: &mut Memory, registers: &mut Registers) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }

    /// Size of the instruction in bytes, opcode included.
    pub fn len(&self) -> usize {
        1 + self.addressing_mode.get_operands().len()
    }

    pub fn next_address(&self) -> usize {
        self.address + self.len()
    }
}

fn format_bytes(opcode: u8, operands: Vec<u8>) -> String {
    let mut bytes = vec![opcode];
    bytes.extend(operands);

    format!(
        "({})",
        bytes
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "#0x{:02X}: {: <11}{: <4} {}",
            self.address,
            format_bytes(self.opcode, self.addressing_mode.get_operands()),
            self.mnemonic,
            self.addressing_mode
        );

        write!(f, "{}", line.trim_end())
    }
}

#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub addressing_mode: AddressingMode,
    pub flow: Flow,
    pub outcome: String,
    pub output: Option<String>,
}

impl LogLine {
    pub fn new(cpu_instruction: &CPUInstruction, flow: Flow, outcome: String) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.clone(),
            addressing_mode: cpu_instruction.addressing_mode,
            flow,
            outcome,
            output: None,
        }
    }

    /// Text the instruction sends to the output channel.
    pub fn with_output(mut self, output: String) -> LogLine {
        self.output = Some(output);
        self
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = format!(
            "#0x{:02X}: {: <11}{: <4} {: <8} {}",
            self.address,
            format_bytes(self.opcode, self.addressing_mode.get_operands()),
            self.mnemonic,
            self.addressing_mode.to_string(),
            self.outcome
        );

        write!(f, "{}", line.trim_end())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::cpu_instruction::microcode;

    pub fn get_stuff(addr: usize, program: Vec<u8>) -> (Memory, Registers) {
        let mut memory = Memory::new();
        memory.write(addr, &program).unwrap();
        let mut registers = Registers::new();
        registers.program_counter = addr;

        (memory, registers)
    }

    #[test]
    fn test_instruction_display() {
        let cpu_instruction = CPUInstruction::new(
            0x00,
            0x82,
            "LDI",
            AddressingMode::RegisterImmediate([0x00, 0x08]),
            microcode::ldi,
        );
        assert_eq!(3, cpu_instruction.len());
        assert_eq!(0x03, cpu_instruction.next_address());
        assert_eq!("#0x00: (82 00 08) LDI  R0,#$08", cpu_instruction.to_string());
    }

    #[test]
    fn test_implied_instruction_display() {
        let cpu_instruction =
            CPUInstruction::new(0x05, 0x01, "HLT", AddressingMode::Implied, microcode::hlt);
        assert_eq!(1, cpu_instruction.len());
        assert_eq!("#0x05: (01)       HLT", cpu_instruction.to_string());
    }

    #[test]
    fn test_log_line_output() {
        let cpu_instruction = CPUInstruction::new(
            0x03,
            0x47,
            "PRN",
            AddressingMode::Register([0x00]),
            microcode::prn,
        );
        let log_line = LogLine::new(&cpu_instruction, Flow::Next, "[R0=0x08]".to_owned())
            .with_output("8\n".to_owned());
        assert_eq!(Some("8\n".to_owned()), log_line.output);
        assert_eq!("#0x03: (47 00)    PRN  R0       [R0=0x08]", log_line.to_string());
    }
}
