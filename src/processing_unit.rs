use super::addressing_mode::{OperandShape, ResolutionError};
use super::alu::AluError;
use super::config::Config;
use super::cpu_instruction::microcode::{self, MicrocodeError};
use super::cpu_instruction::{CPUInstruction, Flow, LogLine, Microcode};
use super::interrupt::{self, InterruptLine};
use super::memory::RAM as Memory;
use super::memory::{MemoryError, MEMORY_SIZE};
use super::registers::{RegisterError, Registers, StackError};
use log::{debug, info, warn};
use std::error;
use std::fmt;
use std::io::{self, Write};

/// Entry of the opcode table.
#[derive(Clone, Copy)]
struct Opcode {
    mnemonic: &'static str,
    shape: OperandShape,
    microcode: Microcode,
}

macro_rules! opcode {
    ($mnemonic:expr, $shape:ident, $microcode:path) => {
        Some(Opcode {
            mnemonic: $mnemonic,
            shape: OperandShape::$shape,
            microcode: $microcode,
        })
    };
}

/*
 * Opcode byte layout: AABCDDDD
 * AA   number of operands
 * B    ALU operation
 * C    the instruction sets the program counter
 * DDDD instruction identifier
 */
static OPCODE_TABLE: [Option<Opcode>; 256] = {
    let mut t: [Option<Opcode>; 256] = [None; 256];

    t[0x00] = opcode!("NOP", Implied, microcode::nop);
    t[0x01] = opcode!("HLT", Implied, microcode::hlt);
    t[0x11] = opcode!("RET", Implied, microcode::ret);
    t[0x13] = opcode!("IRET", Implied, microcode::iret);

    // stack and I/O
    t[0x45] = opcode!("PUSH", Register, microcode::push);
    t[0x46] = opcode!("POP", Register, microcode::pop);
    t[0x47] = opcode!("PRN", Register, microcode::prn);
    t[0x48] = opcode!("PRA", Register, microcode::pra);

    // control flow
    t[0x50] = opcode!("CALL", Register, microcode::call);
    t[0x52] = opcode!("INT", Register, microcode::int);
    t[0x54] = opcode!("JMP", Register, microcode::jmp);
    t[0x55] = opcode!("JEQ", Register, microcode::jeq);
    t[0x56] = opcode!("JNE", Register, microcode::jne);
    t[0x57] = opcode!("JGT", Register, microcode::jgt);
    t[0x58] = opcode!("JLT", Register, microcode::jlt);
    t[0x59] = opcode!("JLE", Register, microcode::jle);
    t[0x5a] = opcode!("JGE", Register, microcode::jge);

    // unary ALU
    t[0x65] = opcode!("INC", Register, microcode::inc);
    t[0x66] = opcode!("DEC", Register, microcode::dec);
    t[0x69] = opcode!("NOT", Register, microcode::not);

    t[0x82] = opcode!("LDI", RegisterImmediate, microcode::ldi);
    t[0x83] = opcode!("LD", RegisterPair, microcode::ld);
    t[0x84] = opcode!("ST", RegisterPair, microcode::st);

    // binary ALU
    t[0xa0] = opcode!("ADD", RegisterPair, microcode::add);
    t[0xa1] = opcode!("SUB", RegisterPair, microcode::sub);
    t[0xa2] = opcode!("MUL", RegisterPair, microcode::mul);
    t[0xa3] = opcode!("DIV", RegisterPair, microcode::div);
    t[0xa4] = opcode!("MOD", RegisterPair, microcode::modulo);
    t[0xa7] = opcode!("CMP", RegisterPair, microcode::cmp);
    t[0xa8] = opcode!("AND", RegisterPair, microcode::and);
    t[0xaa] = opcode!("OR", RegisterPair, microcode::or);
    t[0xab] = opcode!("XOR", RegisterPair, microcode::xor);
    t[0xac] = opcode!("SHL", RegisterPair, microcode::shl);
    t[0xad] = opcode!("SHR", RegisterPair, microcode::shr);

    t
};

/// Decode the instruction at `address`. `None` when the opcode is unknown.
pub fn resolve_opcode(
    address: usize,
    opcode: u8,
    memory: &Memory,
) -> Result<Option<CPUInstruction>, ResolutionError> {
    let entry = match OPCODE_TABLE[opcode as usize] {
        Some(entry) => entry,
        None => return Ok(None),
    };
    let addressing_mode = entry.shape.solve(address, memory)?;

    Ok(Some(CPUInstruction::new(
        address,
        opcode,
        entry.mnemonic,
        addressing_mode,
        entry.microcode,
    )))
}

/// Decode the instructions between `start` and `end` without executing them.
/// Decoding stops at the first unknown opcode since there is no way to know
/// where the next instruction starts.
pub fn disassemble(
    start: usize,
    end: usize,
    memory: &Memory,
) -> Result<Vec<CPUInstruction>, ResolutionError> {
    let mut output: Vec<CPUInstruction> = vec![];
    let mut cp = start;
    let end = end.min(MEMORY_SIZE);

    while cp < end {
        let opcode = memory.read(cp, 1)?[0];
        match resolve_opcode(cp, opcode, memory)? {
            Some(cpu_instruction) => {
                cp = cpu_instruction.next_address();
                output.push(cpu_instruction);
            }
            None => break,
        }
    }

    Ok(output)
}

/// Why the processor stopped.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum HaltReason {
    Halt,
    UnknownOpcode { address: usize, opcode: u8 },
    StackOverflow { address: usize, stack_pointer: u8 },
    StackUnderflow { address: usize, stack_pointer: u8 },
    DivisionByZero { address: usize },
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HaltReason::Halt => write!(f, "halted"),
            HaltReason::UnknownOpcode { address, opcode } => write!(
                f,
                "unknown opcode 0x{:02X} at address #0x{:02X}",
                opcode, address
            ),
            HaltReason::StackOverflow {
                address,
                stack_pointer,
            } => write!(
                f,
                "stack overflow at address #0x{:02X}, SP=0x{:02X}",
                address, stack_pointer
            ),
            HaltReason::StackUnderflow {
                address,
                stack_pointer,
            } => write!(
                f,
                "stack underflow at address #0x{:02X}, SP=0x{:02X}",
                address, stack_pointer
            ),
            HaltReason::DivisionByZero { address } => {
                write!(f, "division by zero at address #0x{:02X}", address)
            }
        }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum CpuState {
    Running,
    Halted(HaltReason),
}

/// Errors that abort the run: they denote a broken program or host, not a
/// condition the program can run into.
#[derive(Debug)]
pub enum CpuError {
    Memory(MemoryError),
    Register(RegisterError),
    Resolution(ResolutionError),
    UnsupportedOperation(String),
    Output(io::Error),
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CpuError::Memory(e) => write!(f, "{}", e),
            CpuError::Register(e) => write!(f, "{}", e),
            CpuError::Resolution(e) => write!(f, "{}", e),
            CpuError::UnsupportedOperation(name) => {
                write!(f, "Unsupported ALU operation '{}'", name)
            }
            CpuError::Output(e) => write!(f, "could not write program output: {}", e),
        }
    }
}

impl error::Error for CpuError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CpuError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl std::convert::From<MemoryError> for CpuError {
    fn from(err: MemoryError) -> CpuError {
        CpuError::Memory(err)
    }
}

impl std::convert::From<RegisterError> for CpuError {
    fn from(err: RegisterError) -> CpuError {
        CpuError::Register(err)
    }
}

impl std::convert::From<ResolutionError> for CpuError {
    fn from(err: ResolutionError) -> CpuError {
        CpuError::Resolution(err)
    }
}

impl std::convert::From<io::Error> for CpuError {
    fn from(err: io::Error) -> CpuError {
        CpuError::Output(err)
    }
}

fn stack_halt(address: usize, err: StackError) -> Result<HaltReason, CpuError> {
    match err {
        StackError::Overflow(stack_pointer) => Ok(HaltReason::StackOverflow {
            address,
            stack_pointer,
        }),
        StackError::Underflow(stack_pointer) => Ok(HaltReason::StackUnderflow {
            address,
            stack_pointer,
        }),
        StackError::Memory(e) => Err(CpuError::Memory(e)),
    }
}

/// Sort a microcode failure: conditions a program can run into halt the
/// processor, anything else is fatal.
fn halt_reason(address: usize, err: MicrocodeError) -> Result<HaltReason, CpuError> {
    match err {
        MicrocodeError::Stack(e) => stack_halt(address, e),
        MicrocodeError::Alu(AluError::DivisionByZero) => Ok(HaltReason::DivisionByZero { address }),
        MicrocodeError::Alu(AluError::UnsupportedOperation(name)) => {
            Err(CpuError::UnsupportedOperation(name))
        }
        MicrocodeError::Alu(AluError::Register(e)) | MicrocodeError::Register(e) => {
            Err(CpuError::Register(e))
        }
        MicrocodeError::MemoryOverflow(e) => Err(CpuError::Memory(e)),
        MicrocodeError::Resolution(e) => Err(CpuError::Resolution(e)),
    }
}

/// The LS-8 processor: registers, memory, interrupt line and the output the
/// PRN and PRA instructions write to.
pub struct Cpu<W: Write = io::Stdout> {
    registers: Registers,
    memory: Memory,
    state: CpuState,
    config: Config,
    interrupt_line: InterruptLine,
    output: W,
}

impl Cpu<io::Stdout> {
    pub fn new(config: Config) -> Cpu<io::Stdout> {
        Cpu::with_output(config, io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    pub fn with_output(config: Config, output: W) -> Cpu<W> {
        Cpu {
            registers: Registers::new(),
            memory: Memory::new(),
            state: CpuState::Running,
            config,
            interrupt_line: InterruptLine::new(),
            output,
        }
    }

    /// Copy the program in memory starting at address 0.
    pub fn load(&mut self, program: &[u8]) -> Result<(), CpuError> {
        self.memory.load(program)?;
        debug!("loaded {} bytes", program.len());

        Ok(())
    }

    pub fn read_register(&self, index: usize) -> Result<u8, CpuError> {
        Ok(self.registers.read(index)?)
    }

    pub fn write_register(&mut self, index: usize, value: usize) -> Result<(), CpuError> {
        Ok(self.registers.write(index, value)?)
    }

    pub fn read_memory(&self, addr: usize) -> Result<u8, CpuError> {
        Ok(self.memory.read_byte(addr)?)
    }

    pub fn write_memory(&mut self, addr: usize, value: u8) -> Result<(), CpuError> {
        Ok(self.memory.write_byte(addr, value)?)
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// A handle to raise interrupts from another thread.
    pub fn interrupt_line(&self) -> InterruptLine {
        self.interrupt_line.clone()
    }

    /// Registers back to their power on state, memory is left as is.
    pub fn reset(&mut self) {
        self.registers.flush();
        self.state = CpuState::Running;
    }

    /// `TRACE: PC | B0 B1 B2 | R0 R1 R2 R3 R4 R5 R6 R7` where B0 to B2 are the
    /// bytes at PC onward.
    pub fn trace(&self) -> String {
        let pc = self.registers.program_counter;
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            pc,
            self.memory.peek(pc).unwrap_or(0),
            self.memory.peek(pc + 1).unwrap_or(0),
            self.memory.peek(pc + 2).unwrap_or(0),
        );
        for value in self.registers.general_purpose().iter() {
            line.push_str(&format!(" {:02X}", value));
        }

        line
    }

    fn halt(&mut self, reason: HaltReason) {
        if reason != HaltReason::Halt {
            warn!("{}", reason);
        }
        self.state = CpuState::Halted(reason);
    }

    /// Run one cycle: either enter an interrupt handler or execute the
    /// instruction at PC. Nothing happens once the processor is halted.
    pub fn step(&mut self) -> Result<CpuState, CpuError> {
        self.execute_step()?;

        Ok(self.state)
    }

    /// Same as `step`, returns the log line of the executed instruction.
    /// There is none when the cycle entered an interrupt handler or the
    /// processor halted on an error condition.
    pub fn execute_step(&mut self) -> Result<Option<LogLine>, CpuError> {
        if let CpuState::Halted(_) = self.state {
            return Ok(None);
        }
        if self.config.trace {
            let line = self.trace();
            writeln!(self.output, "{}", line)?;
        }

        let pc = self.registers.program_counter;
        match interrupt::service(&self.interrupt_line, &mut self.registers, &mut self.memory) {
            Ok(Some(interrupt)) => {
                debug!(
                    "interrupt {} at #0x{:02X}, handler at #0x{:02X}",
                    interrupt, pc, self.registers.program_counter
                );
                return Ok(None);
            }
            Ok(None) => {}
            Err(e) => {
                let reason = stack_halt(pc, e)?;
                self.halt(reason);
                return Ok(None);
            }
        }

        let opcode = self.memory.read_byte(pc)?;
        self.registers.instruction_register = opcode;
        let cpu_instruction = match resolve_opcode(pc, opcode, &self.memory)? {
            Some(cpu_instruction) => cpu_instruction,
            None => {
                self.halt(HaltReason::UnknownOpcode {
                    address: pc,
                    opcode,
                });
                return Ok(None);
            }
        };

        let log_line = match cpu_instruction.execute(&mut self.memory, &mut self.registers) {
            Ok(log_line) => log_line,
            Err(e) => {
                let reason = halt_reason(pc, e)?;
                self.halt(reason);
                return Ok(None);
            }
        };
        if self.config.verbose {
            info!("{}", log_line);
        }
        if let Some(output) = &log_line.output {
            self.output.write_all(output.as_bytes())?;
            self.output.flush()?;
        }

        match log_line.flow {
            Flow::Next => self.registers.program_counter = cpu_instruction.next_address(),
            Flow::Jump(address) => self.registers.program_counter = address,
            Flow::Halt => {
                self.registers.program_counter = cpu_instruction.next_address();
                self.halt(HaltReason::Halt);
            }
        }

        Ok(Some(log_line))
    }

    /// Run until the processor halts.
    pub fn run(&mut self) -> Result<HaltReason, CpuError> {
        loop {
            if let CpuState::Halted(reason) = self.step()? {
                break Ok(reason);
            }
        }
    }
}
