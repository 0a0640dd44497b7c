use super::memory::RAM as Memory;
use super::memory::{MemoryError, STACK_EMPTY_ADDR, STACK_TOP_ADDR};
use std::convert::TryFrom;
use std::error;
use std::fmt;
/*
 * LS-8 registers
 * R0 to R7 are 8 bits general purpose registers, R5 to R7 are reserved:
 * R5: interrupt mask (IM)
 * R6: interrupt status (IS)
 * R7: stack pointer (SP), set at 0xF4 (empty stack) at start.
 *
 * flags register: 00000LGE
 * bit 2: Less-than
 * bit 1: Greater-than
 * bit 0: Equal
 *
 * program counter: address of the currently executing instruction
 * instruction register: copy of the currently executing instruction
 */
pub const REGISTER_COUNT: usize = 8;
pub const IM: usize = 5;
pub const IS: usize = 6;
pub const SP: usize = 7;

const L_FLAG: u8 = 0b00000100;
const G_FLAG: u8 = 0b00000010;
const E_FLAG: u8 = 0b00000001;
const FLAGS_MASK: u8 = L_FLAG | G_FLAG | E_FLAG;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum RegisterError {
    OutOfRange(usize), // register index
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RegisterError::OutOfRange(index) => write!(
                f,
                "no register R{}, register index must be lower than {}",
                index, REGISTER_COUNT
            ),
        }
    }
}

impl error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum StackError {
    Overflow(u8),  // stack pointer
    Underflow(u8), // stack pointer
    Memory(MemoryError),
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StackError::Overflow(sp) => write!(f, "stack overflow, SP=0x{:02X}", sp),
            StackError::Underflow(sp) => write!(f, "stack underflow, SP=0x{:02X}", sp),
            StackError::Memory(e) => write!(f, "memory error during stack operation: {}", e),
        }
    }
}

impl error::Error for StackError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

impl std::convert::From<MemoryError> for StackError {
    fn from(err: MemoryError) -> StackError {
        StackError::Memory(err)
    }
}

pub struct Registers {
    registers: [u8; REGISTER_COUNT],
    pub program_counter: usize,
    pub instruction_register: u8,
    flags: u8,
    interrupts_enabled: bool,
}

impl Registers {
    pub fn new() -> Registers {
        let mut registers = Registers {
            registers: [0x00; REGISTER_COUNT],
            program_counter: 0,
            instruction_register: 0x00,
            flags: 0x00,
            interrupts_enabled: true,
        };
        registers.registers[SP] = STACK_EMPTY_ADDR;

        registers
    }

    /// Back to the power on state.
    pub fn flush(&mut self) {
        *self = Registers::new();
    }

    pub fn read(&self, index: usize) -> Result<u8, RegisterError> {
        self.registers
            .get(index)
            .copied()
            .ok_or(RegisterError::OutOfRange(index))
    }

    /// Values are truncated to 8 bits.
    pub fn write(&mut self, index: usize, value: usize) -> Result<(), RegisterError> {
        let register = self
            .registers
            .get_mut(index)
            .ok_or(RegisterError::OutOfRange(index))?;
        *register = (value & 0xff) as u8;

        Ok(())
    }

    pub fn get_interrupt_mask(&self) -> u8 {
        self.registers[IM]
    }

    pub fn get_interrupt_status(&self) -> u8 {
        self.registers[IS]
    }

    pub fn set_interrupt_status(&mut self, status: u8) {
        self.registers[IS] = status;
    }

    pub fn get_stack_pointer(&self) -> u8 {
        self.registers[SP]
    }

    pub fn set_stack_pointer(&mut self, sp: u8) {
        self.registers[SP] = sp;
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    pub fn set_interrupts_enabled(&mut self, enabled: bool) {
        self.interrupts_enabled = enabled;
    }

    pub fn stack_push(&mut self, memory: &mut Memory, byte: u8) -> Result<(), StackError> {
        let sp = self.get_stack_pointer();
        let target = match (sp as usize).checked_sub(1) {
            Some(addr) if addr >= memory.stack_floor() && addr <= STACK_TOP_ADDR => addr,
            _ => return Err(StackError::Overflow(sp)),
        };
        self.set_stack_pointer(target as u8);
        memory.write_byte(target, byte)?;

        Ok(())
    }

    /// Push a return address. Addresses past the end of memory are not
    /// truncated to fit the stack byte.
    pub fn stack_push_address(
        &mut self,
        memory: &mut Memory,
        addr: usize,
    ) -> Result<(), StackError> {
        let byte =
            u8::try_from(addr).map_err(|_| MemoryError::ReadOutOfRange { addr, len: 1 })?;

        self.stack_push(memory, byte)
    }

    pub fn stack_pull(&mut self, memory: &Memory) -> Result<u8, StackError> {
        let sp = self.get_stack_pointer();
        if (sp as usize) < memory.stack_floor() || sp as usize > STACK_TOP_ADDR {
            return Err(StackError::Underflow(sp));
        }
        let byte = memory.read_byte(sp as usize)?;
        self.set_stack_pointer(sp + 1);

        Ok(byte)
    }

    pub fn l_flag_is_set(&self) -> bool {
        self.flags & L_FLAG == L_FLAG
    }

    pub fn g_flag_is_set(&self) -> bool {
        self.flags & G_FLAG == G_FLAG
    }

    pub fn e_flag_is_set(&self) -> bool {
        self.flags & E_FLAG == E_FLAG
    }

    pub fn get_flags_register(&self) -> u8 {
        self.flags
    }

    /// Only the three comparison bits are kept.
    pub fn set_flags_register(&mut self, flags: u8) {
        self.flags = flags & FLAGS_MASK;
    }

    /// Exactly one comparison flag is set after a comparison.
    pub fn set_comparison(&mut self, a: u8, b: u8) {
        self.flags = if a < b {
            L_FLAG
        } else if a > b {
            G_FLAG
        } else {
            E_FLAG
        };
    }

    pub fn format_flags(&self) -> String {
        format!(
            "{}{}{}",
            if self.l_flag_is_set() { "L" } else { "l" },
            if self.g_flag_is_set() { "G" } else { "g" },
            if self.e_flag_is_set() { "E" } else { "e" },
        )
    }

    pub fn general_purpose(&self) -> [u8; REGISTER_COUNT] {
        self.registers
    }
}

impl Default for Registers {
    fn default() -> Self {
        Registers::new()
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [R0:0x{:02x}, R1:0x{:02x}, R2:0x{:02x}, R3:0x{:02x}, R4:0x{:02x} | IM:0x{:02x} IS:0x{:02x} SP:0x{:02x} | PC:0x{:02x} IR:0x{:02x} | {}{}]",
            self.registers[0],
            self.registers[1],
            self.registers[2],
            self.registers[3],
            self.registers[4],
            self.registers[IM],
            self.registers[IS],
            self.registers[SP],
            self.program_counter,
            self.instruction_register,
            self.format_flags(),
            if self.interrupts_enabled { "" } else { " | interrupts disabled" },
        )
    }
}
