mod addressing_mode;
pub mod alu;
mod config;
mod cpu_instruction;
mod interrupt;
pub mod memory;
mod processing_unit;
mod registers;

pub const VERSION: &'static str = "0.1.0";

pub use addressing_mode::{AddressingMode, ResolutionError};
pub use alu::{AluError, AluOperation};
pub use config::Config;
pub use cpu_instruction::{CPUInstruction, Flow, LogLine};
pub use interrupt::{InterruptLine, KEYBOARD_INTERRUPT, TIMER_INTERRUPT};
pub use memory::{MemoryError, RAM as Memory};
pub use processing_unit::{disassemble, resolve_opcode, Cpu, CpuError, CpuState, HaltReason};
pub use registers::{RegisterError, Registers, StackError, IM, IS, SP};
