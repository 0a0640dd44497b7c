mod cpu_instruction;
pub mod microcode;

pub use self::cpu_instruction::{CPUInstruction, Flow, LogLine, Microcode};
