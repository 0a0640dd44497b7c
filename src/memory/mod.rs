mod error;
mod ram;

pub use error::MemoryError;
pub use ram::RAM;

/*
 * LS-8 memory map
 *
 *      top of RAM
 *  +-----------------------+
 *  | FF  I7 vector         |    Interrupt vector table
 *  | ..                    |
 *  | F8  I0 vector         |
 *  | F7  Reserved          |
 *  | F6  Reserved          |
 *  | F5  Reserved          |
 *  | F4  Key pressed       |    Holds the most recent key pressed
 *  | F3  Start of Stack    |
 *  | F2  [more stack]      |    Stack grows down
 *  | ...                   |
 *  | 01  [more program]    |
 *  | 00  Program entry     |    Program loaded upward in memory starting at 0
 *  +-----------------------+
 *      bottom of RAM
 */
pub const MEMORY_SIZE: usize = 256;
pub const MEMMAX: usize = MEMORY_SIZE - 1;
pub const KEY_PRESSED_ADDR: usize = 0xf4;
pub const STACK_EMPTY_ADDR: u8 = 0xf4;
pub const STACK_TOP_ADDR: usize = 0xf3;
pub const INTERRUPT_VECTOR_ADDR: usize = 0xf8;

/// Address of the handler vector of the given interrupt (0 to 7).
pub fn interrupt_vector_addr(interrupt: u8) -> usize {
    INTERRUPT_VECTOR_ADDR + (interrupt & 0x07) as usize
}
