use super::memory::RAM as Memory;
use super::memory::{interrupt_vector_addr, KEY_PRESSED_ADDR};
use super::registers::{Registers, StackError};
use log::debug;
use std::sync::{Arc, Mutex, MutexGuard};

pub const TIMER_INTERRUPT: u8 = 0;
pub const KEYBOARD_INTERRUPT: u8 = 1;

#[derive(Debug, Default)]
struct PendingState {
    pending: u8,
    key: Option<u8>,
}

/// Handle used by the outside world (timer thread, keyboard, debugger
/// console) to raise interrupts while the processor is running. Every clone
/// talks to the same processor.
#[derive(Debug, Clone, Default)]
pub struct InterruptLine {
    state: Arc<Mutex<PendingState>>,
}

impl InterruptLine {
    pub fn new() -> InterruptLine {
        InterruptLine::default()
    }

    fn lock(&self) -> MutexGuard<'_, PendingState> {
        // the state is two plain bytes, a panicking holder cannot leave it
        // half written
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Mark interrupt `interrupt` (0 to 7) as pending.
    pub fn raise(&self, interrupt: u8) {
        self.lock().pending |= 1 << (interrupt & 0x07);
    }

    /// Record the last key pressed and raise the keyboard interrupt.
    pub fn press_key(&self, key: u8) {
        let mut state = self.lock();
        state.key = Some(key);
        state.pending |= 1 << KEYBOARD_INTERRUPT;
    }

    /// Take everything injected since the last call.
    fn drain(&self) -> (u8, Option<u8>) {
        let mut state = self.lock();
        let drained = (state.pending, state.key);
        *state = PendingState::default();

        drained
    }
}

/// Interrupt check performed before each fetch. When an unmasked interrupt
/// is pending, the processor state is saved on the stack and the program
/// counter is set to the interrupt vector. Returns the number of the
/// interrupt being serviced.
pub fn service(
    line: &InterruptLine,
    registers: &mut Registers,
    memory: &mut Memory,
) -> Result<Option<u8>, StackError> {
    if !registers.interrupts_enabled() {
        return Ok(None);
    }

    let (injected, key) = line.drain();
    if let Some(key) = key {
        memory.write_byte(KEY_PRESSED_ADDR, key)?;
    }
    if injected != 0 {
        registers.set_interrupt_status(registers.get_interrupt_status() | injected);
    }

    let pending = registers.get_interrupt_mask() & registers.get_interrupt_status();
    if pending == 0 {
        return Ok(None);
    }
    let interrupt = pending.trailing_zeros() as u8;
    debug!("servicing interrupt {} (IS=0b{:08b})", interrupt, registers.get_interrupt_status());

    registers.set_interrupts_enabled(false);
    registers.set_interrupt_status(registers.get_interrupt_status() & !(1 << interrupt));
    registers.stack_push_address(memory, registers.program_counter)?;
    registers.stack_push(memory, registers.get_flags_register())?;
    for reg in 0..=6 {
        let value = registers.general_purpose()[reg];
        registers.stack_push(memory, value)?;
    }
    registers.program_counter = memory.read_byte(interrupt_vector_addr(interrupt))? as usize;

    Ok(Some(interrupt))
}
