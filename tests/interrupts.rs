use ls8::{Config, Cpu, CpuError, CpuState, HaltReason, MemoryError, TIMER_INTERRUPT};
use std::thread;

fn get_cpu(program: &[u8]) -> Cpu<Vec<u8>> {
    let mut cpu = Cpu::with_output(Config::default(), Vec::new());
    cpu.load(program).unwrap();

    cpu
}

fn output(cpu: &Cpu<Vec<u8>>) -> String {
    String::from_utf8(cpu.output().clone()).unwrap()
}

// LDI R1,vector ; LDI R0,handler ; ST R1,R0 ; LDI R2,loop ; LDI R5,mask
// loop: JMP R2
fn idle_program(vector: u8, mask: u8, handler: &[u8]) -> Vec<u8> {
    let mut program = vec![
        0x82, 0x01, vector, 0x82, 0x00, 0x11, 0x84, 0x01, 0x00, 0x82, 0x02, 0x0f, 0x82, 0x05,
        mask, 0x54, 0x02,
    ];
    program.extend_from_slice(handler);

    program
}

fn step_into_loop(cpu: &mut Cpu<Vec<u8>>) {
    for _ in 0..7 {
        assert_eq!(CpuState::Running, cpu.step().unwrap());
    }
    assert_eq!(0x0f, cpu.registers().program_counter);
}

#[test]
fn timer_interrupt() {
    // handler: LDI R3,'T' ; PRA R3 ; HLT
    let mut cpu = get_cpu(&idle_program(0xf8, 0x01, &[0x82, 0x03, 0x54, 0x48, 0x03, 0x01]));
    step_into_loop(&mut cpu);

    cpu.interrupt_line().raise(TIMER_INTERRUPT);
    cpu.step().unwrap();
    assert_eq!(0x11, cpu.registers().program_counter);
    assert!(!cpu.registers().interrupts_enabled());
    assert_eq!(0xeb, cpu.registers().get_stack_pointer());
    // return address saved first
    assert_eq!(0x0f, cpu.read_memory(0xf3).unwrap());

    assert_eq!(HaltReason::Halt, cpu.run().unwrap());
    assert_eq!("T", output(&cpu));
}

#[test]
fn masked_interrupt_is_ignored() {
    let mut cpu = get_cpu(&idle_program(0xf8, 0x00, &[0x01]));
    step_into_loop(&mut cpu);
    cpu.interrupt_line().raise(TIMER_INTERRUPT);
    for _ in 0..10 {
        cpu.step().unwrap();
    }
    assert_eq!(0x0f, cpu.registers().program_counter);
    assert_eq!(0x01, cpu.registers().get_interrupt_status());
    assert_eq!(0xf4, cpu.registers().get_stack_pointer());
}

#[test]
fn keyboard_interrupt_from_another_thread() {
    // handler: LDI R1,0xF4 ; LD R0,R1 ; PRA R0 ; HLT
    let mut cpu = get_cpu(&idle_program(
        0xf9,
        0x02,
        &[0x82, 0x01, 0xf4, 0x83, 0x00, 0x01, 0x48, 0x00, 0x01],
    ));
    step_into_loop(&mut cpu);

    let line = cpu.interrupt_line();
    thread::spawn(move || line.press_key(b'x')).join().unwrap();

    assert_eq!(HaltReason::Halt, cpu.run().unwrap());
    assert_eq!("x", output(&cpu));
    assert_eq!(b'x', cpu.read_memory(0xf4).unwrap());
}

#[test]
fn software_interrupt_and_return() {
    // LDI R1,0xF8 ; LDI R0,handler ; ST R1,R0 ; LDI R5,0b100 ; LDI R4,2
    // LDI R0,7 ; INT R4 ; PRN R0 ; HLT
    // handler: LDI R0,99 ; PRN R0 ; IRET
    let program = [
        0x82, 0x01, 0xfa, 0x82, 0x00, 0x17, 0x84, 0x01, 0x00, 0x82, 0x05, 0x04, 0x82, 0x04,
        0x02, 0x82, 0x00, 0x07, 0x52, 0x04, 0x47, 0x00, 0x01, 0x82, 0x00, 0x63, 0x47, 0x00,
        0x13,
    ];
    let mut cpu = get_cpu(&program);

    assert_eq!(HaltReason::Halt, cpu.run().unwrap());
    assert_eq!("99\n7\n", output(&cpu));
    assert_eq!(0xf4, cpu.registers().get_stack_pointer());
    assert_eq!(0x00, cpu.registers().get_interrupt_status());
    assert!(cpu.registers().interrupts_enabled());
    assert_eq!(0x17, cpu.registers().program_counter);
}

#[test]
fn interrupt_with_pc_past_end_of_memory_is_fatal() {
    // LDI R5,1 ; LDI R1,0xFE ; JMP R1 ; #0xFE: PRN R0
    let mut cpu = get_cpu(&[0x82, 0x05, 0x01, 0x82, 0x01, 0xfe, 0x54, 0x01]);
    cpu.write_memory(0xfe, 0x47).unwrap();
    cpu.write_memory(0xff, 0x00).unwrap();
    for _ in 0..4 {
        assert_eq!(CpuState::Running, cpu.step().unwrap());
    }
    assert_eq!(0x100, cpu.registers().program_counter);

    cpu.interrupt_line().raise(TIMER_INTERRUPT);
    match cpu.step() {
        Err(CpuError::Memory(MemoryError::ReadOutOfRange { addr: 0x100, len: 1 })) => {}
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(0xf4, cpu.registers().get_stack_pointer());
    assert_eq!("0\n", output(&cpu));
}
