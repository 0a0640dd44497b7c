/*
 * This is the CLI frontend for the LS-8 simulator.
 */
use anyhow::{anyhow, Context, Result};
use ansi_term::Colour;
use log::{debug, info};
use ls8::{Config, Cpu, CpuState, HaltReason, InterruptLine, TIMER_INTERRUPT};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use structopt::StructOpt;

mod console;

#[derive(StructOpt, Debug)]
#[structopt(name = "ls8", about = "LS-8 8 bits computer simulator")]
struct CLOptions {
    /// program to load at address 0, as an hexadecimal string ie "820008470001"
    #[structopt(name = "HEX_PROGRAM")]
    program: Option<String>,

    /// print the state of the processor before each cycle
    #[structopt(short, long)]
    trace: bool,

    /// log every executed instruction
    #[structopt(short, long)]
    verbose: bool,

    /// raise the timer interrupt (0) every second
    #[structopt(long)]
    timer: bool,

    /// open the debugger console instead of running the program
    #[structopt(short, long)]
    interactive: bool,
}

fn decode_program(program: &str) -> Result<Vec<u8>> {
    let program: String = program.split_whitespace().collect();

    hex::decode(&program)
        .with_context(|| format!("'{}' is not a valid hexadecimal program", program))
}

fn start_timer(interrupt_line: InterruptLine) {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        debug!("timer tick");
        interrupt_line.raise(TIMER_INTERRUPT);
    });
}

fn run_program(cpu: &mut Cpu, interrupted: &AtomicBool) -> Result<()> {
    loop {
        if interrupted.load(Ordering::Relaxed) {
            eprintln!("Execution interrupted by CTRL+C!");
            break Ok(());
        }
        if let CpuState::Halted(reason) = cpu.step()? {
            if reason != HaltReason::Halt {
                eprintln!("{}: {}", Colour::Red.paint("Halted"), reason);
            }
            break Ok(());
        }
    }
}

fn main() -> Result<()> {
    let cli_opt = CLOptions::from_args();
    let filter = if cli_opt.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut cpu = Cpu::new(Config::new(cli_opt.trace, cli_opt.verbose));
    match &cli_opt.program {
        Some(program) => {
            let bytes = decode_program(program)?;
            cpu.load(&bytes)?;
            info!("{} bytes loaded", bytes.len());
        }
        None if cli_opt.interactive => {}
        None => return Err(anyhow!("no program given, use --interactive to start an empty machine")),
    }

    if cli_opt.timer {
        start_timer(cpu.interrupt_line());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let rmtint = interrupted.clone();
    ctrlc::set_handler(move || {
        rmtint.store(true, Ordering::SeqCst);
    })
    .context("could not set the CTRL-C handler")?;

    if cli_opt.interactive {
        console::run(cpu, interrupted)
    } else {
        run_program(&mut cpu, &interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_program() {
        assert_eq!(
            vec![0x82, 0x00, 0x08, 0x47, 0x00, 0x01],
            decode_program("82 00 08\n47 00\n01").unwrap()
        );
        assert!(decode_program("8200G8").is_err());
    }
}
