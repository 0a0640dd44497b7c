/*
 * Interactive debugger console.
 */
use anyhow::{anyhow, Result};
use ansi_term::Colour;
use pest::error::Error as PestError;
use pest::iterators::{Pair, Pairs};
use pest::{Parser, RuleType};
use pest_derive::Parser;
use rustyline::error::ReadlineError;
use rustyline::Result as RustyResult;
use rustyline::{Context, Editor};

use ls8::{disassemble, Cpu, CpuState, HaltReason, LogLine, VERSION};

use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const LOGLINE_MEMORY_LEN: usize = 35;
const HISTORY_FILE: &str = "history.txt";

#[derive(Parser)]
#[grammar = "cli.pest"]
pub struct BEParser;

#[derive(Debug, PartialEq)]
pub enum Source {
    Register(usize),
    ProgramCounter,
    Flags,
    Memory(usize),
}

impl Source {
    pub fn get_value<W: Write>(&self, cpu: &Cpu<W>) -> usize {
        match *self {
            Source::Register(index) => cpu.registers().general_purpose()[index & 0x07] as usize,
            Source::ProgramCounter => cpu.registers().program_counter,
            Source::Flags => cpu.registers().get_flags_register() as usize,
            Source::Memory(addr) => cpu.memory().peek(addr).unwrap_or(0) as usize,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum BooleanExpression {
    Equal(Source, usize),
    GreaterOrEqual(Source, usize),
    StrictlyGreater(Source, usize),
    LesserOrEqual(Source, usize),
    StrictlyLesser(Source, usize),
    Different(Source, usize),
    Value(bool),
}

impl BooleanExpression {
    pub fn solve<W: Write>(&self, cpu: &Cpu<W>) -> bool {
        match self {
            BooleanExpression::Equal(source, val) => source.get_value(cpu) == *val,
            BooleanExpression::GreaterOrEqual(source, val) => source.get_value(cpu) >= *val,
            BooleanExpression::StrictlyGreater(source, val) => source.get_value(cpu) > *val,
            BooleanExpression::LesserOrEqual(source, val) => source.get_value(cpu) <= *val,
            BooleanExpression::StrictlyLesser(source, val) => source.get_value(cpu) < *val,
            BooleanExpression::Different(source, val) => source.get_value(cpu) != *val,
            BooleanExpression::Value(val) => *val,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum HelpTopic {
    Registers,
    Memory,
    Run,
    Disassemble,
    Interrupts,
}

#[derive(Debug, PartialEq)]
pub enum CliCommand {
    RegistersShow,
    RegistersFlush,
    MemoryShow { address: usize, len: usize },
    MemoryWrite { address: usize, bytes: Vec<u8> },
    Run {
        address: Option<usize>,
        stop_condition: BooleanExpression,
    },
    Trace,
    Disassemble { address: Option<usize>, len: usize },
    Interrupt(u8),
    Key(u8),
    Help(Option<HelpTopic>),
}

impl CliCommand {
    pub fn from_pairs(mut pairs: Pairs<Rule>) -> Result<CliCommand> {
        let node = pairs
            .next()
            .and_then(|sentence| sentence.into_inner().next())
            .ok_or_else(|| anyhow!("empty command"))?;

        let command = match node.as_rule() {
            Rule::registers_instruction => match first_inner(node)?.as_rule() {
                Rule::registers_flush => CliCommand::RegistersFlush,
                _ => CliCommand::RegistersShow,
            },
            Rule::memory_instruction => {
                let node = first_inner(node)?;
                let rule = node.as_rule();
                let mut nodes = node.into_inner();
                let address = parse_memory(&next_str(&mut nodes)?[3..])?;
                match rule {
                    Rule::memory_write => CliCommand::MemoryWrite {
                        address,
                        bytes: parse_bytes(next_str(&mut nodes)?)?,
                    },
                    _ => CliCommand::MemoryShow {
                        address,
                        len: next_str(&mut nodes)?.parse::<usize>()?,
                    },
                }
            }
            Rule::run_instruction => {
                let mut address = None;
                let mut stop_condition = BooleanExpression::Value(true);
                for node in node.into_inner() {
                    match node.as_rule() {
                        Rule::memory_address => address = Some(parse_memory(&node.as_str()[3..])?),
                        Rule::boolean_condition => {
                            stop_condition = parse_boolex(node.into_inner())?
                        }
                        _ => {}
                    }
                }
                CliCommand::Run {
                    address,
                    stop_condition,
                }
            }
            Rule::trace_instruction => CliCommand::Trace,
            Rule::disassemble_instruction => {
                let mut address = None;
                let mut len = 0;
                for node in node.into_inner() {
                    match node.as_rule() {
                        Rule::memory_address => address = Some(parse_memory(&node.as_str()[3..])?),
                        Rule::size_parameter => len = node.as_str().parse::<usize>()?,
                        _ => {}
                    }
                }
                CliCommand::Disassemble { address, len }
            }
            Rule::interrupt_instruction => {
                CliCommand::Interrupt(first_inner(node)?.as_str().parse::<u8>()?)
            }
            Rule::key_instruction => CliCommand::Key(parse_value(&first_inner(node)?)? as u8),
            Rule::help_instruction => {
                let topic = match node.into_inner().next().map(|n| n.as_rule()) {
                    Some(Rule::help_registers) => Some(HelpTopic::Registers),
                    Some(Rule::help_memory) => Some(HelpTopic::Memory),
                    Some(Rule::help_run) => Some(HelpTopic::Run),
                    Some(Rule::help_disassemble) => Some(HelpTopic::Disassemble),
                    Some(Rule::help_interrupts) => Some(HelpTopic::Interrupts),
                    _ => None,
                };
                CliCommand::Help(topic)
            }
            v => return Err(anyhow!("unexpected node '{:?}'", v)),
        };

        Ok(command)
    }

    pub fn execute(&self, cpu: &mut Cpu, interrupted: &AtomicBool) {
        match self {
            CliCommand::RegistersShow => println!("{:?}", cpu.registers()),
            CliCommand::RegistersFlush => {
                cpu.reset();
                println!("Registers flushed!");
            }
            CliCommand::MemoryShow { address, len } => match mem_dump(*address, *len, cpu) {
                Ok(lines) => {
                    for line in lines.iter() {
                        println!("{}", line);
                        if interrupted.load(Ordering::Relaxed) {
                            break;
                        }
                    }
                }
                Err(e) => print_err(format!("memory error: {}", e).as_str()),
            },
            CliCommand::MemoryWrite { address, bytes } => {
                match cpu.memory_mut().write(*address, bytes) {
                    Ok(()) => println!("{} bytes written at #0x{:02X}.", bytes.len(), address),
                    Err(e) => print_err(format!("memory error: {}", e).as_str()),
                }
            }
            CliCommand::Run {
                address,
                stop_condition,
            } => exec_run(cpu, *address, stop_condition, interrupted),
            CliCommand::Trace => println!("{}", cpu.trace()),
            CliCommand::Disassemble { address, len } => {
                let start = address.unwrap_or(cpu.registers().program_counter);
                exec_disassemble(cpu, start, *len, interrupted)
            }
            CliCommand::Interrupt(interrupt) => {
                cpu.interrupt_line().raise(*interrupt);
                println!("Interrupt {} raised.", interrupt);
            }
            CliCommand::Key(key) => {
                cpu.interrupt_line().press_key(*key);
                println!("Key 0x{:02x} pressed.", key);
            }
            CliCommand::Help(topic) => help(topic.as_ref()),
        }
    }
}

fn first_inner(node: Pair<Rule>) -> Result<Pair<Rule>> {
    let rule = node.as_rule();
    node.into_inner()
        .next()
        .ok_or_else(|| anyhow!("missing argument to {:?}", rule))
}

fn next_str<'i>(nodes: &mut Pairs<'i, Rule>) -> Result<&'i str> {
    nodes
        .next()
        .map(|node| node.as_str())
        .ok_or_else(|| anyhow!("missing argument"))
}

fn exec_run(
    cpu: &mut Cpu,
    address: Option<usize>,
    stop_condition: &BooleanExpression,
    interrupted: &AtomicBool,
) {
    if let Some(address) = address {
        cpu.registers_mut().program_counter = address;
    }
    if let CpuState::Halted(reason) = cpu.state() {
        print_err(format!("processor halted ({}), flush the registers to restart.", reason).as_str());
        return;
    }

    let mut loglines: VecDeque<LogLine> = VecDeque::new();
    let mut i = 0;
    loop {
        match cpu.execute_step() {
            Ok(Some(logline)) => {
                loglines.push_back(logline);
                if loglines.len() > LOGLINE_MEMORY_LEN {
                    loglines.pop_front();
                }
            }
            Ok(None) => {}
            Err(e) => {
                print_err(format!("{}", e).as_str());
                break;
            }
        }
        i += 1;
        if interrupted.load(Ordering::Relaxed)
            || cpu.state() != CpuState::Running
            || stop_condition.solve(cpu)
        {
            break;
        }
    }

    if i > LOGLINE_MEMORY_LEN {
        println!("Stopped after {} cycles.", i);
    }
    loglines.iter().for_each(|x| println!("{}", x));
    match cpu.state() {
        CpuState::Halted(HaltReason::Halt) => {
            println!("{}", Colour::Yellow.paint("Processor halted."))
        }
        CpuState::Halted(reason) => println!(
            "{}",
            Colour::Yellow.paint(format!("Processor halted: {}.", reason))
        ),
        CpuState::Running => {}
    }
}

fn exec_disassemble(cpu: &Cpu, start: usize, len: usize, interrupted: &AtomicBool) {
    if len == 0 {
        print_err("length 0");
        return;
    }

    let mut cp = start;
    for _ in 0..len {
        match disassemble(cp, cp + 1, cpu.memory()) {
            Ok(instructions) => match instructions.first() {
                Some(instruction) => {
                    println!("{}", instruction);
                    cp = instruction.next_address();
                }
                None => {
                    println!("#0x{:02X}: unknown opcode", cp);
                    break;
                }
            },
            Err(e) => {
                print_err(format!("{}", e).as_str());
                break;
            }
        }
        if interrupted.load(Ordering::Relaxed) || cp >= cpu.memory().get_size() {
            break;
        }
    }
}

fn mem_dump<W: Write>(start: usize, len: usize, cpu: &Cpu<W>) -> Result<Vec<String>> {
    let mut output: Vec<String> = vec![];
    if len == 0 {
        return Ok(output);
    }
    let address = start - (start % 16);
    let bytes = cpu.memory().read(address, 16 * len)?;

    for lineno in 0..len {
        let mut line = format!("#0x{:02X}: ", address + lineno * 16);
        for col in 0..16 {
            if col == 8 {
                line.push(' ');
            }
            line = format!("{} {:02x}", line, bytes[16 * lineno + col]);
        }
        output.push(line);
    }

    Ok(output)
}

pub fn parse_boolex(mut nodes: Pairs<Rule>) -> Result<BooleanExpression> {
    let node = nodes.next().ok_or_else(|| anyhow!("empty condition"))?;
    match node.as_rule() {
        Rule::boolean => Ok(BooleanExpression::Value(
            node.as_str().to_ascii_lowercase() == "true",
        )),
        Rule::operation => parse_operation(node.into_inner()),
        smt => Err(anyhow!("unknown node type '{:?}'.", smt)),
    }
}

fn parse_operation(mut nodes: Pairs<Rule>) -> Result<BooleanExpression> {
    let node = nodes.next().ok_or_else(|| anyhow!("missing left operand"))?;
    let lh = match node.as_rule() {
        Rule::register => parse_source_register(&node)?,
        Rule::memory_address => Source::Memory(parse_memory(&node.as_str()[3..])?),
        v => return Err(anyhow!("unexpected node '{:?}' here.", v)),
    };
    let operator = next_str(&mut nodes)?;
    let node = nodes.next().ok_or_else(|| anyhow!("missing right operand"))?;
    let rh = parse_value(&node)?;

    let expression = match operator {
        "=" => BooleanExpression::Equal(lh, rh),
        ">=" => BooleanExpression::GreaterOrEqual(lh, rh),
        ">" => BooleanExpression::StrictlyGreater(lh, rh),
        "<=" => BooleanExpression::LesserOrEqual(lh, rh),
        "<" => BooleanExpression::StrictlyLesser(lh, rh),
        "!=" => BooleanExpression::Different(lh, rh),
        v => return Err(anyhow!("unknown operator {:?}", v)),
    };

    Ok(expression)
}

fn parse_source_register(node: &Pair<Rule>) -> Result<Source> {
    let name = node.as_str().to_ascii_uppercase();
    match name.as_str() {
        "PC" => Ok(Source::ProgramCounter),
        "FL" => Ok(Source::Flags),
        register => Ok(Source::Register(register[1..].parse::<usize>()?)),
    }
}

fn parse_memory(addr: &str) -> Result<usize> {
    if addr.is_empty() {
        return Err(anyhow!("Empty string is not a valid Hexadecimal."));
    }

    let bytes = hex::decode(addr)?;
    let mut addr: usize = 0;

    for byte in bytes.iter() {
        addr = addr << 8 | (*byte as usize);
    }

    Ok(addr)
}

fn parse_value(node: &Pair<Rule>) -> Result<usize> {
    parse_memory(&node.as_str()[2..])
}

fn parse_bytes(bytes: &str) -> Result<Vec<u8>> {
    let bytes: String = bytes[3..bytes.len() - 1].split(',').collect();

    Ok(hex::decode(bytes)?)
}

fn display_error<T: RuleType>(err: PestError<T>) {
    let (mark_str, msg) = match err.location {
        pest::error::InputLocation::Pos(x) => {
            let mut pos_str = " ".repeat(x);
            pos_str.push('↑');

            (pos_str, format!("at position {}", x))
        }
        pest::error::InputLocation::Span((a, b)) => {
            let mut pos_str = " ".repeat(a);
            pos_str.push('↑');
            pos_str.push_str(&" ".repeat(b - a));
            pos_str.push('↑');

            (
                pos_str,
                format!("somewhere between position {} and {}", a, b),
            )
        }
    };
    println!("   {}", mark_str);
    print_err(&msg);
    match err.variant {
        pest::error::ErrorVariant::ParsingError { positives, .. } => {
            println!(
                "{}",
                Colour::Fixed(240).paint(format!("hint: expected {:?}", positives))
            );
        }
        pest::error::ErrorVariant::CustomError { message } => {
            println!(
                "{}",
                Colour::Fixed(240).paint(format!("message: {}", message))
            );
        }
    };
}

/// Console main loop, returns when the user hits CTRL-D.
pub fn run(mut cpu: Cpu, interrupted: Arc<AtomicBool>) -> Result<()> {
    println!(
        "{}",
        Colour::Green.paint(format!("Welcome in LS-8 version {}", VERSION))
    );
    let prompt = format!("{}", Colour::Fixed(148).bold().paint(">> "));
    let mut rl = Editor::<CommandLineCompleter>::new();
    if rl.load_history(HISTORY_FILE).is_err() {
        println!("No previous history.");
    }
    rl.set_helper(Some(CommandLineCompleter {}));

    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str());
                match BEParser::parse(Rule::sentence, line.as_str()) {
                    Ok(pairs) => match CliCommand::from_pairs(pairs) {
                        Ok(command) => command.execute(&mut cpu, &interrupted),
                        Err(e) => print_err(format!("{}", e).as_str()),
                    },
                    Err(parse_err) => display_error(parse_err),
                };
                if interrupted.load(Ordering::Relaxed) {
                    println!("Execution interrupted by CTRL+C!");
                    interrupted.store(false, Ordering::SeqCst);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL+C caught, press CTRL+D to exit.");
            }
            Err(ReadlineError::Eof) => {
                println!("Quit!");
                break;
            }
            Err(err) => {
                print_err(format!("{:?}", err).as_str());
                break;
            }
        }
    }
    match rl.save_history(HISTORY_FILE) {
        Ok(()) => println!("Writing commands history in '{}'.", HISTORY_FILE),
        Err(e) => print_err(format!("could not save history: {}", e).as_str()),
    }

    Ok(())
}

fn help(topic: Option<&HelpTopic>) {
    match topic {
        Some(HelpTopic::Registers) => {
            println!("{}", Colour::Green.paint("Registers commands:"));
            println!();
            println!("  registers show");
            println!("          Dump the content of the CPU registers.");
            println!();
            println!("  registers flush");
            println!("          Reset the CPU registers to their power on state. This also");
            println!("          restarts a halted processor.");
        }
        Some(HelpTopic::Memory) => {
            println!("{}", Colour::Green.paint("Memory commands:"));
            println!("  memory show ADDRESS LINES");
            println!("          Show LINES lines of 16 bytes starting from ADDRESS.");
            print_example("memory show #0xf0 1");
            println!();
            println!("  memory write ADDRESS 0x(BYTES)");
            println!("          Write the given bytes in memory starting at ADDRESS.");
            print_example("memory write #0x00 0x(82,00,08,47,00,01)");
        }
        Some(HelpTopic::Run) => {
            println!("{}", Colour::Green.paint("Execution commands:"));
            println!("   run [ADDRESS] [until BOOLEAN_CONDITION]");
            println!("          Launch execution of the program. If an address is given, the");
            println!("          program counter is set to it first. Without condition only one");
            println!("          cycle is executed. The execution always stops when the processor");
            println!("          halts.");
            println!();
            println!("{}", Colour::White.bold().paint("Examples:"));
            print_example("run");
            println!("          Execute the instruction at the actual PC register position.");
            println!();
            print_example("run #0x00 until false");
            println!("          Run the program from the start until it halts. This may require");
            println!("          CTRL-C to break.");
            println!();
            print_example("run until R0 >= 0x10");
            println!("          Run until the register R0 is greater or equal to 0x10.");
            println!();
            print_example("run until #0xf4 != 0x00");
            println!("          Run until the given memory address holds a value other than 0.");
            println!();
            print_example("run until PC = 0x12");
            println!("          Run until the program counter equals the given value.");
            println!();
            println!("   trace");
            println!("          Show the program counter, the next 3 bytes and the registers.");
        }
        Some(HelpTopic::Disassemble) => {
            println!("{}", Colour::Green.paint("Disassembler command:"));
            println!();
            println!("  disassemble [ADDRESS] OPERATIONS");
            println!("          Disassemble OPERATIONS instructions starting from ADDRESS. If the");
            println!("          ADDRESS parameter is not provided, the program counter is taken.");
            println!();
            print_example("disassemble #0x00 10");
        }
        Some(HelpTopic::Interrupts) => {
            println!("{}", Colour::Green.paint("Interrupts commands:"));
            println!();
            println!("  interrupt NUMBER");
            println!("          Raise the interrupt NUMBER (0 to 7). It is serviced before the");
            println!("          next instruction if it is enabled in the IM register.");
            print_example("interrupt 0");
            println!();
            println!("  key VALUE");
            println!("          Store VALUE in the key pressed cell (#0xf4) and raise the");
            println!("          keyboard interrupt (1).");
            print_example("key 0x61");
        }
        None => {
            println!("{}", Colour::Green.paint("Available commands:"));
            println!("{}", Colour::White.bold().paint("Registers"));
            println!("  registers show");
            println!("  registers flush");
            println!("{}", Colour::White.bold().paint("Memory"));
            println!("  memory show ADDRESS LINES");
            println!("  memory write ADDRESS 0x(BYTES)");
            println!("{}", Colour::White.bold().paint("Execution"));
            println!("  run [ADDRESS] [until BOOLEAN_CONDITION]");
            println!("  trace");
            println!("{}", Colour::White.bold().paint("Disassembler"));
            println!("  disassemble [ADDRESS] OPERATIONS");
            println!("{}", Colour::White.bold().paint("Interrupts"));
            println!("  interrupt NUMBER");
            println!("  key VALUE");
            println!("{}", Colour::White.bold().paint("Help"));
            println!("  help [registers|memory|run|disassemble|interrupts]");
        }
    }
}

fn print_err(msg: &str) {
    println!("{}: {}", Colour::Red.paint("Error"), msg);
}

fn print_example(msg: &str) {
    println!("          Example: {}", Colour::Fixed(130).paint(msg));
}

struct CommandLineCompleter {}

impl rustyline::completion::Completer for CommandLineCompleter {
    type Candidate = String;
    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> RustyResult<(usize, Vec<Self::Candidate>)> {
        let keywords = vec![
            "registers show",
            "registers flush",
            "memory show #0x",
            "memory write #0x",
            "run ",
            "run #0x",
            "run until ",
            "trace",
            "disassemble ",
            "disassemble #0x",
            "interrupt ",
            "key 0x",
            "help",
            "help registers",
            "help memory",
            "help run",
            "help disassemble",
            "help interrupts",
        ];
        let candidates: Vec<String> = keywords
            .into_iter()
            .filter(|word| word.starts_with(line))
            .map(|word| word.to_owned())
            .collect();

        if candidates.is_empty() {
            Ok((pos, vec![]))
        } else {
            Ok((0, candidates))
        }
    }
}

impl rustyline::hint::Hinter for CommandLineCompleter {
    type Hint = String;
}

impl rustyline::highlight::Highlighter for CommandLineCompleter {}

impl rustyline::validate::Validator for CommandLineCompleter {}

impl rustyline::Helper for CommandLineCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use ls8::Config;

    fn parse(line: &str) -> CliCommand {
        let pairs = BEParser::parse(Rule::sentence, line).unwrap();
        CliCommand::from_pairs(pairs).unwrap()
    }

    fn get_cpu(program: &[u8]) -> Cpu<Vec<u8>> {
        let mut cpu = Cpu::with_output(Config::default(), Vec::new());
        cpu.load(program).unwrap();

        cpu
    }

    #[test]
    fn test_registers_commands() {
        assert_eq!(CliCommand::RegistersShow, parse("registers show"));
        assert_eq!(CliCommand::RegistersFlush, parse("registers flush"));
    }

    #[test]
    fn test_memory_commands() {
        assert_eq!(
            CliCommand::MemoryShow {
                address: 0xf0,
                len: 1
            },
            parse("memory show #0xf0 1")
        );
        assert_eq!(
            CliCommand::MemoryWrite {
                address: 0x10,
                bytes: vec![0x82, 0x00, 0x08]
            },
            parse("memory write #0x10 0x(82,00,08)")
        );
    }

    #[test]
    fn test_run_command() {
        assert_eq!(
            CliCommand::Run {
                address: None,
                stop_condition: BooleanExpression::Value(true)
            },
            parse("run")
        );
        assert_eq!(
            CliCommand::Run {
                address: Some(0x00),
                stop_condition: BooleanExpression::GreaterOrEqual(Source::Register(3), 0x10)
            },
            parse("run #0x00 until R3 >= 0x10")
        );
        assert_eq!(
            CliCommand::Run {
                address: None,
                stop_condition: BooleanExpression::Different(Source::Memory(0xf4), 0x00)
            },
            parse("run until #0xf4 != 0x00")
        );
        assert_eq!(
            CliCommand::Run {
                address: None,
                stop_condition: BooleanExpression::Value(false)
            },
            parse("run until false")
        );
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(CliCommand::Trace, parse("trace"));
        assert_eq!(
            CliCommand::Disassemble {
                address: None,
                len: 10
            },
            parse("disassemble 10")
        );
        assert_eq!(CliCommand::Interrupt(2), parse("interrupt 2"));
        assert_eq!(CliCommand::Key(0x61), parse("key 0x61"));
        assert_eq!(CliCommand::Help(None), parse("help"));
        assert_eq!(
            CliCommand::Help(Some(HelpTopic::Interrupts)),
            parse("help interrupts")
        );
    }

    #[test]
    fn test_syntax_errors() {
        assert!(BEParser::parse(Rule::sentence, "registers").is_err());
        assert!(BEParser::parse(Rule::sentence, "interrupt 8").is_err());
        assert!(BEParser::parse(Rule::sentence, "run until R8 = 0x00").is_err());
        assert!(BEParser::parse(Rule::sentence, "memory show #0x100 1").is_err());
    }

    #[test]
    fn test_conditions() {
        let mut cpu = get_cpu(&[0x82, 0x00, 0x08, 0x01]);
        cpu.run().unwrap();
        assert!(BooleanExpression::Equal(Source::Register(0), 0x08).solve(&cpu));
        assert!(BooleanExpression::Equal(Source::ProgramCounter, 0x04).solve(&cpu));
        assert!(BooleanExpression::StrictlyGreater(Source::Register(7), 0xf3).solve(&cpu));
        assert!(BooleanExpression::Equal(Source::Memory(0x00), 0x82).solve(&cpu));
        assert!(BooleanExpression::LesserOrEqual(Source::Flags, 0x00).solve(&cpu));
        assert!(!BooleanExpression::Value(false).solve(&cpu));
    }

    #[test]
    fn test_mem_dump() {
        let cpu = get_cpu(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01]);
        let lines = mem_dump(0x03, 1, &cpu).unwrap();
        assert_eq!(
            vec!["#0x00:  82 00 08 47 00 01 00 00  00 00 00 00 00 00 00 00"],
            lines
        );
        assert!(mem_dump(0xf0, 2, &cpu).is_err());
    }
}
