//! Interactive front end for the pipesim core.
//!
//! Loads a hex-word program image, then drops into a command loop over the
//! simulator facade:
//! 1. **Execution:** `sim` (to completion), `run <n>` (bounded), `reset`.
//! 2. **Inspection:** `rdump`, `mdump <start> <stop>`, `show` (pipeline
//!    latches), `print` (program listing).
//! 3. **Pokes:** `input <reg> <val>`, `high <val>`, `low <val>`.
//!
//! All execution and state semantics live in `pipesim-core`; this binary is
//! parsing and presentation only.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pipesim_core::isa::disasm::disassemble;
use pipesim_core::sim::loader;
use pipesim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "pipesim",
    version,
    about = "Five-stage pipeline simulator for an RV32 subset",
    long_about = "Load a program image (hexadecimal 32-bit words, whitespace-separated)\n\
                  and drive it through an interactive command loop.\n\n\
                  Set RUST_LOG=pipesim_core=trace for per-stage tracing."
)]
struct Cli {
    /// Program image file (hex words, one instruction slot per token).
    program: PathBuf,

    /// JSON configuration file (memory map, text base). Defaults built in.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let mut sim = match Simulator::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let words = match loader::load_words(&cli.program) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };
    sim.load_program(&words);

    println!("pipesim — five-stage pipeline simulator");
    println!(
        "{} words loaded at {:#010x}.\n",
        words.len(),
        sim.text_base()
    );
    print_help();

    shell(&mut sim);
}

/// Reads the configuration file, or falls back to the built-in defaults.
fn load_config(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: cannot read config `{}`: {err}", path.display());
            process::exit(1);
        }
    };
    match Config::from_json(&text) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

/// Runs the interactive command loop until `quit` or end of input.
fn shell(sim: &mut Simulator) {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("pipesim> ");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        if !dispatch(sim, &line) {
            break;
        }
    }
}

/// Dispatches one command line. Returns `false` to exit the loop.
fn dispatch(sim: &mut Simulator, line: &str) -> bool {
    let mut args = line.split_whitespace();
    let Some(command) = args.next() else {
        return true;
    };

    match command.to_ascii_lowercase().as_str() {
        "sim" | "s" => cmd_sim(sim),
        "show" | "sh" => cmd_show(sim),
        "run" | "r" => cmd_run(sim, args.next()),
        "rdump" | "rd" => cmd_rdump(sim),
        "reset" | "re" => {
            sim.reset();
            println!("Registers and memory cleared, program reloaded.\n");
        }
        "mdump" | "m" => cmd_mdump(sim, args.next(), args.next()),
        "input" | "i" => cmd_input(sim, args.next(), args.next()),
        "high" | "h" => cmd_scratch(sim, args.next(), Scratch::Hi),
        "low" | "l" => cmd_scratch(sim, args.next(), Scratch::Lo),
        "print" | "p" => cmd_print(sim),
        "?" | "help" => print_help(),
        "quit" | "q" | "exit" => {
            println!("Exiting pipesim.");
            return false;
        }
        _ => println!("Invalid command. Type `?` for help."),
    }
    true
}

/// Which scratch register a `high`/`low` command targets.
enum Scratch {
    Hi,
    Lo,
}

/// `sim`: run to completion.
fn cmd_sim(sim: &mut Simulator) {
    if !sim.is_running() {
        println!("Simulation stopped.\n");
        return;
    }
    println!("Simulation started...\n");
    let executed = sim.run_to_completion();
    println!("Simulation finished after {executed} cycles.\n");
}

/// `run <n>`: run a bounded number of cycles.
fn cmd_run(sim: &mut Simulator, count: Option<&str>) {
    let Some(cycles) = count.and_then(parse_u32) else {
        println!("usage: run <cycles>");
        return;
    };
    if !sim.is_running() {
        println!("Simulation stopped.\n");
        return;
    }
    println!("Running simulator for {cycles} cycles...\n");
    let executed = sim.run(u64::from(cycles));
    if executed < u64::from(cycles) {
        println!("Simulation stopped after {executed} cycles.\n");
    }
}

/// `rdump`: dump counters, PC, registers, and scratch registers.
fn cmd_rdump(sim: &Simulator) {
    let state = sim.state();
    let stats = sim.stats();
    println!("-------------------------------------");
    println!("Cycles executed        : {}", stats.cycles);
    println!("Instructions retired   : {}", stats.instructions_retired);
    println!("PC                     : {:#010x}", state.pc);
    println!("-------------------------------------");
    println!("[Register]\t[Value]");
    for (i, value) in state.regs.as_slice().iter().enumerate() {
        println!("[x{i}]\t: {value:#010x}");
    }
    println!("-------------------------------------");
    println!("[HI]\t: {:#010x}", state.hi);
    println!("[LO]\t: {:#010x}", state.lo);
    println!("-------------------------------------\n");
}

/// `mdump <start> <stop>`: dump a word-aligned memory range (hex bounds).
fn cmd_mdump(sim: &Simulator, start: Option<&str>, stop: Option<&str>) {
    let (Some(start), Some(stop)) = (start.and_then(parse_hex), stop.and_then(parse_hex)) else {
        println!("usage: mdump <start> <stop>  (hex addresses)");
        return;
    };
    println!("-------------------------------------------------------------");
    println!("Memory content [{start:#010x}..{stop:#010x}]:");
    println!("-------------------------------------------------------------");
    println!("\t[Address]\t[Value]");
    let mut addr = start;
    while addr <= stop {
        println!("\t{:#010x}\t{:#010x}", addr, sim.read_memory(addr));
        let Some(next) = addr.checked_add(4) else {
            break;
        };
        addr = next;
    }
    println!();
}

/// `input <reg> <val>`: set a general-purpose register.
fn cmd_input(sim: &mut Simulator, reg: Option<&str>, value: Option<&str>) {
    let (Some(reg), Some(value)) = (
        reg.and_then(|t| t.trim_start_matches('x').parse::<usize>().ok()),
        value.and_then(parse_u32),
    ) else {
        println!("usage: input <reg> <value>");
        return;
    };
    match sim.set_register(reg, value) {
        Ok(()) => println!("x{reg} = {value:#010x}"),
        Err(err) => println!("error: {err}"),
    }
}

/// `high <val>` / `low <val>`: set a scratch register.
fn cmd_scratch(sim: &mut Simulator, value: Option<&str>, which: Scratch) {
    let Some(value) = value.and_then(parse_u32) else {
        println!("usage: high|low <value>");
        return;
    };
    match which {
        Scratch::Hi => {
            sim.set_hi(value);
            println!("HI = {value:#010x}");
        }
        Scratch::Lo => {
            sim.set_lo(value);
            println!("LO = {value:#010x}");
        }
    }
}

/// `print`: list the loaded program with disassembly.
fn cmd_print(sim: &Simulator) {
    let base = sim.text_base();
    for (i, word) in sim.program().iter().enumerate() {
        let addr = base.wrapping_add(i as u32 * 4);
        match disassemble(*word) {
            Some(text) => println!("{addr:#010x}: {word:08x}  {text}"),
            None => println!("{addr:#010x}: {word:08x}  ??"),
        }
    }
    println!();
}

/// `show`: display the current pipeline latch contents.
fn cmd_show(sim: &Simulator) {
    let latches = sim.latches();
    let ir = |word: u32| disassemble(word).unwrap_or_else(|| format!("{word:#010x}"));

    println!("Current PC : {:#010x}", sim.state().pc);
    println!();
    println!("IF/ID.IR   : {}", ir(latches.if_id.ir));
    println!("IF/ID.PC   : {:#010x}", latches.if_id.pc);
    println!();
    println!("ID/EX.IR   : {}", ir(latches.id_ex.ir));
    println!("ID/EX.A    : {}", latches.id_ex.a);
    println!("ID/EX.B    : {}", latches.id_ex.b);
    println!("ID/EX.imm  : {}", latches.id_ex.imm);
    println!();
    println!("EX/MEM.IR  : {}", ir(latches.ex_mem.ir));
    println!("EX/MEM.A   : {}", latches.ex_mem.a);
    println!("EX/MEM.B   : {}", latches.ex_mem.b);
    println!("EX/MEM.ALU : {}", latches.ex_mem.alu);
    println!();
    println!("MEM/WB.IR  : {}", ir(latches.mem_wb.ir));
    println!("MEM/WB.ALU : {}", latches.mem_wb.alu);
    println!("MEM/WB.LMD : {:#x}", latches.mem_wb.lmd);
    println!();
}

/// Prints the command menu.
fn print_help() {
    println!("------------------------------------------------------------------");
    println!("sim\t\t\t-- simulate program to completion");
    println!("run <n>\t\t\t-- simulate program for <n> cycles");
    println!("rdump\t\t\t-- dump register values");
    println!("reset\t\t\t-- clear registers/memory and reload the program");
    println!("input <reg> <val>\t-- set register <reg> to <val>");
    println!("mdump <start> <stop>\t-- dump memory from <start> to <stop>");
    println!("high <val>\t\t-- set the HI register to <val>");
    println!("low <val>\t\t-- set the LO register to <val>");
    println!("print\t\t\t-- print the program loaded into memory");
    println!("show\t\t\t-- print the current pipeline latch contents");
    println!("?\t\t\t-- display this help menu");
    println!("quit\t\t\t-- exit the simulator");
    println!("------------------------------------------------------------------\n");
}

/// Parses a decimal or `0x`-prefixed hex value; `-` negates (wrapping).
fn parse_u32(token: &str) -> Option<u32> {
    if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        u32::from_str_radix(hex, 16).ok()
    } else if let Some(rest) = token.strip_prefix('-') {
        rest.parse::<u32>().ok().map(u32::wrapping_neg)
    } else {
        token.parse().ok()
    }
}

/// Parses a hex address, with or without a `0x` prefix.
fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}
