// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Run a raw MIPS program image on the IOP interpreter
//!
//! The image is copied into IOP RAM and executed for a fixed number of
//! instructions. Interpreter faults are handled according to the fatal
//! policy: `abort` ends the process with a non-zero status, `halt` stops
//! the core and still reports its final state.

use clap::Parser;
use log::{error, info, warn};
use psrx_iop::core::config::{FatalPolicy, IopConfig};
use psrx_iop::core::error::IopError;
use psrx_iop::core::iop::Iop;
use std::env;
use std::fs;
use std::path::PathBuf;

/// PlayStation I/O processor interpreter
#[derive(Parser)]
#[command(name = "psrx-iop")]
#[command(about = "Run a raw MIPS program on the PlayStation IOP interpreter", long_about = None)]
struct Args {
    /// Path to the raw little-endian program image
    program: PathBuf,

    /// TOML configuration file (falls back to $PSRX_IOP_CONFIG)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of instructions to execute
    #[arg(short = 'n', long)]
    instructions: Option<u64>,

    /// Address the image is loaded at (hex with 0x prefix, or decimal)
    #[arg(short = 'l', long, value_parser = parse_address)]
    load_address: Option<u32>,

    /// First instruction to execute (defaults to the load address)
    #[arg(short = 'e', long, value_parser = parse_address)]
    entry: Option<u32>,

    /// What to do on an interpreter fault
    #[arg(long, value_enum)]
    fatal: Option<FatalPolicy>,

    /// Print the final register state as JSON
    #[arg(long)]
    dump_json: bool,
}

fn parse_address(value: &str) -> Result<u32, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", value, e))
}

fn load_config(args: &Args) -> Result<IopConfig, IopError> {
    let path = args
        .config
        .clone()
        .or_else(|| env::var_os("PSRX_IOP_CONFIG").map(PathBuf::from));

    let mut config = match path {
        Some(path) => IopConfig::from_file(path)?,
        None => IopConfig::default(),
    };

    // Command line flags override the file
    if let Some(instructions) = args.instructions {
        config.instructions = instructions;
    }
    if let Some(load_address) = args.load_address {
        config.load_address = load_address;
    }
    if let Some(entry) = args.entry {
        config.entry_point = Some(entry);
    }
    if let Some(policy) = args.fatal {
        config.fatal_policy = policy;
    }

    config.validate()?;
    Ok(config)
}

fn report(iop: &Iop, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&iop.snapshot())?);
    } else {
        iop.dump_registers();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (for log level and default config path)
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("psrx-iop v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = load_config(&args)?;

    info!("Loading program from: {}", args.program.display());
    let image = fs::read(&args.program)?;

    let mut iop = Iop::with_config(&config)?;
    if let Err(e) = iop.load_program(config.load_address, &image) {
        error!("Failed to load program: {}", e);
        return Err(Box::new(e));
    }

    info!(
        "Loaded {} bytes at 0x{:08X}, entry 0x{:08X}",
        image.len(),
        config.load_address,
        config.entry()
    );

    let total_instructions = config.instructions;
    let log_interval = (total_instructions / 10).max(1);

    for i in 0..total_instructions {
        if i % log_interval == 0 && i > 0 {
            info!(
                "Progress: {}/{} instructions | PC: 0x{:08X}",
                i,
                total_instructions,
                iop.pc()
            );
        }

        if let Err(e) = iop.step() {
            match config.fatal_policy {
                FatalPolicy::Abort => {
                    error!("{}", e);
                    error!("Instruction count: {}", i);
                    iop.dump_registers();
                    std::process::exit(1);
                }
                FatalPolicy::Halt => {
                    warn!("IOP halted: {}", e);
                    warn!("Instruction count: {}", i);
                    report(&iop, args.dump_json)?;
                    return Ok(());
                }
            }
        }
    }

    info!("Execution completed successfully!");
    info!("Total instructions: {}", iop.instructions());
    info!("Final PC: 0x{:08X}", iop.pc());

    report(&iop, args.dump_json)?;
    Ok(())
}
