use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for psrx-iop")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Quick checks before commit (fmt, clippy)
    Check {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Build the project
    Build {
        #[arg(long)]
        release: bool,
    },
    /// Run tests
    Test(TestArgs),
    /// Run benchmarks
    Bench,
    /// Run a raw program image on the IOP
    Run {
        /// Path to the program image
        program: String,
        /// Number of instructions to execute
        #[arg(short = 'n', long, default_value = "100000")]
        instructions: u64,
        /// Load address (hex with 0x prefix, or decimal)
        #[arg(long, default_value = "0x00010000")]
        load_address: String,
        /// Stop the core instead of aborting on a fault
        #[arg(long)]
        halt: bool,
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Pre-commit hook (fmt, clippy, test)
    PreCommit,
    /// Install git hooks
    InstallHooks,
}

#[derive(Args, Default)]
struct TestArgs {
    #[arg(long)]
    doc: bool,
    #[arg(long)]
    ignored: bool,
    /// Run only interpreter tests
    #[arg(long)]
    interpreter: bool,
    /// Run only IOP context tests
    #[arg(long)]
    iop: bool,
    /// Run only RAM tests
    #[arg(long)]
    memory: bool,
    /// Run only configuration tests
    #[arg(long)]
    config: bool,
    /// Number of cases per property test
    #[arg(long)]
    proptest_cases: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Check { verbose } => run_check(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Build { release } => run_build(release),
        Commands::Test(args) => run_test(&args),
        Commands::Bench => run_bench(),
        Commands::Run {
            program,
            instructions,
            load_address,
            halt,
            release,
        } => run_program(&program, instructions, &load_address, halt, release),
        Commands::PreCommit => run_pre_commit(),
        Commands::InstallHooks => install_hooks(),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== Running CI Pipeline ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;
    run_task("Build", || run_build(false), verbose)?;
    run_task("Test", || run_test(&TestArgs::default()), verbose)?;
    run_task(
        "Doc Test",
        || {
            run_test(&TestArgs {
                doc: true,
                ..TestArgs::default()
            })
        },
        verbose,
    )?;

    let elapsed = start.elapsed();
    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn run_check(verbose: bool) -> Result<()> {
    println!("{}", "=== Running Quick Checks ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;

    let elapsed = start.elapsed();
    println!(
        "\n{} {}",
        "✓ Checks passed in".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn run_fmt(check: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("fmt").arg("--all");

    if check {
        cmd.arg("--").arg("--check");
    }

    execute_command(&mut cmd)
}

fn run_clippy(fix: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("clippy").arg("--workspace").arg("--all-targets");

    if fix {
        cmd.arg("--fix");
    } else {
        cmd.arg("--").arg("-D").arg("warnings");
    }

    execute_command(&mut cmd)
}

fn run_build(release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("build");

    if release {
        cmd.arg("--release");
    }

    execute_command(&mut cmd)
}

fn test_command(args: &TestArgs) -> Command {
    let mut cmd = Command::new("cargo");
    cmd.arg("test");
    if let Some(cases) = args.proptest_cases {
        cmd.env("PROPTEST_CASES", cases.to_string());
    }
    cmd
}

fn run_test(args: &TestArgs) -> Result<()> {
    if args.doc {
        let mut cmd = test_command(args);
        cmd.arg("--doc");

        if args.ignored {
            cmd.arg("--").arg("--ignored");
        }

        return execute_command(&mut cmd);
    }

    let modules = [
        (args.interpreter, "core::interpreter", "Interpreter"),
        (args.iop, "core::iop", "IOP"),
        (args.memory, "core::memory", "Memory"),
        (args.config, "core::config", "Config"),
    ];
    let selected: Vec<_> = modules.iter().filter(|(enabled, _, _)| *enabled).collect();

    if selected.is_empty() {
        // Unit, integration and CLI tests
        let mut cmd = test_command(args);
        cmd.arg("--workspace");

        if args.ignored {
            cmd.arg("--").arg("--ignored");
        }

        return execute_command(&mut cmd);
    }

    let mut failed = Vec::new();

    for (_, module_path, module_name) in &selected {
        println!("{} Running {} tests...", "→".blue(), module_name.bold());

        let mut cmd = test_command(args);
        cmd.arg("--lib").arg(module_path);

        if args.ignored {
            cmd.arg("--").arg("--ignored");
        }

        match execute_command(&mut cmd) {
            Ok(_) => println!("{} {} tests passed\n", "✓".green(), module_name),
            Err(e) => {
                println!("{} {} tests failed\n", "✗".red(), module_name);
                if selected.len() == 1 {
                    return Err(e);
                }
                failed.push(*module_name);
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("Module tests failed: {}", failed.join(", "))
    }
}

fn run_bench() -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("bench");

    execute_command(&mut cmd)
}

fn run_program(
    program: &str,
    instructions: u64,
    load_address: &str,
    halt: bool,
    release: bool,
) -> Result<()> {
    println!("{}", "=== IOP Run ===".bold().blue());

    if !Path::new(program).exists() {
        println!(
            "{} Program image not found: {}",
            "✗".red().bold(),
            program.yellow()
        );
        anyhow::bail!("Program image not found");
    }

    println!("{} Program: {}", "✓".green(), program.cyan());
    println!(
        "{} Instructions: {}",
        "→".blue(),
        instructions.to_string().bold()
    );
    println!("{} Load address: {}", "→".blue(), load_address.bold());
    println!(
        "{} On fault: {}",
        "→".blue(),
        if halt {
            "halt".yellow().bold()
        } else {
            "abort".red().bold()
        }
    );
    println!();

    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("run").arg("--bin").arg("psrx-iop");

    if release {
        cmd.arg("--release");
    }

    cmd.arg("--")
        .arg(program)
        .arg("-n")
        .arg(instructions.to_string())
        .arg("--load-address")
        .arg(load_address)
        .arg("--fatal")
        .arg(if halt { "halt" } else { "abort" });

    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        println!("\n{} IOP run failed", "✗".red().bold());
        anyhow::bail!("IOP run failed with exit code: {}", status);
    }

    let elapsed = start.elapsed();
    println!(
        "\n{} IOP run completed in {}",
        "✓".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn run_pre_commit() -> Result<()> {
    println!("{}", "=== Pre-commit Checks ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), false)?;
    run_task("Clippy", || run_clippy(false), false)?;
    run_task(
        "Test",
        || {
            run_test(&TestArgs {
                proptest_cases: Some(64),
                ..TestArgs::default()
            })
        },
        false,
    )?;

    let elapsed = start.elapsed();
    println!(
        "\n{} {}",
        "✓ Pre-commit checks passed in".green().bold(),
        format!("{:.2}s", elapsed.as_secs_f64()).bold()
    );

    Ok(())
}

fn install_hooks() -> Result<()> {
    use std::fs;

    println!("{}", "Installing git hooks...".bold());

    let hook_content = r#"#!/bin/sh
# Auto-generated by cargo x install-hooks
set -e

echo "Running pre-commit checks..."
cargo x pre-commit
"#;

    let hook_path = ".git/hooks/pre-commit";
    fs::write(hook_path, hook_content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)?;
    }

    println!("{}", "✓ Git hooks installed".green());
    println!("  Pre-commit hook will run: fmt, clippy, test");

    Ok(())
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();

    match task() {
        Ok(_) => {
            let elapsed = start.elapsed();
            println!(
                "{} {}",
                "✓".green().bold(),
                if verbose {
                    format!("({:.2}s)", elapsed.as_secs_f64())
                } else {
                    String::new()
                }
            );
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗".red().bold());
            Err(e)
        }
    }
}

fn execute_command(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("Command failed with exit code: {}", status);
    }

    Ok(())
}
