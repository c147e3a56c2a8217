use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for gameloop")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all checks: fmt, clippy, tests, doc
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
    /// Run the object demo and both camera variants
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            cargo("fmt --check", &["fmt", "--all", "--", "--check"])?;
            run_clippy()?;
            cargo("test", &["test", "--workspace"])?;
            cargo("doc", &["doc", "--workspace", "--no-deps"])?;
        }
        Commands::Fmt => cargo("fmt --check", &["fmt", "--all", "--", "--check"])?,
        Commands::Clippy => run_clippy()?,
        Commands::Test => cargo("test", &["test", "--workspace"])?,
        Commands::Doc => cargo("doc", &["doc", "--workspace", "--no-deps"])?,
        Commands::Build => cargo("build", &["build", "--workspace"])?,
        Commands::Demo => {
            run_demo(&["objects"])?;
            run_demo(&["camera"])?;
            run_demo(&["camera", "--bounded"])?;
        }
    }

    Ok(())
}

fn run_clippy() -> Result<()> {
    cargo(
        "clippy",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )
}

fn run_demo(demo_args: &[&str]) -> Result<()> {
    let mut args = vec!["run", "-q", "-p", "gameloop-cli", "--"];
    args.extend_from_slice(demo_args);
    cargo(&format!("run {}", demo_args.join(" ")), &args)
}

/// Run `cargo <args>` and fail if it exits non-zero.
fn cargo(label: &str, args: &[&str]) -> Result<()> {
    println!("==> Running cargo {label}");
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {label} failed");
    }
    Ok(())
}
