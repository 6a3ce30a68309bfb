use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{check::check, generate::generate, init::init},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// `Ok` carries the exit status of a completed command, including generation
/// failures (`ExitStatus::Failure`). `Err` means the command could not run
/// at all, e.g. an unreadable config file or a missing resource root.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
