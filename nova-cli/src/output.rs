//! Output abstraction so command handlers can be tested without capturing
//! stdout.

use crate::error::CliResult;

/// Printing interface used by every command handler.
pub trait Output: Send + Sync {
    /// Print a line of normal output.
    fn print(&self, msg: &str) -> CliResult<()>;

    /// Print an error message.
    fn error(&self, msg: &str) -> CliResult<()>;

    fn print_json(&self, data: &serde_json::Value) -> CliResult<()> {
        self.print(&serde_json::to_string_pretty(data)?)
    }

    fn success(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("✅ {}", msg))
    }

    fn warning(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("⚠️  {}", msg))
    }

    fn info(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("ℹ️  {}", msg))
    }
}

/// Writes to stdout/stderr.
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) -> CliResult<()> {
        println!("{}", msg);
        Ok(())
    }

    fn error(&self, msg: &str) -> CliResult<()> {
        eprintln!("❌ {}", msg);
        Ok(())
    }
}
