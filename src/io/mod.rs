pub mod output;

use anyhow::Result;
use std::path::Path;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
