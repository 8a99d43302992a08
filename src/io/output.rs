use colored::*;
use serde_json::json;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::core::Package;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    /// Writes one classification. With `original` set, the tracking-code
    /// line reports the caller's original input instead of the effective
    /// code (JSON output always carries both fields).
    fn write_package(&mut self, package: &Package, original: bool) -> anyhow::Result<()>;
    fn write_carriers(&mut self, carriers: &[(&str, &str)]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_package(&mut self, package: &Package, _original: bool) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(package)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_carriers(&mut self, carriers: &[(&str, &str)]) -> anyhow::Result<()> {
        let entries: Vec<_> = carriers
            .iter()
            .map(|(code, name)| json!({ "code": code, "name": name }))
            .collect();
        let json = serde_json::to_string_pretty(&entries)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_package(&mut self, package: &Package, original: bool) -> anyhow::Result<()> {
        if package.is_classified() {
            writeln!(
                self.writer,
                "{} {}",
                "Carrier:".bold(),
                package.carrier_name().green()
            )?;
            writeln!(
                self.writer,
                "{} {}",
                "Provider:".bold(),
                package.provider_name()
            )?;
        } else {
            writeln!(self.writer, "{} {}", "Carrier:".bold(), "unknown".yellow())?;
        }
        writeln!(
            self.writer,
            "{} {}",
            "Tracking code:".bold(),
            package.tracking_code(original)
        )?;
        if !original && package.effective_code != package.original_input {
            writeln!(
                self.writer,
                "{} {}",
                "Original input:".bold(),
                package.original_input
            )?;
        }
        Ok(())
    }

    fn write_carriers(&mut self, carriers: &[(&str, &str)]) -> anyhow::Result<()> {
        for (code, name) in carriers {
            writeln!(self.writer, "{:<12} {}", code, name.bold())?;
        }
        Ok(())
    }
}

/// Builds a boxed writer for the requested format, targeting a file when
/// `output` is given and stdout otherwise.
pub fn create_writer(
    output: Option<PathBuf>,
    format: OutputFormat,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink)),
    })
}
