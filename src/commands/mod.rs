pub mod carriers;
pub mod classify;
pub mod init;

use crate::cli::OutputFormat;
use crate::config::WaybillConfig;
use crate::io::output;

/// Resolves the effective output format: an explicit CLI flag wins, then the
/// config default, then terminal.
pub(crate) fn resolve_format(
    flag: Option<OutputFormat>,
    config: &WaybillConfig,
) -> output::OutputFormat {
    match flag {
        Some(format) => format.into(),
        None => match config.output.default_format.as_str() {
            "json" => output::OutputFormat::Json,
            _ => output::OutputFormat::Terminal,
        },
    }
}
