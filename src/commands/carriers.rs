use anyhow::Result;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config;
use crate::io::output::create_writer;
use crate::registry;

pub fn list_carriers(format: Option<OutputFormat>, output: Option<PathBuf>) -> Result<()> {
    let config = config::get_config();
    let format = super::resolve_format(format, config);
    let mut writer = create_writer(output, format)?;
    writer.write_carriers(registry::all_carriers())
}
