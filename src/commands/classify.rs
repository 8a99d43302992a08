use anyhow::Result;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::config;
use crate::core::Package;
use crate::io::output::create_writer;

pub struct ClassifyConfig {
    pub code: String,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub original: bool,
}

pub fn classify_code(cmd: ClassifyConfig) -> Result<()> {
    let config = config::get_config();
    let classifier = config.classifier();
    let package = Package::with_classifier(&cmd.code, &classifier);

    let format = super::resolve_format(cmd.format, config);
    let mut writer = create_writer(cmd.output, format)?;
    writer.write_package(&package, cmd.original)
}
