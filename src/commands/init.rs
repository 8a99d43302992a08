use anyhow::Result;
use std::path::PathBuf;

use crate::config::CONFIG_FILE;
use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Waybill Configuration

[classifier]
# Carrier codes to skip entirely (see `waybill carriers` for the full set).
disabled_carriers = []

# Experimental: report provider "endicia" for 420-prefixed USPS IMpb codes.
endicia_override = false

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE} configuration file");

    Ok(())
}
