use anyhow::Result;

use slidenav_core::AppConfig;

/// Print the effective configuration, optionally writing it to the config file
pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();
    if init {
        if path.exists() {
            println!("Config file already exists: {}", path.display());
        } else {
            config.save()?;
            println!("Wrote {}", path.display());
        }
        return Ok(());
    }

    println!("# {}", path.display());
    println!("# log file: {}", config.log_path().display());
    println!();
    print!("{}", config.to_toml()?);
    Ok(())
}
