use std::path::PathBuf;

use anyhow::Result;
use condeck_core::config::CondeckConfig;
use condeck_core::store::ContestStore;
use owo_colors::OwoColorize;

pub fn run(data_dir: Option<String>) -> Result<()> {
    let config_path = CondeckConfig::config_path()?;
    let mut config = CondeckConfig::load()?;

    if let Some(data_dir) = data_dir {
        config.data_dir = PathBuf::from(data_dir);
        config.save()?;
        println!(
            "{}",
            format!("  Data directory set to {}", config.display_path().display()).green()
        );
        return Ok(());
    }

    let contests = ContestStore::new(config.data_path()).load();

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Contests:  {}", config.display_path().display());
    println!();
    println!("{} {}", "Tracked contests:".bold(), contests.len());

    Ok(())
}
