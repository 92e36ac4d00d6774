use anyhow::Result;
use daylist_core::config::DayListConfig;
use owo_colors::OwoColorize;

pub fn run(config: &DayListConfig) -> Result<()> {
    let config_path = DayListConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:      {}", config_path.display());
    println!("  Tasks:       {}", config.persistence().path().display());

    println!();
    println!("{}", "Settings".bold());
    println!("  Week starts: {:?}", config.week_start);
    println!("  Text policy: {:?}", config.text_policy);
    println!("  Recovery:    {:?}", config.recovery);

    Ok(())
}
