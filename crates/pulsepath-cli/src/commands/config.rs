use pulsepath_core::Config;

pub fn run(config: &Config) -> anyhow::Result<()> {
    print!("{}", config.masked().to_toml()?);
    Ok(())
}
