use anyhow::Result;
use log::Level;
use simple_logger::init_with_level;
use std::env;

const LOG_LEVEL_ENV_VAR: &str = "PRSCRIBE_LOG";

pub fn init() -> Result<()> {
    let level = level_from(env::var(LOG_LEVEL_ENV_VAR).ok().as_deref());

    init_with_level(level)?;

    Ok(())
}

fn level_from(value: Option<&str>) -> Level {
    value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(Level::Info)
}
