//! Interactive first-run setup: asks for the scene and animation
//! preferences and writes them to the config file.

use dialoguer::{Confirm, Input};
use std::fs;

use crate::config::{Config, default_fps, default_snowflakes};
use crate::error::{ConfigError, OnboardError};

pub fn run() -> Result<(), OnboardError> {
    println!("{}", console::style("firlight setup").bold().green());
    println!("Answers are written to the config file and used on every start.\n");

    let mut config = Config::default();

    config.scene.snow = Confirm::new()
        .with_prompt("Enable falling snow?")
        .default(true)
        .interact()?;

    config.scene.lights = Confirm::new()
        .with_prompt("Enable twinkling lights?")
        .default(true)
        .interact()?;

    config.animation.fps = Input::new()
        .with_prompt("Animation frames per second")
        .default(default_fps())
        .validate_with(|fps: &u64| {
            if (1..=120).contains(fps) {
                Ok(())
            } else {
                Err("fps must be between 1 and 120")
            }
        })
        .interact_text()?;

    config.scene.snowflakes = Input::new()
        .with_prompt("Snowflake count")
        .default(default_snowflakes())
        .validate_with(|count: &u16| {
            if (1..=500).contains(count) {
                Ok(())
            } else {
                Err("snowflake count must be between 1 and 500")
            }
        })
        .interact_text()?;

    let config_dir = Config::get_config_dir()?;
    fs::create_dir_all(&config_dir).map_err(|e| ConfigError::WriteError {
        path: config_dir.display().to_string(),
        source: e,
    })?;

    let config_path = Config::get_config_path()?;
    config.save(&config_path)?;

    println!(
        "\n{} Config written to {}",
        console::style("✓").green(),
        config_path.display()
    );
    println!("Run {} to start the widget.", console::style("firlight").cyan());

    Ok(())
}
