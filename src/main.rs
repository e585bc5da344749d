use clap::Parser;
use firlight::app::App;
use firlight::config::Config;
use firlight::onboard;
use firlight::render::TerminalRenderer;
use std::io;

#[derive(Parser)]
#[command(version, about = "Terminal-based animated Christmas tree widget", long_about = None)]
struct Cli {
    #[arg(long, help = "Start with falling snow disabled")]
    no_snow: bool,

    #[arg(long, help = "Start with twinkling lights disabled")]
    no_lights: bool,

    #[arg(short, long, value_name = "FPS", help = "Animation frames per second (1-120)")]
    fps: Option<u64>,

    #[arg(long, help = "Run the interactive setup and write a config file")]
    setup: bool,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.setup {
        if let Err(e) = onboard::run() {
            eprintln!("Setup failed: {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            eprintln!("\nContinuing with default settings.");
            eprintln!("\nTo customize, run `firlight --setup` or create a config file at:");
            eprintln!("  $XDG_CONFIG_HOME/firlight/config.toml");
            eprintln!("  or ~/.config/firlight/config.toml");
            eprintln!("\nExample config.toml:");
            eprintln!("  [scene]");
            eprintln!("  snow = true");
            eprintln!("  lights = true");
            eprintln!();
            Config::default()
        }
    };

    if cli.no_snow {
        config.scene.snow = false;
    }
    if cli.no_lights {
        config.scene.lights = false;
    }
    if let Some(fps) = cli.fps {
        config.animation.fps = fps;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid settings: {e}");
        std::process::exit(1);
    }

    let mut renderer = TerminalRenderer::new()?;
    renderer.init()?;

    let (term_width, term_height) = renderer.get_size();
    let mut app = App::new(&config, term_width, term_height);

    let result = app.run(&mut renderer).await;

    renderer.cleanup()?;

    result
}
