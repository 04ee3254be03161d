mod app;
mod load;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use vellum_draw::{Interpreter, Scene};
use vellum_engine::device::GpuInit;
use vellum_engine::logging::{init_logging, LoggingConfig};
use vellum_engine::text::FontSystem;
use vellum_engine::window::{LogicalPosition, LogicalSize, Runtime, RuntimeConfig};

use app::SceneApp;

/// Interactive 2-D scene editor driven by shape scripts.
#[derive(Parser, Debug)]
#[command(name = "vellum", version, about, long_about = None)]
struct Cli {
    /// Scripts to load in order. Reads standard input when omitted or `-`.
    files: Vec<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// env_logger filter, e.g. `vellum::interp=debug`. Overrides -v and RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 640.0)]
    width: f32,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 480.0)]
    height: f32,

    /// TrueType/OpenType font used for all text. Defaults to a system font.
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,
}

impl Cli {
    fn logging(&self) -> LoggingConfig {
        let default_level = match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        // -v wins over RUST_LOG; --log wins over both.
        let env_filter = self
            .log
            .clone()
            .or_else(|| (self.verbose > 0).then(|| default_level.to_string()));
        LoggingConfig {
            env_filter,
            default_level,
            ..LoggingConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging());

    let mut scene = Scene::with_size(cli.width, cli.height);
    if let Err(e) = load_scene(&cli.files, &mut scene) {
        eprintln!("vellum: {e:#}");
        scene.set_exit_status(1);
        std::process::exit(scene.exit_status());
    }

    let fonts = load_fonts(cli.font.as_deref())?;

    let config = RuntimeConfig {
        title: "vellum".to_string(),
        initial_size: LogicalSize::new(cli.width as f64, cli.height as f64),
        initial_position: Some(LogicalPosition::new(128.0, 128.0)),
    };

    log::debug!(target: "vellum::graphics", "entering event loop");
    Runtime::run(config, GpuInit::default(), SceneApp::new(scene, fonts))
}

/// Runs every script; the interpreter is dropped here, which logs the
/// template registry.
fn load_scene(files: &[PathBuf], scene: &mut Scene) -> Result<()> {
    let mut interp = Interpreter::new();
    for (name, source) in load::read_sources(files)? {
        load::load_source(&name, &source, &mut interp, scene)?;
    }
    Ok(())
}

fn load_fonts(path: Option<&std::path::Path>) -> Result<FontSystem> {
    let mut fonts = FontSystem::new();
    let bytes = match path {
        Some(p) => std::fs::read(p).with_context(|| format!("{}: cannot read font", p.display()))?,
        None => system_font(),
    };
    if bytes.is_empty() {
        log::warn!("no usable font found; text will not be drawn (use --font)");
        return Ok(fonts);
    }
    fonts.load_font(&bytes).context("failed to load font")?;
    Ok(fonts)
}

fn system_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_window() {
        let cli = Cli::parse_from(["vellum"]);
        assert!(cli.files.is_empty());
        assert_eq!((cli.width, cli.height), (640.0, 480.0));
        assert_eq!(cli.logging().env_filter, None);
    }

    #[test]
    fn verbosity_and_filter() {
        let cli = Cli::parse_from(["vellum", "-vv", "a.gd", "b.gd"]);
        assert_eq!(cli.files.len(), 2);
        assert_eq!(cli.logging().default_level, log::LevelFilter::Trace);

        let cli = Cli::parse_from(["vellum", "-v", "--log", "vellum::interp=trace"]);
        assert_eq!(cli.logging().env_filter.as_deref(), Some("vellum::interp=trace"));
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
