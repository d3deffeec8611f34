mod app;

use anyhow::Context as _;
use clap::Parser;
use klok::{Prefs, Theme, ThemeOptions, theme_dir};

/// Themeable analog SVG desktop clock.
#[derive(Parser, Debug)]
#[command(name = "klok", version)]
struct Cli {
    /// Width of the window.
    #[arg(short = 'w', long)]
    width: Option<u32>,

    /// Height of the window.
    #[arg(long)]
    height: Option<u32>,

    /// Theme name.
    #[arg(short = 't', long)]
    theme: Option<String>,

    /// Search the per-user themes directory instead of the system one.
    #[arg(short = 'u', long)]
    user_themes: bool,

    /// Refresh rate (Hz).
    #[arg(short = 'z', long)]
    hz: Option<u32>,

    /// Don't show the second hand.
    #[arg(short = 'n', long)]
    no_seconds: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    // Command-line flags override stored preferences for this run only; the
    // shutdown save captures whatever the window ends up with.
    let mut prefs = Prefs::load().context("load preferences")?;
    if let Some(width) = cli.width {
        prefs.width = width.max(1);
    }
    if let Some(height) = cli.height {
        prefs.height = height.max(1);
    }
    if let Some(theme) = cli.theme {
        prefs.theme = theme;
    }
    if let Some(hz) = cli.hz {
        prefs.hz = hz.max(1);
    }

    // A theme that cannot be loaded is fatal before any window is shown.
    let dir = theme_dir(&prefs.theme, cli.user_themes)?;
    let options = ThemeOptions {
        show_seconds: !cli.no_seconds,
    };
    let theme = Theme::load(&dir, &prefs.theme, options)
        .with_context(|| format!("load theme '{}' from '{}'", prefs.theme, dir.display()))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("klok")
            .with_inner_size([prefs.width as f32, prefs.height as f32])
            .with_decorations(false)
            .with_transparent(true),
        ..Default::default()
    };
    eframe::run_native(
        "klok",
        native_options,
        Box::new(move |_cc| Box::new(app::ClockApp::new(theme, prefs))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
