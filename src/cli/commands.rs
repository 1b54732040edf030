//! Subcommand handlers for wordle, grid, score and config actions.

use std::path::{Path, PathBuf};

use super::args::{ConfigAction, GridArgs, LayoutArgs, ScoreArgs, WordleArgs};
use crate::config::{default_path as get_config_path, Config, RenderConfig, DEFAULT_CONFIG};
use crate::render::{resolve_font, Grid, RenderOptions, Renderer};
use crate::wordle;

/// Board defaults used by the `wordle` command before config and flags apply.
const WORDLE_SQUARE_SIZE: u32 = 25;
const WORDLE_SQUARE_GAP: u32 = 3;
const WORDLE_PADDING: u32 = 3;

/// Load the config file.
///
/// If `--config` is given the file must exist and parse. Otherwise a broken
/// default config file is reported and built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    match explicit {
        Some(path) => Config::load_from_explicit(path).map_err(|e| e.to_string()),
        None => match Config::load(None) {
            Ok(c) => Ok(c),
            Err(e) => {
                log::warn!("Failed to load config file: {}", e);
                log::warn!("Using default settings.");
                Ok(Config::default())
            }
        },
    }
}

/// Merge settings: CLI args > config file > `base`.
fn apply_layout(
    layout: &LayoutArgs,
    cfg: &RenderConfig,
    base: RenderOptions,
) -> Result<RenderOptions, String> {
    let mut opts = cfg.apply(base).map_err(|e| e.to_string())?;

    if let Some(size) = layout.size {
        opts.square_size = size;
    }
    if let Some(gap) = layout.gap {
        opts.square_gap = gap;
    }
    if let Some(padding) = layout.padding {
        opts.padding = padding;
    }
    if let Some(ref output) = layout.output {
        opts.output = output.clone();
    }
    if let Some(format) = layout.format {
        opts.format = format.into();
    }
    if let Some(color) = layout.square_color {
        opts.square_color = color;
    }
    if let Some(color) = layout.text_color {
        opts.text_color = color;
    }
    if let Some(border) = layout.border_color {
        opts.border_color = border.0;
    }
    if let Some(width) = layout.border_width {
        opts.border_width = width;
    }
    if let Some(color) = layout.background {
        opts.background = color;
    }

    Ok(opts)
}

/// Effective render options for the `wordle` command.
pub fn wordle_options(layout: &LayoutArgs, cfg: &Config) -> Result<RenderOptions, String> {
    let palette = cfg.wordle.palette();
    let base = RenderOptions {
        square_size: WORDLE_SQUARE_SIZE,
        square_gap: WORDLE_SQUARE_GAP,
        padding: WORDLE_PADDING,
        output: default_output(),
        ..palette.board_options()
    };

    // [wordle] text color beats the generic [render] one
    let mut opts = cfg.render.apply(base).map_err(|e| e.to_string())?;
    if let Some(color) = cfg.wordle.text_color {
        opts.text_color = color;
    }
    apply_layout(layout, &RenderConfig::default(), opts)
}

/// Effective render options for the `grid` command.
pub fn grid_options(layout: &LayoutArgs, cfg: &Config) -> Result<RenderOptions, String> {
    let base = RenderOptions {
        output: default_output(),
        ..RenderOptions::default()
    };
    apply_layout(layout, &cfg.render, base)
}

fn default_output() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("output.png")
}

fn build_renderer(layout: &LayoutArgs, cfg: &Config) -> Result<Renderer, String> {
    let font = layout.font.as_deref().or(cfg.render.font.as_deref());
    let font = resolve_font(font).map_err(|e| e.to_string())?;
    Ok(Renderer::new(font))
}

/// Render a word-guessing board.
pub async fn run_wordle(args: WordleArgs, cfg: &Config) -> Result<(), String> {
    let opts = wordle_options(&args.layout, cfg)?;
    let renderer = build_renderer(&args.layout, cfg)?;
    let palette = cfg.wordle.palette();

    let path = wordle::render(&renderer, &args.word, args.guesses.as_slice(), &palette, &opts)
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", path.display());
    Ok(())
}

/// Render a grid of bare letters.
pub async fn run_grid(args: GridArgs, cfg: &Config) -> Result<(), String> {
    let grid = match args.file {
        Some(ref file) => {
            let content = std::fs::read_to_string(file)
                .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;
            Grid::from_rows(content.lines())
        }
        None => Grid::from_rows(&args.rows),
    };

    let opts = grid_options(&args.layout, cfg)?;
    let renderer = build_renderer(&args.layout, cfg)?;

    let path = renderer
        .render(&grid, &opts)
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", path.display());
    Ok(())
}

/// Print each guess's classification as a JSON array.
pub fn run_score(args: &ScoreArgs) -> Result<(), String> {
    let scores = wordle::score(&args.word, args.guesses.as_slice()).map_err(|e| e.to_string())?;
    for states in scores {
        let line = serde_json::to_string(&states).map_err(|e| e.to_string())?;
        println!("{}", line);
    }
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<(), String> {
    let config_path = explicit.map(PathBuf::from).unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let cfg = if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
                Config::load_from_explicit(&config_path).map_err(|e| e.to_string())?
            } else {
                println!("Config file: {} (not found)", config_path.display());
                Config::default()
            };

            let grid = grid_options(&LayoutArgs::default(), &cfg)?;
            let board = wordle_options(&LayoutArgs::default(), &cfg)?;
            println!();
            println!("Grid defaults:");
            print_options(&grid);
            println!();
            println!("Wordle defaults:");
            print_options(&board);
            let palette = cfg.wordle.palette();
            println!(
                "  Palette: correct {}, almost {}, wrong {}",
                palette.correct, palette.almost, palette.wrong
            );
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(format!(
                    "Config file already exists: {}\nUse 'letters-in-squares config show' to view current settings.",
                    config_path.display()
                ));
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Error creating config directory: {}", e))?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG)
                .map_err(|e| format!("Error writing config file: {}", e))?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

fn print_options(opts: &RenderOptions) {
    println!(
        "  Square: {}px, gap {}px, padding {}px",
        opts.square_size, opts.square_gap, opts.padding
    );
    println!(
        "  Colors: square {}, text {}, background {}",
        opts.square_color, opts.text_color, opts.background
    );
    match opts.border_color {
        Some(color) => println!("  Border: {} {}px", color, opts.border_width),
        None => println!("  Border: none"),
    }
    println!("  Output: {} ({})", opts.output.display(), opts.format);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{BorderColor, Format};
    use crate::color::Color;
    use crate::render::OutputFormat;
    use tempfile::tempdir;

    #[test]
    fn test_wordle_defaults() {
        let opts = wordle_options(&LayoutArgs::default(), &Config::default()).unwrap();
        assert_eq!(opts.square_size, 25);
        assert_eq!(opts.square_gap, 3);
        assert_eq!(opts.padding, 3);
        assert_eq!(opts.border_color, None);
        assert_eq!(opts.text_color, Color::WHITE);
        assert_eq!(opts.format, OutputFormat::Png);
        assert!(opts.output.ends_with("output.png"));
    }

    #[test]
    fn test_grid_defaults_match_library() {
        let opts = grid_options(&LayoutArgs::default(), &Config::default()).unwrap();
        let lib = RenderOptions::default();
        assert_eq!(opts.square_size, lib.square_size);
        assert_eq!(opts.border_color, lib.border_color);
        assert_eq!(opts.text_color, lib.text_color);
    }

    #[test]
    fn test_cli_beats_config_beats_default() {
        let cfg: Config = toml::from_str(
            r#"
[render]
size = 40
gap = 7
"#,
        )
        .unwrap();
        let layout = LayoutArgs {
            size: Some(60),
            format: Some(Format::Webp),
            border_color: Some(BorderColor(Some(Color::BLACK))),
            ..LayoutArgs::default()
        };
        let opts = wordle_options(&layout, &cfg).unwrap();
        assert_eq!(opts.square_size, 60); // CLI
        assert_eq!(opts.square_gap, 7); // config
        assert_eq!(opts.padding, 3); // default
        assert_eq!(opts.format, OutputFormat::Webp);
        assert_eq!(opts.border_color, Some(Color::BLACK));
    }

    #[test]
    fn test_wordle_text_color_beats_render_text_color() {
        let cfg: Config = toml::from_str(
            r#"
[render]
text_color = "red"

[wordle]
text_color = "black"
"#,
        )
        .unwrap();
        let board = wordle_options(&LayoutArgs::default(), &cfg).unwrap();
        assert_eq!(board.text_color, Color::BLACK);
        let grid = grid_options(&LayoutArgs::default(), &cfg).unwrap();
        assert_eq!(grid.text_color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_config_init_then_show() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        // second init refuses to overwrite
        assert!(handle_config_action(ConfigAction::Init, Some(&path)).is_err());
        handle_config_action(ConfigAction::Show, Some(&path)).unwrap();
    }

    #[test]
    fn test_score_rejects_length_mismatch() {
        let args = ScoreArgs {
            word: "crane".to_string(),
            guesses: vec!["cranes".to_string()],
        };
        assert!(run_score(&args).is_err());
    }

    #[tokio::test]
    async fn test_run_grid_writes_png() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("grid.png");
        let args = GridArgs {
            rows: vec!["a b".to_string(), "c".to_string()],
            file: None,
            layout: LayoutArgs {
                output: Some(output.clone()),
                font: None,
                ..LayoutArgs::default()
            },
        };
        run_grid(args, &Config::default()).await.unwrap();
        let img = image::open(&output).unwrap();
        // 3 columns, 2 rows with library defaults
        assert_eq!((img.width(), img.height()), (8 + 150 + 10, 8 + 100 + 5));
    }
}
