#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_lossless)]

mod canvas;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use flexi_logger::Logger;
use terminal_font::{charset::encode_single_byte, FontConfig, FontService, MaxFontSize};

use crate::canvas::Canvas;

#[derive(Parser, Debug)]
#[command(version, about = "Renders text with the built-in terminal fonts", long_about = None)]
pub struct Args {
    /// Text to render
    #[arg(default_value = "Hello World")]
    text: String,

    /// Font configuration (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of built-in tiers to load (0-4)
    #[arg(long, value_name = "TIERS")]
    max_font_size: Option<u8>,

    /// Font index to select
    #[arg(long, short)]
    font: Option<usize>,

    /// Pixels between two characters
    #[arg(long)]
    spacing_x: Option<u8>,

    /// Pixels between two lines
    #[arg(long)]
    spacing_y: Option<u8>,

    /// Leave the background of the glyphs untouched
    #[arg(long, default_value_t = false)]
    transparent: bool,

    /// Also report how many characters fit into this many pixels
    #[arg(long, value_name = "PIXELS")]
    fit: Option<u16>,

    /// List the registered fonts and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn load_config(args: &Args) -> anyhow::Result<FontConfig> {
    let mut config = match &args.config {
        Some(path) => FontConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => FontConfig::default(),
    };
    if let Some(size) = args.max_font_size {
        config.max_font_size = MaxFontSize::new(size)?;
    }
    if let Some(spacing) = args.spacing_x {
        config.spacing_x = spacing;
    }
    if let Some(spacing) = args.spacing_y {
        config.spacing_y = spacing;
    }
    if args.transparent {
        config.solid = false;
    }
    if let Some(font) = args.font {
        config.default_font = font;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = match Logger::try_with_env_or_str("info").and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to initialize logger: {err}");
            None
        }
    };

    let config = load_config(&args)?;
    let mut service: FontService = FontService::from_config(&config);

    if args.list {
        for (index, font) in service.registry().iter().enumerate() {
            println!(
                "{index}: {} {}x{} kind {:#04x}",
                font.name(),
                font.max_width(),
                font.height(),
                font.kind().bits()
            );
        }
        return Ok(());
    }

    if service.font_count() == 0 {
        anyhow::bail!("no fonts available, raise --max-font-size");
    }
    if let Some(font) = args.font {
        service.select_font(font)?;
    }

    let text = encode_single_byte(&args.text);
    let mut canvas = Canvas::new(service.string_width(&text) as usize, service.character_height() as usize);
    log::info!("rendering {} characters into {}x{} pixels", text.len(), canvas.width(), canvas.height());
    canvas.draw_text(&service, 0, 0, &text);
    print!("{canvas}");

    if let Some(pixels) = args.fit {
        println!("{} characters fit into {pixels} pixels", service.fit_length(&text, pixels));
    }
    Ok(())
}
