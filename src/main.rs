use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use colorpick::clipboard::{self, WaylandClipboard};
use colorpick::color::parse::parse_external;
use colorpick::color::{ColorFormat, ExternalColor, display_or};
use colorpick::{Config, PickerState, util};
use std::time::Instant;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("COLORPICK_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "colorpick")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Color format conversion and shade utility"
)]
struct Cli {
    /// Color to convert: #RRGGBB, rgb(r, g, b), a palette name, or r,g,b[,a] floats
    #[arg(value_name = "COLOR")]
    color: Option<String>,

    /// Print only this format
    #[arg(long, short = 'f', value_enum, value_name = "FORMAT")]
    format: Option<ColorFormat>,

    /// Lighten the color first; pass an amount as --lighter=AMOUNT (default from config)
    #[arg(
        long,
        value_name = "AMOUNT",
        num_args = 0..=1,
        require_equals = true,
        conflicts_with_all = ["darker", "adjust"]
    )]
    lighter: Option<Option<f64>>,

    /// Darken the color first; pass an amount as --darker=AMOUNT (default from config)
    #[arg(
        long,
        value_name = "AMOUNT",
        num_args = 0..=1,
        require_equals = true,
        conflicts_with = "adjust"
    )]
    darker: Option<Option<f64>>,

    /// Add AMOUNT (may be negative) to every channel first
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    adjust: Option<f64>,

    /// Print the shade strip as hex codes, darkest first
    #[arg(long, action = ArgAction::SetTrue)]
    shades: bool,

    /// Copy the color in FORMAT to the clipboard
    #[arg(long, value_enum, value_name = "FORMAT")]
    copy: Option<ColorFormat>,

    /// Write a commented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

impl Cli {
    /// Applies the requested --lighter/--darker/--adjust, if any.
    fn apply_adjustment(&self, external: ExternalColor, default_amount: f64) -> ExternalColor {
        if let Some(amount) = self.lighter {
            let amount = amount.unwrap_or(default_amount);
            log::debug!("Lightening by {:.3}", amount);
            return external.lighter(amount);
        }
        if let Some(amount) = self.darker {
            let amount = amount.unwrap_or(default_amount);
            log::debug!("Darkening by {:.3}", amount);
            return external.darker(amount);
        }
        match self.adjust {
            Some(amount) => {
                log::debug!("Adjusting by {:+.3}", amount);
                external.adjust(amount)
            }
            None => external,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config ({:#}); using defaults", err);
        Config::default()
    });

    let external = match &cli.color {
        Some(text) => {
            parse_external(text).with_context(|| format!("Invalid color '{}'", text))?
        }
        None => ExternalColor::from(config.picker.default_color.to_color()),
    };
    let external = cli.apply_adjustment(external, config.adjust.amount);

    let Some(color) = external.resolve() else {
        log::warn!("Color has no usable channel data");
        print_placeholders(&external, cli.format, &config.picker.placeholder);
        if cli.copy.is_some() {
            anyhow::bail!("Nothing to copy: color has no channel data");
        }
        return Ok(());
    };

    let mut picker = PickerState::new(
        config.picker.default_color.to_color(),
        config.new_history(),
    );
    picker.notice_duration = config.notice_duration();
    picker.select(color);
    log::info!(
        "Selected {} ({}), {} color(s) in history",
        util::color_to_name(&picker.selected),
        picker.selected.to_hex(),
        picker.history.len()
    );

    match cli.format {
        Some(format) => println!("{}", format.render(&picker.selected)),
        None => {
            for (format, value) in picker.format_rows() {
                println!("{:<5}{}", format.label(), value);
            }
        }
    }

    if cli.shades {
        for shade in picker.shades(config.shades.steps, config.shades.step) {
            println!("{}", shade.to_hex());
        }
    }

    if let Some(format) = cli.copy {
        if !clipboard::is_clipboard_available() {
            log::debug!("wl-copy not found; relying on wl-clipboard-rs");
        }
        let mut sink = WaylandClipboard;
        let notice = picker
            .copy(format, &mut sink, Instant::now())
            .context("Failed to copy to clipboard")?;
        println!("{}", notice.message());
    }

    Ok(())
}

/// Prints the requested rows with the placeholder standing in for every value.
fn print_placeholders(external: &ExternalColor, format: Option<ColorFormat>, placeholder: &str) {
    match format {
        Some(format) => println!("{}", display_or(external.render(format), placeholder)),
        None => {
            for format in ColorFormat::ALL {
                let value = display_or(external.render(format), placeholder);
                println!("{:<5}{}", format.label(), value);
            }
        }
    }
}
