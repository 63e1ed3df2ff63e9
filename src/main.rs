use clap::{Parser, Subcommand};
use quotewall::{config, output, quotes, render};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "quotewall")]
#[command(about = "Render a motivational quote onto a dark gradient wallpaper")]
#[command(long_about = "\
Render a motivational quote onto a dark gradient wallpaper

One shot per invocation: a quote is picked uniformly at random from a JSON
collection, composed over a freshly generated dark vertical gradient, and
written as a PNG.

Quote collection format:

  [
    { \"quote\": \"Stay hungry || stay foolish\", \"author\": \"Jobs\" },
    { \"quote\": \"Less, but better\" }
  ]

\"quote\" is required; \"author\" is optional and drawn as \"~ Author\" below
the quote. A literal || inside the quote text forces a line break at that
point; everything else wraps automatically to the canvas width.

A missing font file is not fatal: rendering falls back to a built-in bitmap
font with a warning. A missing or empty quote collection is fatal.

Run 'quotewall gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (optional; stock defaults apply without one)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Quote collection path — overrides the config value
    #[arg(long, global = true)]
    quotes: Option<PathBuf>,

    /// Output image path — overrides the config value
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a wallpaper from a random quote
    Render,
    /// Validate config and quote collection without rendering
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render => {
            let cfg = resolve_config(&cli)?;
            let report = render::render(&cfg)?;
            output::print_render_output(&report);
        }
        Command::Check => {
            let cfg = resolve_config(&cli)?;
            println!("==> Checking {}", cfg.quotes.display());
            let collection = quotes::load_quotes(&cfg.quotes)?;
            output::print_check_output(&collection, &cfg.quotes);
            println!("==> Quote collection is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load config (file or stock defaults) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<config::WallConfig, config::ConfigError> {
    let mut cfg = config::load(cli.config.as_deref())?;
    if let Some(quotes) = &cli.quotes {
        cfg.quotes = quotes.clone();
    }
    if let Some(output) = &cli.output {
        cfg.output = output.clone();
    }
    Ok(cfg)
}
