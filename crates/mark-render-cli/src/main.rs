use anyhow::{Context, Result};
use mark_render_config::Config;
use mark_render_engine::{Escape, Renderer, Token};
use std::{
    env,
    io::{Write, stdout},
    path::PathBuf,
    process,
};

struct Args {
    source: PathBuf,
    tokens: PathBuf,
    config: Option<PathBuf>,
    no_escape: bool,
}

fn print_usage() {
    eprintln!("Usage: mark-render-cli <source-file> <tokens.json> [--config <path>] [--no-escape]");
    eprintln!();
    eprintln!("Renders a document to HTML from the token stream its tokenizer produced.");
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut config = None;
    let mut no_escape = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return None,
            "--config" => config = Some(PathBuf::from(args.next()?)),
            "--no-escape" => no_escape = true,
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [source, tokens]: [PathBuf; 2] = positional.try_into().ok()?;
    Some(Args {
        source,
        tokens,
        config,
        no_escape,
    })
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            Config::load_from_path(path)?
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_else(|| {
        log::debug!("No config file found, using defaults");
        Config::default()
    }))
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_ref())?;
    let mut options = config.render_options();
    if args.no_escape {
        options.escape = Escape::None;
    }

    let source = std::fs::read(&args.source)
        .with_context(|| format!("Failed to read source file {}", args.source.display()))?;
    let token_bytes = std::fs::read(&args.tokens)
        .with_context(|| format!("Failed to read token file {}", args.tokens.display()))?;
    let tokens: Vec<Token> = serde_json::from_slice(&token_bytes)
        .with_context(|| format!("Failed to parse token file {}", args.tokens.display()))?;

    log::info!(
        "Rendering {} ({} bytes, {} tokens)",
        args.source.display(),
        source.len(),
        tokens.len()
    );

    let html = Renderer::new(options)
        .render(&source, &tokens)
        .with_context(|| format!("Failed to render {}", args.source.display()))?;

    let mut out = stdout().lock();
    out.write_all(html.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn main() {
    // RUST_LOG overrides the default level.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let Some(args) = parse_args() else {
        print_usage();
        process::exit(2);
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
