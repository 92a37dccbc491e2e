use anyhow::{Context, Result};
use billstack::sprite::{self, SpriteOrigin};
use billstack::{ChartConfig, JitterSource, Layout, Profile, SeededJitter, parse_numbers, storage};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "billstack",
    version,
    about = "Draw stacked-banknote bar charts (one pile of bills per number)"
)]
struct Cli {
    /// Bill counts, one pile each (e.g. 10 50 20). Prompts on stdin when omitted.
    numbers: Vec<u32>,
    /// Output image path (format from extension, PNG by default).
    #[arg(short, long, default_value = storage::DEFAULT_OUTPUT)]
    out: PathBuf,
    /// Directory searched for the bill sprite (`bill.*`, any case).
    #[arg(long, default_value = ".")]
    sprite_dir: PathBuf,
    /// Style preset: classic, flat or bold.
    #[arg(short, long, default_value = "classic")]
    profile: Profile,
    /// JSON configuration file (takes precedence over --profile).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Disable the depth shadow.
    #[arg(long, default_value_t = false)]
    no_shadow: bool,
    /// Override the jitter bound (pixels).
    #[arg(long)]
    jitter: Option<u32>,
    /// Seed for the jitter RNG, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Print the computed layout as JSON to stdout.
    #[arg(long, default_value_t = false)]
    print_layout: bool,
}

fn read_numbers_from_stdin() -> Result<Vec<u32>> {
    eprint!("Enter numbers (e.g. 10 50 20): ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read numbers from stdin")?;
    parse_numbers(&line).context("only whole numbers >= 0 are accepted")
}

fn load_config(cli: &Cli) -> Result<ChartConfig> {
    let mut cfg = match &cli.config {
        Some(path) => ChartConfig::from_json_file(path)?,
        None => cli.profile.config(),
    };
    if cli.no_shadow {
        cfg.shadow.enabled = false;
    }
    if let Some(j) = cli.jitter {
        cfg.jitter = j;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;

    let numbers = if cli.numbers.is_empty() {
        read_numbers_from_stdin()?
    } else {
        cli.numbers.clone()
    };

    if cli.print_layout {
        let layout = Layout::compute(&numbers, &cfg)?;
        println!("{}", serde_json::to_string_pretty(&layout)?);
    }

    let (sprite, origin) = sprite::acquire_sprite(
        &cli.sprite_dir,
        &cfg.sprite_name,
        cfg.sprite_width,
        cfg.sprite_height,
    );
    match &origin {
        SpriteOrigin::File(path) => eprintln!("Using bill sprite {}", path.display()),
        SpriteOrigin::Placeholder => eprintln!(
            "No usable '{}.*' in {}; using the drawn placeholder bill",
            cfg.sprite_name,
            cli.sprite_dir.display()
        ),
    }

    let mut jitter: Box<dyn JitterSource> = match cli.seed {
        Some(seed) => Box::new(SeededJitter::from_seed(seed)),
        None => Box::new(SeededJitter::from_entropy()),
    };
    let canvas = billstack::render(&numbers, &sprite, &cfg, jitter.as_mut())?;

    storage::save_image(&canvas, &cli.out)?;
    eprintln!(
        "Wrote {}x{} chart to {}",
        canvas.width(),
        canvas.height(),
        cli.out.display()
    );
    Ok(())
}
