use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "scenery", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a seeded lightning bolt and print it as JSON.
    Lightning(LightningArgs),
    /// Parse an SVG file, optionally bake a perspective tilt, and print the paths as JSON.
    Svg(SvgArgs),
    /// Print the glow colour for a brightness value.
    Glow(GlowArgs),
    /// Blend two `#RRGGBB` colours.
    Blend(BlendArgs),
}

#[derive(Parser, Debug)]
struct LightningArgs {
    /// Branch config JSON. Defaults are used for missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the seed from the config.
    #[arg(long)]
    seed: Option<f64>,

    /// Also grow side branches.
    #[arg(long, default_value_t = false)]
    branches: bool,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input SVG file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Perspective tilt; `0` leaves coordinates untouched.
    #[arg(long, default_value_t = 0.0)]
    tilt: f64,

    /// Pivot row as a fraction of the viewBox height.
    #[arg(long, default_value_t = 0.5)]
    pivot: f64,
}

#[derive(Parser, Debug)]
struct GlowArgs {
    /// Brightness in `[0, 1]`.
    #[arg(long)]
    brightness: f64,

    /// Base hue in degrees for the HSL variant.
    #[arg(long, default_value_t = 30.0)]
    hue: f64,
}

#[derive(Parser, Debug)]
struct BlendArgs {
    /// Start colour.
    #[arg(long)]
    from: String,

    /// End colour.
    #[arg(long)]
    to: String,

    /// Blend factor in `[0, 1]`.
    #[arg(long, default_value_t = 0.5)]
    t: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Lightning(args) => cmd_lightning(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Glow(args) => cmd_glow(args),
        Command::Blend(args) => cmd_blend(args),
    }
}

fn read_branch_config(path: &Path) -> anyhow::Result<scenery::LightningBranchConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    let r = BufReader::new(f);
    let cfg = serde_json::from_reader(r).with_context(|| "parse lightning config JSON")?;
    Ok(cfg)
}

fn cmd_lightning(args: LightningArgs) -> anyhow::Result<()> {
    let mut cfg = match &args.config {
        Some(path) => read_branch_config(path)?,
        None => scenery::LightningBranchConfig::default(),
    };
    if let Some(seed) = args.seed {
        cfg.bolt.seed = seed;
    }

    if args.branches {
        print_json(&scenery::generate_lightning_with_branches(&cfg))
    } else {
        print_json(&scenery::generate_lightning_path(&cfg.bolt))
    }
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    let mut doc = scenery::read_svg_file(&args.in_path)
        .with_context(|| format!("load svg '{}'", args.in_path.display()))?;

    if args.tilt != 0.0 {
        let t = scenery::PerspectiveTransform {
            config: Some(scenery::PerspectiveConfig {
                tilt: args.tilt,
                pivot: args.pivot,
                reference: doc.dimensions,
                factors: None,
            }),
            ..scenery::PerspectiveTransform::default()
        };
        doc.paths = doc
            .paths
            .into_iter()
            .map(|p| {
                let mut out = scenery::ParsedPath::from_commands(t.apply_commands(&p.commands));
                out.stroke = p.stroke;
                out.stroke_width = p.stroke_width;
                out
            })
            .collect();
    }

    eprintln!("parsed {} path(s)", doc.paths.len());
    print_json(&doc)
}

#[derive(Serialize)]
struct GlowReport {
    brightness: f64,
    glow: scenery::GlowColor,
    hex: String,
    hsl: String,
}

fn cmd_glow(args: GlowArgs) -> anyhow::Result<()> {
    let glow = scenery::brightness_to_color(args.brightness);
    print_json(&GlowReport {
        brightness: args.brightness,
        glow,
        hex: glow.color.to_hex(),
        hsl: scenery::brightness_to_hsl(args.brightness, args.hue).to_css(),
    })
}

fn cmd_blend(args: BlendArgs) -> anyhow::Result<()> {
    let hex = scenery::interpolate_color(&args.from, &args.to, args.t)
        .with_context(|| format!("blend '{}' -> '{}'", args.from, args.to))?;
    println!("{hex}");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value).with_context(|| "write JSON to stdout")?;
    writeln!(out)?;
    Ok(())
}
