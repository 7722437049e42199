use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keploy-demo", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the scripted record/test workflow to `keploy-demo.gif`.
    Demo,
    /// Convert an asciicast recording to a GIF (placeholder card; uses ImageMagick and gifsicle when available).
    Cast(CastArgs),
}

#[derive(Parser, Debug)]
struct CastArgs {
    /// Input recording.
    #[arg(default_value = "keploy-demo.cast")]
    cast_file: PathBuf,

    /// Output GIF path.
    #[arg(default_value = keploy_demo::DEFAULT_OUTPUT)]
    output_gif: PathBuf,
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Demo => cmd_demo(),
        Command::Cast(args) => cmd_cast(args),
    }
}

fn cmd_demo() -> anyhow::Result<ExitCode> {
    let out = Path::new(keploy_demo::DEFAULT_OUTPUT);
    if keploy_demo::create_demo_gif(keploy_demo::DEMO_SCRIPT, out)? {
        println!("✅ Demo GIF created: {}", out.display());
    } else {
        println!("❌ Demo GIF not created: no frames");
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_cast(args: CastArgs) -> anyhow::Result<ExitCode> {
    if !args.cast_file.exists() {
        println!("Error: {} not found", args.cast_file.display());
        return Ok(ExitCode::FAILURE);
    }

    let conv = keploy_demo::CastConversion::prepare(
        &args.cast_file,
        &args.output_gif,
        keploy_demo::CastToGifOpts::default(),
    )?;
    let (cols, rows) = conv.resolution();
    println!(
        "Converting {} to {}...",
        args.cast_file.display(),
        args.output_gif.display()
    );
    println!("Resolution: {cols}x{rows}, FPS: {}", conv.fps());

    println!("✅ Converting to GIF...");
    let strategy = conv.run()?;
    tracing::debug!(?strategy, "conversion finished");
    println!("✅ GIF created: {}", args.output_gif.display());
    Ok(ExitCode::SUCCESS)
}
