use clap::Parser;
use festa::FestaError;
use festa::celebration::{CelebrationConfig, OUTPUT_FILE, create_celebration};
use std::env;
use std::path::PathBuf;

/// Renders the looping confetti celebration GIF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for a reproducible confetti layout.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the GIF.
    #[arg(long, default_value = OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<(), FestaError> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "festa=info"); }
    }
    env_logger::init();

    let args = Args::parse();
    let config = CelebrationConfig {
        seed: args.seed,
        ..CelebrationConfig::default()
    };

    let frames = create_celebration(&config, &args.output)?;
    println!("Created {} ({} frames)", args.output.display(), frames);
    Ok(())
}
