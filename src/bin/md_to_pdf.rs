use clap::Parser;
use festa::FestaError;
use festa::markdown::{INPUT_FILE, OUTPUT_FILE, convert_file};
use std::env;
use std::path::PathBuf;

/// Converts a lightweight markup file into an A4 PDF.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(default_value = INPUT_FILE)]
    input: PathBuf,

    #[arg(default_value = OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> Result<(), FestaError> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "festa=info"); }
    }
    env_logger::init();

    let args = Args::parse();
    convert_file(&args.input, &args.output)?;
    println!("PDF generated: {}", args.output.display());
    Ok(())
}
