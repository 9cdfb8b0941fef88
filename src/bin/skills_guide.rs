use festa::FestaError;
use festa::guide::{OUTPUT_FILE, create_guide};
use std::env;
use std::path::Path;

fn main() -> Result<(), FestaError> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "festa=info"); }
    }
    env_logger::init();

    create_guide(Path::new(OUTPUT_FILE))?;
    println!("PDF generated successfully: {}", OUTPUT_FILE);
    Ok(())
}
