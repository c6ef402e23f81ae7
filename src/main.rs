//! Generate the "Museo Digital de las Danzas Peruanas" presentation.
//!
//! ```bash
//! museo-danzas
//! museo-danzas --output museo.pptx --content danzas.yaml --verify
//! RUST_LOG=debug museo-danzas
//! ```

use clap::Parser;
use museo_danzas::museum::{GeneratorConfig, check_navigation, config::DEFAULT_OUTPUT, generate};
use museo_danzas::ooxml::pptx::PresentationOutline;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "museo-danzas",
    about = "Generate the interactive Peruvian dance museum presentation",
    version
)]
struct Args {
    /// Output .pptx file (overwritten if it exists)
    #[arg(short, long, value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// YAML file with the dances to use instead of the built-in ones
    #[arg(short, long, value_name = "YAML")]
    content: Option<PathBuf>,

    /// Read the written file back and check its navigation links
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = GeneratorConfig::new().with_output(&args.output);
    if let Some(ref content) = args.content {
        config = config.with_content_file(content)?;
    }

    let deck = generate(&config)?;

    if args.verify {
        let outline = PresentationOutline::open(&config.output)?;
        check_navigation(&outline, &config.catalog)?;
        println!("Navigation check passed ({} slides)", outline.slide_count());
    }

    println!(
        "Presentación generada: {} ({} diapositivas)",
        config.output.display(),
        deck.slide_count()
    );
    Ok(())
}
