use std::io;
use std::process;

use clap::{Parser, Subcommand};

use watermark_overlay::raster::Raster;
use watermark_overlay::session;

#[derive(Parser)]
#[command(
    name = "watermark-overlay",
    about = "Overlay a watermark image onto a base image with weighted blending",
    version,
    after_help = "Run without a subcommand for the interactive session: it prompts for the\n\
                  base image, the watermark, transparency handling, the blend percentage,\n\
                  placement (single offset or tiled grid) and the output filename."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print decoded image metadata without blending anything
    Info {
        /// Image file to inspect
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Info { file }) => info(&file),
        None => blend(),
    };

    if let Err(e) = result {
        println!("{e}");
        process::exit(e.exit_code());
    }
}

fn info(file: &str) -> watermark_overlay::Result<()> {
    let image = Raster::open(file)?;
    println!("{}", image.describe(file));
    Ok(())
}

fn blend() -> watermark_overlay::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run_session(&mut stdin.lock(), &mut stdout.lock())
}
