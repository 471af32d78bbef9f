//! Standalone TUI binary for the Mythforge character builder.

use std::process;

use clap::Parser;

use mf_core::ForgeConfig;
use mf_tui::app::ForgeApp;

#[derive(Parser)]
#[command(
    name = "mf-tui",
    about = "Terminal character-sheet builder for Mythforge",
    version
)]
struct Args {
    /// RNG seed for dice rolls
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Milliseconds of spin before each die reveal
    #[arg(long, default_value = "100")]
    spin_ms: u64,

    /// Milliseconds each revealed roll is held before the next one
    #[arg(long, default_value = "1000")]
    reveal_ms: u64,
}

fn main() {
    let args = Args::parse();

    let config = ForgeConfig::default()
        .with_seed(args.seed)
        .with_spin_ms(args.spin_ms)
        .with_reveal_ms(args.reveal_ms);

    let app = ForgeApp::new(config);

    if let Err(e) = mf_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
