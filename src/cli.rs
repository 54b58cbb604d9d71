// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "snake-diorama")]
#[command(about = "Animated 3D snake diorama", long_about = None)]
pub struct Cli {
    /// Disable the bloom post-processing chain
    #[arg(long = "no-bloom", default_value = "false")]
    pub no_bloom: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = crate::app::INITIAL_WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = crate::app::INITIAL_WINDOW_HEIGHT)]
    pub height: u32,
}
