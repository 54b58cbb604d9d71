use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use snake_diorama::app::{App, AppOptions};
use snake_diorama::cli::Cli;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new()?;
    let mut app = App::new(AppOptions {
        width: cli.width,
        height: cli.height,
        bloom: !cli.no_bloom,
    });

    event_loop.run_app(&mut app)?;

    Ok(())
}
