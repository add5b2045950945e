use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use cake_factory::cli::Cli;
use cake_factory::config::GameConfig;
use cake_factory::ui::App;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = GameConfig::from_cli(&cli)?;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);

    println!("Cake Factory - Controls: 1-4 choose, Space next station, R restart, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
