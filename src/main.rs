use anyhow::{Context, Result};
use clap::Parser;
use playlist_manager::cli::{run_command, Args};
use playlist_manager::menu::Menu;
use playlist_manager::PlaylistStore;
use std::io;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut store = PlaylistStore::open(args.store_config())
        .with_context(|| format!("Failed to load playlists from {:?}", args.file))?;

    let stdout = io::stdout();
    match args.command {
        Some(command) => run_command(&mut store, command, &mut stdout.lock())?,
        None => {
            let mut menu = Menu::new(io::stdin().lock(), stdout.lock());
            menu.run(&mut store)?;
        }
    }

    Ok(())
}
