mod cli;
mod render;

#[cfg(test)]
mod cli_test;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use system_manager::{ManagerSettings, SystemManager, logging};

use crate::cli::{Cli, Cmd};

fn main() -> Result<()> {
    let args = Cli::parse();

    let mut settings = match &args.config {
        Some(path) => ManagerSettings::load_from(path),
        None => ManagerSettings::load(),
    }
    .context("loading settings")?;
    if let Some(database) = &args.database {
        settings.database_path = database.clone();
    }

    logging::init(&settings.log_filter);
    debug!(?settings, "starting");

    let mut manager = SystemManager::open(&settings).with_context(|| {
        format!("opening database {}", settings.database_path.display())
    })?;
    run(&mut manager, args.cmd)
}

fn run(manager: &mut SystemManager, cmd: Cmd) -> Result<()> {
    match cmd {
        Cmd::List => print!("{}", render::system_list(manager)),
        Cmd::Show { index } => {
            if let Some(index) = index {
                manager.switch_to(index)?;
            }
            println!("{}", render::system_details(manager.current()));
        }
        Cmd::Generate { min, max } => {
            let (min, max) = cli::planet_range(min, max, manager.planet_range());
            let index = manager.generate_random_system_with(min, max)?;
            println!("Created system #{index}");
            println!("{}", render::system_details(manager.current()));
        }
        Cmd::Import { file } => {
            let imported = manager
                .import_csv(&file)
                .with_context(|| format!("importing {}", file.display()))?;
            println!(
                "Imported '{}' as system #{}",
                manager.current().name,
                imported.index
            );
            for row in &imported.skipped {
                println!("  skipped line {}: {}", row.line, row.reason);
            }
        }
        Cmd::Export { file, index } => {
            let index = index.unwrap_or(manager.current_index());
            manager
                .export_system_csv(index, &file)
                .with_context(|| format!("exporting to {}", file.display()))?;
            println!("Exported system #{index} to {}", file.display());
        }
        Cmd::ClearList => {
            manager.clear_to_default();
            println!("System list reset to '{}'", manager.current().name);
        }
        Cmd::ClearStore => {
            manager.clear_store()?;
            println!("Database cleared");
        }
        Cmd::Reload => match manager.reload_from_store() {
            0 => println!("Database is empty, nothing loaded"),
            count => println!("Loaded {count} systems"),
        },
        Cmd::SetImage {
            planet,
            path,
            system,
        } => {
            if let Some(system) = system {
                manager.switch_to(system)?;
            }
            manager.set_planet_image(planet, path)?;
            println!("{}", render::planet_card(manager.current(), planet));
        }
        Cmd::Dump => print!("{}", render::snapshot(&manager.store_snapshot()?)),
    }
    Ok(())
}
