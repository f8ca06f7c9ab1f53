// Entrypoint for the calculator.
// - Keeps `main` small: read settings, set up logging, hand the console
//   streams to the menu loop.
// - Returns `anyhow::Result` so a failed session exits with status 1.

use anyhow::Context;
use console_calc::{config::Settings, logging, ui::main_menu};
use std::io;

fn main() -> anyhow::Result<()> {
    let settings = Settings::from_args();
    logging::init(settings.log_level);
    log::debug!("starting with {:?}", settings);

    // Blocks until the user picks 0 or input ends.
    main_menu(io::stdin().lock(), io::stdout(), &settings).context("calculator session failed")?;
    Ok(())
}
