//! Binary entry point: bring up the SQLite file, then hand stdin/stdout to the
//! menu loop until the operator exits.
use std::io;

use store_inventory::console::surface_error;
use store_inventory::logging::init_logging;
use store_inventory::{ensure_schema, Catalog, Config, Console, Msg, Prompter, Store};

/// Schema problems are printed and the loop starts anyway; every command will
/// then report its own storage error.
fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::default();
    let catalog = Catalog::new(config.language);
    let store = Store::new(&config);

    if let Err(err) = ensure_schema(&store) {
        log::error!("schema initialization failed: {err:#}");
        println!("{}", catalog.format(Msg::SchemaFailed, surface_error(&err)));
    }

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock(), catalog);
    let mut console = Console::new(store, prompter);
    console.run()?;
    Ok(())
}
