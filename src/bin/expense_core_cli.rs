use std::{env, process};

use expense_core::{
    cli::{commands, output},
    init,
    storage::JsonStorage,
    store::TransactionStore,
};

fn main() {
    init();

    if let Err(err) = run() {
        output::error(err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    let storage = JsonStorage::new_default()?;
    let mut store = TransactionStore::open(Box::new(storage));

    match command.as_str() {
        "add" => commands::add(&mut store)?,
        "list" => commands::list(&store),
        "remove" => {
            let id = args
                .next()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_else(|| {
                    print_usage();
                    process::exit(1);
                });
            commands::remove(&mut store, id)?;
        }
        "summary" => commands::summary(&store),
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: expense_core_cli <command>\n\
         Commands:\n  \
         add\n  \
         list\n  \
         remove <id>\n  \
         summary"
    );
}
