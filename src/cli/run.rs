use std::io::{self, BufRead, Write};

use clap::Parser;
use dotenv::dotenv;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{
        command::{Cli, MenuChoice},
        console::Console,
    },
    domain::ContactUpdate,
    errors::AppError,
    store::ContactStore,
};

enum Flow {
    Continue,
    Quit,
}

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level)?;
    info!(sorted = cli.sorted, "starting phone book");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let mut store = ContactStore::new();

    run_menu(&mut store, &mut console, cli.sorted)?;

    info!(contacts = store.len(), "phone book closed");
    Ok(())
}

fn init_tracing(filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::Config(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Runs the menu until Exit is chosen or the input ends. Store rejections are
/// printed and the loop continues; only console failures are returned.
pub fn run_menu<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
    sorted_by_default: bool,
) -> Result<(), AppError> {
    loop {
        console.show_menu()?;

        let Some(action) = console.prompt("Choose an option: ")? else {
            debug!("input closed, leaving menu");
            return Ok(());
        };

        let choice = match action.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                console.say(e)?;
                continue;
            }
        };

        let flow = match choice {
            MenuChoice::Add => add_contact(store, console)?,
            MenuChoice::Edit => edit_contact(store, console)?,
            MenuChoice::Delete => delete_contact(store, console)?,
            MenuChoice::Search => search_contacts(store, console)?,
            MenuChoice::Display => display_contacts(store, console, sorted_by_default)?,
            MenuChoice::Exit => {
                console.say("Exiting PhoneBook. Goodbye!")?;
                Flow::Quit
            }
        };

        if let Flow::Quit = flow {
            return Ok(());
        }
    }
}

fn finish<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    result: Result<(), AppError>,
    success: &str,
) -> Result<Flow, AppError> {
    match result {
        Ok(()) => console.say(success)?,
        Err(e) if e.is_recoverable() => console.report(&e)?,
        Err(e) => return Err(e),
    }
    Ok(Flow::Continue)
}

fn add_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    let Some(name) = console.prompt("Enter name: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(phone) = console.prompt("Enter phone number: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(email) = console.prompt_optional("Enter email: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(address) = console.prompt_optional("Enter address: ")? else {
        return Ok(Flow::Quit);
    };

    let result = store.add(name, phone, email, address);
    finish(console, result, "Contact added successfully.")
}

fn edit_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    let Some(name) = console.prompt("Enter name of the contact to edit: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(phone) = console.prompt_optional("Enter new phone number (or press Enter to skip): ")?
    else {
        return Ok(Flow::Quit);
    };
    let Some(email) = console.prompt_optional("Enter new email (or press Enter to skip): ")? else {
        return Ok(Flow::Quit);
    };
    let Some(address) = console.prompt_optional("Enter new address (or press Enter to skip): ")?
    else {
        return Ok(Flow::Quit);
    };

    let update = ContactUpdate {
        phone,
        email,
        address,
    };
    let result = store.edit(&name, update);
    finish(console, result, "Contact updated successfully.")
}

fn delete_contact<R: BufRead, W: Write>(
    store: &mut ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    let Some(name) = console.prompt("Enter name of the contact to delete: ")? else {
        return Ok(Flow::Quit);
    };

    let result = store.delete(&name).map(|_| ());
    finish(console, result, "Contact deleted successfully.")
}

fn search_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    let Some(query) = console.prompt("Enter search query: ")? else {
        return Ok(Flow::Quit);
    };

    let found = store.search(&query);
    if found.is_empty() {
        console.say("No contacts found for the given query.")?;
    } else {
        console.display_contacts(found)?;
    }
    Ok(Flow::Continue)
}

fn display_contacts<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    sorted_by_default: bool,
) -> Result<Flow, AppError> {
    let Some(answer) = console.prompt("Display contacts in alphabetical order? (yes/no): ")? else {
        return Ok(Flow::Quit);
    };

    let sorted = if answer.is_empty() {
        sorted_by_default
    } else {
        answer.eq_ignore_ascii_case("yes")
    };

    if store.is_empty() {
        console.say("No contacts to display.")?;
    } else {
        console.display_contacts(store.list(sorted))?;
    }
    Ok(Flow::Continue)
}
