use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "In-memory Phone Book")]
pub struct Cli {
    /// Log filter written to stderr (error, warn, info, debug, trace)
    #[arg(long, env = "PHONEBOOK_LOG", default_value_t = String::from("error"))]
    pub log_level: String,

    /// Sort the contact display by name when the yes/no answer is left empty
    #[arg(long, env = "PHONEBOOK_SORTED")]
    pub sorted: bool,
}

/// Numbered entries of the main menu
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    Search,
    Display,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Display,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::Edit => 2,
            MenuChoice::Delete => 3,
            MenuChoice::Search => 4,
            MenuChoice::Display => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Contact",
            MenuChoice::Edit => "Edit Contact",
            MenuChoice::Delete => "Delete Contact",
            MenuChoice::Search => "Search Contacts",
            MenuChoice::Display => "Display Contacts",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MenuChoice::ALL
            .into_iter()
            .find(|choice| s.parse::<u8>().is_ok_and(|n| n == choice.number()))
            .ok_or_else(|| AppError::ParseCommand(s.to_string()))
    }
}
