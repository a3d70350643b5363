use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::cli::command::MenuChoice;
use crate::domain::Contact;
use crate::errors::AppError;

pub const SEPARATOR: &str = "------------------------";

/// Line-oriented prompts over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn show_menu(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\n--- PhoneBook Menu ---")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    /// Prints `message` without a newline and reads one line, minus its line
    /// terminator. Surrounding spaces are kept. Returns `None` once the input
    /// is exhausted.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like `prompt`, but an empty answer becomes `None` inside the `Some`.
    pub fn prompt_optional(&mut self, message: &str) -> Result<Option<Option<String>>, AppError> {
        Ok(self
            .prompt(message)?
            .map(|answer| Some(answer).filter(|a| !a.is_empty())))
    }

    pub fn say(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    pub fn report(&mut self, err: &AppError) -> Result<(), AppError> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    pub fn display_contacts<'a, I>(&mut self, contacts: I) -> Result<(), AppError>
    where
        I: IntoIterator<Item = &'a Contact>,
    {
        for contact in contacts {
            writeln!(self.output, "{}", contact)?;
            writeln!(self.output, "{}", SEPARATOR)?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn prompt_strips_only_line_terminators() -> Result<(), AppError> {
        let mut console = console("  Alice \r\n\n");

        assert_eq!(console.prompt("Enter name: ")?, Some("  Alice ".to_string()));
        assert_eq!(console.prompt("Enter name: ")?, Some("".to_string()));
        assert_eq!(console.prompt("Enter name: ")?, None);

        let output = String::from_utf8_lossy(&console.into_output()).to_string();
        assert_eq!(output, "Enter name: Enter name: Enter name: ");
        Ok(())
    }

    #[test]
    fn optional_prompt_maps_empty_to_none() -> Result<(), AppError> {
        let mut console = console("\nnew@x.com\n");

        assert_eq!(console.prompt_optional("Email: ")?, Some(None));
        assert_eq!(
            console.prompt_optional("Email: ")?,
            Some(Some("new@x.com".to_string()))
        );
        assert_eq!(console.prompt_optional("Email: ")?, None);
        Ok(())
    }

    #[test]
    fn menu_lists_all_six_options() -> Result<(), AppError> {
        let mut console = console("");
        console.show_menu()?;

        let output = String::from_utf8_lossy(&console.into_output()).to_string();
        assert!(output.contains("1. Add Contact"));
        assert!(output.contains("5. Display Contacts"));
        assert!(output.contains("6. Exit"));
        Ok(())
    }
}
