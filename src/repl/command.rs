//! Command parsing
//!
//! Turns a raw input line into a `Command`.

use crate::error::{PokedexError, Result};

/// Help text for a single command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

/// Every command the REPL understands, in help order.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        usage: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        usage: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        usage: "map",
        description: "Displays the names of the next page of location areas",
    },
    CommandInfo {
        name: "mapb",
        usage: "mapb",
        description: "Displays the names of the previous page of location areas",
    },
    CommandInfo {
        name: "explore",
        usage: "explore <area>",
        description: "Displays a list of all the Pokémon located in an area",
    },
    CommandInfo {
        name: "catch",
        usage: "catch <pokemon>",
        description: "Tries to catch a pokemon",
    },
    CommandInfo {
        name: "inspect",
        usage: "inspect <pokemon>",
        description: "Displays the data of a caught pokemon",
    },
    CommandInfo {
        name: "pokedex",
        usage: "pokedex",
        description: "Displays the names of all caught pokemon",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses cleaned input words.
    ///
    /// Returns `Ok(None)` for a blank line. Words after the first argument
    /// are ignored.
    pub fn parse(words: &[String]) -> Result<Option<Self>> {
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let arg = args.first().cloned();

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(arg, "explore <area>")?),
            "catch" => Command::Catch(required(arg, "catch <pokemon>")?),
            "inspect" => Command::Inspect(required(arg, "inspect <pokemon>")?),
            "pokedex" => Command::Pokedex,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(arg: Option<String>, usage: &'static str) -> Result<String> {
    arg.ok_or(PokedexError::MissingArgument(usage))
}

/// Trims the line, splits it on whitespace and lowercases every word.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
