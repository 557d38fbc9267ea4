//! Command-line parsing.
//!
//! Two-stage dispatch:
//! 1. `appt <word> <args>` goes to the appointment dispatcher,
//! 2. anything else is split into `<word> <args>` for the basic dispatcher.
//!
//! Each command word maps to a stateless argument parser. An unknown word is
//! [`ParseError::UnknownCommand`]; a known word with structurally broken
//! arguments is [`ParseError::InvalidCommandFormat`] carrying that command's
//! usage text.

mod appointment;
mod patient;
mod tokenizer;
mod util;

pub use tokenizer::*;
pub use util::*;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::commands::{Command, HELP_USAGE};
use crate::models::ValidationError;

/// Parse errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command")]
    UnknownCommand,

    #[error("Invalid command format!\n{0}")]
    InvalidCommandFormat(&'static str),

    #[error(transparent)]
    InvalidField(#[from] ValidationError),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Prefix that routes input to the appointment dispatcher.
pub const APPOINTMENT_NAMESPACE: &str = "appt";

static APPT_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"(?s)^{}\s+(?P<word>\S+)(?P<args>.*)$", APPOINTMENT_NAMESPACE);
    Regex::new(&pattern).expect("appt pattern is valid")
});

static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<word>\S+)(?P<args>.*)$").expect("basic pattern is valid")
});

/// Parse one line of user input into a command.
pub fn parse_command(input: &str) -> ParseResult<Command> {
    let input = input.trim();

    if let Some(captures) = APPT_COMMAND_FORMAT.captures(input) {
        let word = captures.name("word").map_or("", |m| m.as_str());
        let args = captures.name("args").map_or("", |m| m.as_str());
        return parse_appointment_command(word, args);
    }

    let captures = BASIC_COMMAND_FORMAT
        .captures(input)
        .ok_or(ParseError::InvalidCommandFormat(HELP_USAGE))?;
    let word = captures.name("word").map_or("", |m| m.as_str());
    let args = captures.name("args").map_or("", |m| m.as_str());
    parse_basic_command(word, args)
}

/// Dispatch a non-namespaced command word.
pub fn parse_basic_command(word: &str, args: &str) -> ParseResult<Command> {
    match word {
        "add" => patient::parse_add(args),
        "edit" => patient::parse_edit(args),
        "delete" => patient::parse_delete(args),
        "find" => patient::parse_find(args),
        "ma" => patient::parse_add_medical_entry(args),
        "md" => patient::parse_delete_medical_entry(args),
        "list" => Ok(Command::ListPatients),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Dispatch a command word following `appt`.
pub fn parse_appointment_command(word: &str, args: &str) -> ParseResult<Command> {
    match word {
        "add" => appointment::parse_add(args),
        "edit" => appointment::parse_edit(args),
        "delete" => appointment::parse_delete(args),
        "archive" => appointment::parse_archive(args),
        "list" => appointment::parse_list(args),
        "pa" => appointment::parse_add_prescription(args),
        "pd" => appointment::parse_delete_prescription(args),
        "pe" => appointment::parse_edit_prescription(args),
        _ => Err(ParseError::UnknownCommand),
    }
}
