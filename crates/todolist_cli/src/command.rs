//! Command-line grammar for the interactive session.
//!
//! # Responsibility
//! - Parse one input line into a typed `Command`.
//! - Keep parse failures separate from store failures; parsing never
//!   touches item state.
//!
//! Add grammar: `add <title> [-- due=MM/DD/YYYY loc=Name[@lat,lon]
//! desc=<rest of line>]`. The `desc=` field must come last because it
//! consumes the remainder of the line.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use todolist_core::{Coordinate, ItemValidationError, Location, Section, ToDoItem};

/// Due dates read and render as `07/13/2017`.
pub(crate) const DUE_DATE_FORMAT: &str = "%m/%d/%Y";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new item to the open list.
    Add(ToDoItem),
    /// Render both sections.
    List,
    /// Move open row `n` to the done list.
    Check(usize),
    /// Move done row `n` back to the open list.
    Uncheck(usize),
    /// Select a row and show its detail.
    Show(Section, usize),
    /// Drop every item in both sections.
    Clear,
    Help,
    Quit,
}

/// Failures turning an input line into a `Command`.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Line was empty or whitespace-only.
    Empty,
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidIndex(String),
    InvalidDate(String),
    InvalidCoordinate(String),
    UnknownField(String),
    Item(ItemValidationError),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty input"),
            Self::UnknownCommand(word) => {
                write!(f, "unknown command `{word}`; try `help`")
            }
            Self::MissingArgument(name) => write!(f, "missing {name}"),
            Self::InvalidIndex(value) => write!(f, "`{value}` is not a row number"),
            Self::InvalidDate(value) => {
                write!(f, "`{value}` is not a {DUE_DATE_FORMAT} date")
            }
            Self::InvalidCoordinate(value) => {
                write!(f, "`{value}` is not a lat,lon coordinate pair")
            }
            Self::UnknownField(field) => {
                write!(f, "unknown field `{field}`; expected due=, loc= or desc=")
            }
            Self::Item(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Item(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ItemValidationError> for ParseError {
    fn from(value: ItemValidationError) -> Self {
        Self::Item(value)
    }
}

/// Parses one line of user input.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (word, rest) = split_first_word(trimmed);
    match word {
        "add" => parse_add(rest),
        "list" | "ls" => Ok(Command::List),
        "check" => Ok(Command::Check(parse_index(rest)?)),
        "uncheck" => Ok(Command::Uncheck(parse_index(rest)?)),
        "show" => parse_show(rest),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn parse_add(rest: &str) -> Result<Command, ParseError> {
    // The command word and the separator may sit next to each other
    // ("add -- ..."), which leaves a bare "--" after whitespace folding.
    let (title, fields) = if let Some(fields) = rest.strip_prefix("-- ") {
        ("", fields.trim())
    } else {
        match rest.split_once(" -- ") {
            Some((title, fields)) => (title.trim(), fields.trim()),
            None => (rest, ""),
        }
    };

    // Blank titles are the model's call, not the grammar's.
    let mut item = ToDoItem::new(title)?;
    apply_fields(&mut item, fields)?;
    Ok(Command::Add(item))
}

fn apply_fields(item: &mut ToDoItem, fields: &str) -> Result<(), ParseError> {
    // desc= swallows everything after it, so strip it off first.
    let fields = match fields.split_once("desc=") {
        Some((before, description)) => {
            let description = description.trim();
            if !description.is_empty() {
                item.description = Some(description.to_string());
            }
            before
        }
        None => fields,
    };

    for token in fields.split_whitespace() {
        let Some((key, value)) = token.split_once('=') else {
            return Err(ParseError::UnknownField(token.to_string()));
        };
        match key {
            "due" => item.timestamp = Some(parse_due(value)?),
            "loc" => item.location = Some(parse_location(value)?),
            other => return Err(ParseError::UnknownField(other.to_string())),
        }
    }

    Ok(())
}

fn parse_due(value: &str) -> Result<i64, ParseError> {
    let date = NaiveDate::parse_from_str(value, DUE_DATE_FORMAT)
        .map_err(|_| ParseError::InvalidDate(value.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ParseError::InvalidDate(value.to_string()))?;
    Ok(midnight.and_utc().timestamp())
}

fn parse_location(value: &str) -> Result<Location, ParseError> {
    let Some((name, coords)) = value.split_once('@') else {
        return Ok(Location::new(value));
    };
    let Some((latitude, longitude)) = coords.split_once(',') else {
        return Err(ParseError::InvalidCoordinate(coords.to_string()));
    };
    let latitude: f64 = latitude
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(coords.to_string()))?;
    let longitude: f64 = longitude
        .parse()
        .map_err(|_| ParseError::InvalidCoordinate(coords.to_string()))?;
    Ok(Location::with_coordinate(
        name,
        Coordinate::new(latitude, longitude),
    ))
}

fn parse_show(rest: &str) -> Result<Command, ParseError> {
    match rest.strip_prefix("done") {
        Some(index) => Ok(Command::Show(Section::Done, parse_index(index)?)),
        None => Ok(Command::Show(Section::ToDo, parse_index(rest)?)),
    }
}

fn parse_index(rest: &str) -> Result<usize, ParseError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(ParseError::MissingArgument("row number"));
    }
    value
        .parse()
        .map_err(|_| ParseError::InvalidIndex(value.to_string()))
}

fn split_first_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}
