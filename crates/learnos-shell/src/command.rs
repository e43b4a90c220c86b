//! REPL command parsing.

use learnos_core::dock::DockSelector;
use learnos_core::error::{LearnOsError, Result};
use learnos_core::sandbox::forces::{MAX_WEIGHT, MIN_WEIGHT};
use learnos_core::sandbox::pattern_garden::{CELL_COUNT, GRID_SIDE};
use learnos_core::sandbox::{
    ForcesAction, NumberPlayAction, PatternGarden, PatternGardenAction, SandboxAction,
};

/// Slash commands offered for completion, in help order.
pub const COMMANDS: [&str; 13] = [
    "/dock", "/hint", "/open", "/close", "/a", "/b", "/toggle", "/left", "/right", "/show",
    "/session", "/help", "/quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dock,
    Hint(DockSelector),
    Open(DockSelector),
    Close,
    Sandbox(SandboxAction),
    Show,
    Session,
    Help,
    Quit,
}

/// Parses one REPL line.
pub fn parse(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    if trimmed == "quit" || trimmed == "exit" {
        return Ok(Command::Quit);
    }

    let Some(body) = trimmed.strip_prefix('/') else {
        return Err(LearnOsError::invalid_input(
            "commands start with '/', try /help",
        ));
    };
    let (name, rest) = match body.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (body, ""),
    };

    match name {
        "dock" => Ok(Command::Dock),
        "hint" => Ok(Command::Hint(rest.parse()?)),
        "open" => Ok(Command::Open(rest.parse()?)),
        "close" => Ok(Command::Close),
        // an empty value clears the input
        "a" => Ok(number_play(NumberPlayAction::SetA(rest.to_string()))),
        "b" => Ok(number_play(NumberPlayAction::SetB(rest.to_string()))),
        "toggle" => parse_toggle(rest),
        "left" => Ok(forces(ForcesAction::SetLeft(parse_weight(rest)?))),
        "right" => Ok(forces(ForcesAction::SetRight(parse_weight(rest)?))),
        "show" => Ok(Command::Show),
        "session" => Ok(Command::Session),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(LearnOsError::invalid_input(format!(
            "unknown command '/{other}', try /help"
        ))),
    }
}

fn number_play(action: NumberPlayAction) -> Command {
    Command::Sandbox(SandboxAction::NumberPlay(action))
}

fn forces(action: ForcesAction) -> Command {
    Command::Sandbox(SandboxAction::Forces(action))
}

/// `/toggle <cell>` (0-24) or `/toggle <row> <col>` (0-4 each).
fn parse_toggle(rest: &str) -> Result<Command> {
    let parts: Vec<&str> = rest.split_whitespace().collect();
    let index = match parts.as_slice() {
        [cell] => cell.parse::<usize>().ok().filter(|i| *i < CELL_COUNT),
        [row, col] => match (row.parse::<usize>(), col.parse::<usize>()) {
            (Ok(row), Ok(col)) => PatternGarden::index_of(row, col),
            _ => None,
        },
        _ => None,
    };
    let index = index.ok_or_else(|| {
        LearnOsError::invalid_input(format!(
            "usage: /toggle <0-{}> or /toggle <row> <col> with row/col 0-{}",
            CELL_COUNT - 1,
            GRID_SIDE - 1
        ))
    })?;
    Ok(Command::Sandbox(SandboxAction::PatternGarden(
        PatternGardenAction::Toggle(index),
    )))
}

fn parse_weight(rest: &str) -> Result<u8> {
    rest.parse::<u8>()
        .ok()
        .filter(|w| (MIN_WEIGHT..=MAX_WEIGHT).contains(w))
        .ok_or_else(|| {
            LearnOsError::invalid_input(format!("weight must be {MIN_WEIGHT}-{MAX_WEIGHT}"))
        })
}
