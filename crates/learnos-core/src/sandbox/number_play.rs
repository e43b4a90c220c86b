//! Number Play: add two numbers and look for patterns.

use serde_json::{Value, json};

use super::Sandbox;
use crate::event::{EventDraft, EventType};

pub const APP_NAME: &str = "NumberPlay";
pub const PROMPT: &str = "Play with numbers. What patterns do you notice?";
pub const TIP: &str = "Try different pairs that make the same total.";
/// Shown instead of the sum when either input is not a number.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberPlayAction {
    SetA(String),
    SetB(String),
}

/// Two free-text inputs and their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberPlay {
    a: String,
    b: String,
}

impl NumberPlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    /// The sum, if both inputs hold numbers.
    pub fn sum(&self) -> Option<f64> {
        Some(parse_number(&self.a)? + parse_number(&self.b)?)
    }

    /// The sum as displayed, or [`PLACEHOLDER`].
    pub fn display_sum(&self) -> String {
        match self.sum() {
            Some(sum) => format!("{sum}"),
            None => PLACEHOLDER.to_string(),
        }
    }

    fn derive_event(&self) -> Option<EventDraft> {
        if self.a.is_empty() || self.b.is_empty() {
            return None;
        }
        let values = [number_value(&self.a), number_value(&self.b)];
        Some(EventDraft::new(
            APP_NAME,
            EventType::Action,
            Some(json!({ "operation": "add", "values": values })),
        ))
    }
}

impl Sandbox for NumberPlay {
    type Action = NumberPlayAction;

    fn reduce(&mut self, action: NumberPlayAction) -> Option<EventDraft> {
        let (slot, value) = match action {
            NumberPlayAction::SetA(value) => (&mut self.a, value),
            NumberPlayAction::SetB(value) => (&mut self.b, value),
        };
        if *slot == value {
            return None;
        }
        *slot = value;
        self.derive_event()
    }
}

/// Parses a trimmed decimal; empty, non-numeric and non-finite input is `None`.
fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// JSON form of an input: integral values as integers, unparseable as `null`.
fn number_value(input: &str) -> Value {
    match parse_number(input) {
        Some(v) if v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 => Value::from(v as i64),
        Some(v) => Value::from(v),
        None => Value::Null,
    }
}
