//! Decoding of GetStatusInformation outputs
//!
//! The output array is positional. Index 0 is not used; indices 1..=7 are
//! status text, current message name, line speed, consumable names,
//! consumable levels, active errors and active warnings.

use ijlink_core::Variant;
use serde::Serialize;

const STATUS: usize = 1;
const MESSAGE_NAME: usize = 2;
const LINE_SPEED: usize = 3;
const CONSUMABLE_NAMES: usize = 4;
const CONSUMABLE_LEVELS: usize = 5;
const ERRORS: usize = 6;
const WARNINGS: usize = 7;

/// Printer status decoded from a GetStatusInformation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusInformation {
    pub status: String,
    pub message_name: String,
    pub line_speed: Variant,
    pub consumable_names: Vec<String>,
    pub consumable_levels: Vec<Variant>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl StatusInformation {
    /// Decode from the output array; `None` unless it has all eight slots
    pub fn from_outputs(outputs: &[Variant]) -> Option<Self> {
        if outputs.len() <= WARNINGS {
            return None;
        }

        Some(Self {
            status: outputs[STATUS].to_string(),
            message_name: outputs[MESSAGE_NAME].to_string(),
            line_speed: outputs[LINE_SPEED].clone(),
            consumable_names: strings(&outputs[CONSUMABLE_NAMES]),
            consumable_levels: outputs[CONSUMABLE_LEVELS].to_list(),
            errors: strings(&outputs[ERRORS]),
            warnings: strings(&outputs[WARNINGS]),
        })
    }

    /// Consumable names paired with their level, where one was reported
    pub fn consumables(&self) -> impl Iterator<Item = (&str, Option<&Variant>)> {
        self.consumable_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), self.consumable_levels.get(i)))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn strings(value: &Variant) -> Vec<String> {
    value.to_list().iter().map(ToString::to_string).collect()
}
