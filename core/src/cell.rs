use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::*;

/// One challenge square on a player's board.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Cell {
    pub difficulty: Difficulty,
    pub challenge: String,
    pub done: bool,
}

impl Cell {
    pub fn new(challenge: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            challenge: challenge.into(),
            done: false,
        }
    }

    /// Reads a cell out of an arbitrary JSON value without ever failing.
    ///
    /// Non-object values become an empty cell. Missing fields take their
    /// defaults, `difficulty` goes through [`Difficulty::coerce`] and `done`
    /// through [`Truthy`].
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            log::debug!("Cell is not an object ({value}), using an empty cell");
            return Self::default();
        };

        let difficulty = fields
            .get("difficulty")
            .map_or(Difficulty::ZERO, Difficulty::coerce);
        let challenge = match fields.get("challenge") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };
        let done = fields.get("done").is_some_and(|flag| flag.is_truthy());

        Self {
            difficulty,
            challenge,
            done,
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_cell_reads_every_field() {
        let cell: Cell = serde_json::from_value(json!({
            "challenge": "Sing in public",
            "difficulty": 7,
            "done": true,
        }))
        .unwrap();

        assert_eq!(cell.challenge, "Sing in public");
        assert_eq!(cell.difficulty.value(), 7.0);
        assert!(cell.done);
    }

    #[test]
    fn malformed_fields_fall_back_to_defaults() {
        let cell = Cell::from_value(&json!({
            "challenge": 42,
            "difficulty": "very",
            "done": "",
        }));

        assert_eq!(cell.challenge, "42");
        assert_eq!(cell.difficulty, Difficulty::ZERO);
        assert!(!cell.done);
    }

    #[test]
    fn non_object_cell_is_empty() {
        assert_eq!(Cell::from_value(&json!(null)), Cell::default());
        assert_eq!(Cell::from_value(&json!("1x1")), Cell::default());
    }

    #[test]
    fn serializes_in_server_board_shape() {
        let mut cell = Cell::new("Run a mile", Difficulty::new(5.0));
        cell.done = true;

        assert_eq!(
            serde_json::to_value(&cell).unwrap(),
            json!({ "difficulty": 5, "challenge": "Run a mile", "done": true })
        );
    }
}
