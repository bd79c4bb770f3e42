use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::*;

const NAME_FIELD: &str = "name";

/// Completion state carried for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    pub done: bool,
}

/// Request body that marks one cell on a named player's board as done or open.
///
/// On the wire this is the flat object `{ "name": .., "<cell key>": { "done": .. } }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TogglePayload {
    name: String,
    cell_key: String,
    update: CellUpdate,
}

impl TogglePayload {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cell_key(&self) -> &str {
        &self.cell_key
    }

    pub fn update(&self) -> CellUpdate {
        self.update
    }

    pub fn done(&self) -> bool {
        self.update.done
    }
}

/// Builds the toggle request for `cell_key` on `player_name`'s board.
///
/// `done_state` is coerced with [`Truthy`]. An absent identifier is passed as
/// the empty string.
///
/// Fails with [`InvalidArgument::MissingPlayerName`] or
/// [`InvalidArgument::MissingCellKey`] for an empty identifier, and with
/// [`InvalidArgument::ReservedCellKey`] when `cell_key` is `"name"`, which
/// would overwrite the player name in the flat body.
pub fn build_toggle_payload(
    player_name: &str,
    cell_key: &str,
    done_state: impl Truthy,
) -> Result<TogglePayload> {
    let reason = if player_name.is_empty() {
        Some(InvalidArgument::MissingPlayerName)
    } else if cell_key.is_empty() {
        Some(InvalidArgument::MissingCellKey)
    } else if cell_key == NAME_FIELD {
        Some(InvalidArgument::ReservedCellKey)
    } else {
        None
    };

    if let Some(reason) = reason {
        log::debug!("Refusing toggle payload for {player_name:?}/{cell_key:?}: {reason}");
        return Err(reason.into());
    }

    Ok(TogglePayload {
        name: player_name.to_owned(),
        cell_key: cell_key.to_owned(),
        update: CellUpdate {
            done: done_state.is_truthy(),
        },
    })
}

impl Serialize for TogglePayload {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(NAME_FIELD, &self.name)?;
        map.serialize_entry(&self.cell_key, &self.update)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for TogglePayload {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use de::Error;

        let Value::Object(mut fields) = Value::deserialize(deserializer)? else {
            return Err(D::Error::custom("toggle payload must be an object"));
        };

        let name = match fields.remove(NAME_FIELD) {
            Some(Value::String(name)) => name,
            Some(_) => return Err(D::Error::custom("player name must be a string")),
            None => String::new(),
        };

        let mut updates = fields.into_iter();
        let (cell_key, update) = match (updates.next(), updates.next()) {
            (Some(entry), None) => entry,
            (None, _) => (String::new(), Value::Null),
            (Some(_), Some(_)) => {
                return Err(D::Error::custom("expected exactly one cell update"));
            }
        };

        let done = match &update {
            Value::Object(update) => update.get("done"),
            _ => None,
        };
        let Some(done) = done else {
            if cell_key.is_empty() {
                return Err(D::Error::custom(InvalidArgument::MissingCellKey));
            }
            return Err(D::Error::custom("missing done flag"));
        };

        build_toggle_payload(&name, &cell_key, done).map_err(D::Error::custom)
    }
}
