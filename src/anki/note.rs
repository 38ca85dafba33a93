//! Note payloads and search queries for AnkiConnect.

use std::collections::HashMap;

use serde::Serialize;

/// Note type used for generated cards.
pub const BASIC_MODEL: &str = "Basic";

/// Field names of the Basic note type.
pub const FRONT_FIELD: &str = "Front";
pub const BACK_FIELD: &str = "Back";

/// A new note as submitted with the `addNote` action.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub deck_name: String,
    pub model_name: String,
    pub fields: HashMap<String, String>,
}

impl Note {
    /// Build a Basic (Front/Back) note for a deck.
    pub fn basic(deck: &str, front: String, back: String) -> Self {
        Self {
            deck_name: deck.to_string(),
            model_name: BASIC_MODEL.to_string(),
            fields: HashMap::from([
                (FRONT_FIELD.to_string(), front),
                (BACK_FIELD.to_string(), back),
            ]),
        }
    }
}

/// Search expression matching notes in `deck` whose Front field is exactly
/// `word`. Both segments are quoted so deck names with spaces stay intact.
pub fn duplicate_query(deck: &str, word: &str) -> String {
    format!("\"deck:{}\" \"front:{}\"", deck, word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_query_layout() {
        assert_eq!(duplicate_query("English", "run"), r#""deck:English" "front:run""#);
        assert_eq!(
            duplicate_query("My Words", "ad hoc"),
            r#""deck:My Words" "front:ad hoc""#
        );
    }

    #[test]
    fn test_basic_note_wire_shape() {
        let note = Note::basic("English", "Run".to_string(), "verb<br><br>to move fast".to_string());
        let value = serde_json::to_value(&note).unwrap();

        assert_eq!(value["deckName"], "English");
        assert_eq!(value["modelName"], "Basic");
        assert_eq!(value["fields"]["Front"], "Run");
        assert_eq!(value["fields"]["Back"], "verb<br><br>to move fast");
    }
}
