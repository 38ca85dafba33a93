//! Card data decoded from the dictionary API.

use serde::Deserialize;

/// One flashcard worth of dictionary data.
///
/// Decoded from a single element of the Merriam-Webster response array. The
/// API reports many more fields per entry; only the part of speech (`fl`) and
/// the short definitions (`shortdef`) are kept. `word` is always the user's
/// input, never the headword the API reports.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Card {
    #[serde(skip)]
    pub word: String,
    #[serde(rename = "fl")]
    pub part_of_speech: String,
    #[serde(rename = "shortdef")]
    pub definitions: Vec<String>,
}

impl Card {
    /// Text for the Front field: the word in title case.
    pub fn front_text(&self) -> String {
        title_case(&self.word)
    }

    /// Text for the Back field: the part of speech, a blank line, then the
    /// definitions one per line, using HTML line breaks.
    pub fn back_text(&self) -> String {
        format!("{}<br><br>{}", self.part_of_speech, self.definitions.join("<br>"))
    }
}

/// Title-case a word or phrase: the first letter of each whitespace-separated
/// word is uppercased, the rest lowercased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    out
}
