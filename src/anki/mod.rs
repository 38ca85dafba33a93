//! AnkiConnect integration module.
//!
//! Talks to the AnkiConnect add-on of a locally running Anki instance to
//! search for and add notes.

mod client;
mod note;

pub use client::{AnkiClient, AnkiError};
pub use note::Note;
