//! Dictionary lookup module.
//!
//! Fetches word definitions from the Merriam-Webster Collegiate API.

mod card;
mod client;

pub use card::Card;
pub use client::{DictionaryClient, DictionaryError};
