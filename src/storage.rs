//! Browser local storage, wrapped so the rest of the app never touches the
//! raw API and the odds module never sees it at all. Single writer, last
//! write wins; a failed write is logged and dropped.

use std::collections::{HashMap, HashSet};

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;

const LEARNED_TERMS: &str = "learnedTerms";
const QUIZ_ANSWERS: &str = "quizAnswers";
const THEME: &str = "theme";

fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

fn set<T: Serialize>(key: &str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        console::warn!(format!("failed to persist {key}: {err}"));
    }
}

pub fn learned_terms() -> HashSet<String> {
    get(LEARNED_TERMS).unwrap_or_default()
}

pub fn save_learned_terms(terms: &HashSet<String>) {
    set(LEARNED_TERMS, terms);
}

pub fn quiz_answers() -> HashMap<String, String> {
    get(QUIZ_ANSWERS).unwrap_or_default()
}

pub fn save_quiz_answers(answers: &HashMap<String, String>) {
    set(QUIZ_ANSWERS, answers);
}

pub fn dark_mode() -> Option<bool> {
    get::<String>(THEME).map(|theme| theme == "dark")
}

pub fn save_dark_mode(dark: bool) {
    set(THEME, if dark { "dark" } else { "light" });
}
