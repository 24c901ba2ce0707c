//! The tray's word palette and the demo cards a fresh board can start with.

use crate::types::{Point, Tile};
use std::collections::HashSet;

/// Words offered in the tray, in display order. Contains repeats.
pub const FRIDGE_POETRY_WORDS: &[&str] = &[
    "walk", "time", "it", "and", "of", "very", "wish", "run", "person", "I", "that", "in",
    "quite", "ed", "play", "year", "you", "but", "to", "rather", "ing", "read", "way", "he",
    "or", "for", "the", "er", "learn", "day", "they", "as", "with", "more", "dog", "be",
    "thing", "we", "if", "on", "most", "cat", "have", "man", "she", "when", "at", "less",
    "mom", "do", "who", "than", "from", "least", "dad", "say", "life", "them", "because", "by",
    "too", "the", "get", "hand", "me", "while", "about", "so", "grandma", "make", "part",
    "him", "where", "as", "just", "aunt", "go", "child", "one", "after", "into", "enough",
    "uncle", "know", "eye", "her", "so", "like", "indeed", "seem", "take", "woman", "us",
    "though", "through", "still", "feel", "see", "place", "something", "since", "after",
    "almost", "try", "come", "work", "nothing", "until", "over", "fairly", "leave", "think",
    "week", "anything", "whether", "between", "really", "call", "look", "case", "himself",
    "before", "out", "pretty", "ride", "want", "point", "everything", "although", "against",
    "even", "love", "give", "grandpa", "someone", "nor", "during", "a", "bit", "sort", "of",
    "use", "number", "themselves", "like", "without", "a", "little", "is", "find", "group",
    "everyone", "once", "before", "a", "lot", "was", "tell", "problem", "itself", "unless",
    "under", "were", "and", "ask", "fact", "anyone", "now", "around", "and", "school", "can",
    "could", "would", "will", "I", "food", "love",
];

/// Tray words with repeats removed, first occurrence wins. Each word doubles
/// as the draggable id, so ids must be unique.
pub fn tray_words() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    FRIDGE_POETRY_WORDS
        .iter()
        .copied()
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Cards shown on a fresh demo board.
pub fn demo_cards() -> Vec<Tile> {
    vec![
        Tile::new("Hello", Point::new(0.0, 0.0), "Hello"),
        Tile::new("world", Point::new(100.0, 100.0), "world"),
        Tile::new(".", Point::new(50.0, 50.0), "."),
    ]
}
