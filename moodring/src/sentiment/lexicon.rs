use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::{MoodError, Result};

/// Valence added by an intensifying booster word.
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// Valence removed by a dampening booster word.
pub const BOOSTER_DECREMENT: f64 = -0.293;

/// Valence ratings on a -4.0 (extremely negative) to 4.0 (extremely positive) scale.
const BUILTIN_ENTRIES: &[(&str, f64)] = &[
    // Strongly positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("lovely", 2.8),
    ("best", 3.2),
    ("great", 3.1),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("excellent", 2.7),
    ("perfect", 2.7),
    ("fantastic", 2.6),
    ("beautiful", 2.9),
    ("congratulations", 2.9),
    ("congrats", 2.4),
    ("happy", 2.7),
    ("happiest", 3.2),
    ("wow", 2.8),
    ("win", 2.8),
    ("won", 2.7),
    ("xoxo", 3.0),
    ("adore", 2.6),
    ("incredible", 2.6),
    ("brilliant", 2.8),
    ("delighted", 2.9),
    ("thrilled", 2.8),
    ("proud", 2.1),
    // Moderately positive
    ("good", 1.9),
    ("nice", 1.8),
    ("glad", 2.0),
    ("fun", 2.3),
    ("funny", 1.9),
    ("haha", 2.0),
    ("hahaha", 2.2),
    ("lol", 1.8),
    ("lmao", 2.0),
    ("yay", 2.4),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("sweet", 2.0),
    ("cute", 2.0),
    ("kind", 2.4),
    ("care", 2.2),
    ("hope", 1.9),
    ("hopefully", 1.7),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("helpful", 1.9),
    ("smile", 1.5),
    ("cool", 1.3),
    ("yes", 1.7),
    ("ok", 1.2),
    ("okay", 0.9),
    ("please", 1.3),
    ("like", 2.0),
    ("liked", 1.8),
    ("safe", 1.9),
    ("free", 2.3),
    ("friend", 2.2),
    ("miss", 0.6),
    ("welcome", 2.0),
    ("agree", 1.5),
    ("interesting", 1.7),
    ("relaxed", 2.2),
    ("calm", 1.3),
    ("well", 1.1),
    // Strongly negative
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("worst", -3.1),
    ("horrible", -2.5),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("disgusting", -2.4),
    ("kill", -3.7),
    ("dead", -3.3),
    ("die", -2.9),
    ("furious", -2.7),
    ("miserable", -2.2),
    ("devastated", -3.1),
    ("heartbroken", -2.9),
    ("hell", -3.6),
    ("shit", -2.6),
    ("fuck", -2.5),
    ("idiot", -2.3),
    ("stupid", -2.4),
    ("disaster", -3.1),
    // Moderately negative
    ("bad", -2.5),
    ("sad", -2.1),
    ("angry", -2.3),
    ("mad", -2.2),
    ("upset", -1.6),
    ("hurt", -2.4),
    ("cry", -2.1),
    ("crying", -2.1),
    ("sick", -2.3),
    ("pain", -2.3),
    ("wrong", -2.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("lose", -1.7),
    ("lost", -1.3),
    ("annoying", -1.7),
    ("annoyed", -1.6),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("worried", -1.2),
    ("worry", -1.9),
    ("scared", -1.9),
    ("afraid", -2.2),
    ("tired", -1.9),
    ("bored", -1.1),
    ("boring", -1.3),
    ("lonely", -1.5),
    ("problem", -1.7),
    ("sorry", -0.3),
    ("ugh", -1.8),
    ("damn", -1.7),
    ("crap", -1.6),
    ("jerk", -2.2),
    ("rude", -2.0),
    ("late", -0.6),
    ("no", -1.2),
    ("stress", -1.8),
    ("stressed", -1.4),
    // Emoticons and emoji
    (":)", 2.0),
    (":-)", 2.2),
    (":d", 2.3),
    (";)", 0.9),
    ("<3", 1.9),
    (":(", -1.9),
    (":-(", -1.5),
    (":'(", -2.2),
    ("❤", 3.0),
    ("❤️", 3.0),
    ("😍", 2.9),
    ("😊", 2.2),
    ("😂", 1.8),
    ("👍", 1.5),
    ("😢", -2.0),
    ("😭", -2.2),
    ("😡", -2.7),
    ("🙄", -1.0),
];

const INCREASING_BOOSTERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "awfully",
    "completely",
    "considerably",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "fully",
    "greatly",
    "hella",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "majorly",
    "more",
    "most",
    "particularly",
    "purely",
    "quite",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
    "super",
];

const DECREASING_BOOSTERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "little",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "didnt", "doesnt", "dont", "hadnt", "hasnt",
    "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
    "rarely", "seldom", "despite",
];

static BUILTIN: LazyLock<Arc<Lexicon>> = LazyLock::new(|| {
    Arc::new(Lexicon::from_entries(
        BUILTIN_ENTRIES
            .iter()
            .map(|(word, valence)| (word.to_string(), *valence)),
    ))
});

/// Word to valence table used by [`super::LexiconAnalyzer`].
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// The built-in English lexicon, initialized once per process.
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        Self {
            valences: entries
                .into_iter()
                .map(|(word, valence)| (normalize_token(&word), valence))
                .collect(),
        }
    }

    /// Parse a lexicon in `word<TAB>valence[<TAB>...]` format.
    ///
    /// Blank lines and lines starting with `#` are skipped. Extra columns (the
    /// standard deviation and raw ratings of the published VADER file) are
    /// ignored.
    pub fn parse(content: &str) -> Result<Self> {
        let mut valences = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let word = columns.next().map(str::trim).unwrap_or_default();
            let raw_valence = columns.next().map(str::trim).ok_or_else(|| {
                MoodError::Lexicon(format!("line {}: missing valence for '{word}'", index + 1))
            })?;

            if word.is_empty() {
                return Err(MoodError::Lexicon(format!("line {}: empty word", index + 1)));
            }

            let valence: f64 = raw_valence.parse().map_err(|e| {
                MoodError::Lexicon(format!(
                    "line {}: invalid valence '{raw_valence}' for '{word}': {e}",
                    index + 1
                ))
            })?;
            if !valence.is_finite() {
                return Err(MoodError::Lexicon(format!(
                    "line {}: valence for '{word}' must be finite, got '{raw_valence}'",
                    index + 1
                )));
            }

            valences.insert(normalize_token(word), valence);
        }

        if valences.is_empty() {
            return Err(MoodError::Lexicon("lexicon contains no entries".to_string()));
        }

        Ok(Self { valences })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MoodError::Lexicon(format!("failed to read lexicon {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Valence of an already normalized token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.valences.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

/// Lowercase a token and fold typographic apostrophes to ASCII.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase().replace(['\u{2019}', '\u{2018}'], "'")
}

/// Booster scalar for a normalized token, if it is a booster word.
pub fn booster_scalar(token: &str) -> Option<f64> {
    if INCREASING_BOOSTERS.contains(&token) {
        Some(BOOSTER_INCREMENT)
    } else if DECREASING_BOOSTERS.contains(&token) {
        Some(BOOSTER_DECREMENT)
    } else {
        None
    }
}

/// Whether a normalized token negates the sentiment that follows it.
pub fn is_negation(token: &str) -> bool {
    token.contains("n't") || NEGATIONS.contains(&token)
}
