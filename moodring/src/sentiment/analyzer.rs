use std::sync::Arc;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::ScoreVector;

use super::lexicon::{booster_scalar, is_negation, normalize_token, Lexicon};
use super::model::SentimentModel;

const CAPS_INCREMENT: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const CONTRAST_BEFORE: f64 = 0.5;
const CONTRAST_AFTER: f64 = 1.5;

/// Rule-based sentiment model over a valence lexicon.
///
/// Each token's valence is adjusted for preceding boosters, negations and
/// capitalization, contrast around "but" is applied, and the summed valence
/// is squashed into a compound score in `[-1, 1]`. The proportional
/// components are the shares of positive, negative and neutral tokens.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl LexiconAnalyzer {
    /// Analyzer over the built-in English lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Build from configuration, loading a custom lexicon file if one is set.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        match &config.lexicon_path {
            Some(path) => {
                let lexicon = Lexicon::load(path)?;
                tracing::info!(path = %path, entries = lexicon.len(), "Loaded custom lexicon");
                Ok(Self::with_lexicon(lexicon))
            }
            None => Ok(Self::new()),
        }
    }

    pub fn analyze(&self, text: &str) -> ScoreVector {
        let tokens = self.tokenize(text);
        if tokens.is_empty() {
            return ScoreVector::NEUTRAL;
        }

        let lowered: Vec<String> = tokens.iter().map(|t| normalize_token(t)).collect();
        let cap_differential = has_cap_differential(&tokens);

        let mut sentiments = Vec::with_capacity(tokens.len());
        for i in 0..tokens.len() {
            if booster_scalar(&lowered[i]).is_some() {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&tokens, &lowered, i, cap_differential));
        }

        apply_contrast(&lowered, &mut sentiments);
        score_sentiments(&sentiments, text)
    }

    /// Split on whitespace and strip surrounding ASCII punctuation, keeping
    /// tokens the lexicon knows verbatim (emoticons such as `:)` or `<3`).
    fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace()
            .map(|raw| {
                if self.lexicon.contains(&normalize_token(raw)) {
                    return raw;
                }
                let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
                if stripped.is_empty() {
                    raw
                } else {
                    stripped
                }
            })
            .collect()
    }

    fn token_valence(
        &self,
        tokens: &[&str],
        lowered: &[String],
        i: usize,
        cap_differential: bool,
    ) -> f64 {
        let word = lowered[i].as_str();
        let Some(base) = self.lexicon.valence(word) else {
            return 0.0;
        };

        // "no" ahead of a sentiment word acts as its negation, not a word of its own
        if word == "no"
            && lowered
                .get(i + 1)
                .is_some_and(|next| self.lexicon.contains(next))
        {
            return 0.0;
        }

        let mut valence = base;
        if (i > 0 && lowered[i - 1] == "no") || (i > 1 && lowered[i - 2] == "no") {
            valence = base * NEGATION_SCALAR;
        }

        if cap_differential && is_all_caps(tokens[i]) {
            valence += caps_emphasis(valence);
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prior = lowered[i - distance].as_str();
            if self.lexicon.contains(prior) {
                continue;
            }

            let decay = match distance {
                2 => 0.95,
                3 => 0.9,
                _ => 1.0,
            };
            valence += booster_effect(prior, tokens[i - distance], valence, cap_differential) * decay;

            if is_negation(prior) {
                valence *= NEGATION_SCALAR;
            }
        }

        if i > 0
            && lowered[i - 1] == "least"
            && !(i > 1 && matches!(lowered[i - 2].as_str(), "at" | "very"))
        {
            valence *= NEGATION_SCALAR;
        }

        valence
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconAnalyzer {
    fn polarity_scores(&self, text: &str) -> Result<ScoreVector> {
        Ok(self.analyze(text))
    }
}

fn caps_emphasis(valence: f64) -> f64 {
    if valence > 0.0 {
        CAPS_INCREMENT
    } else {
        -CAPS_INCREMENT
    }
}

fn booster_effect(lowered: &str, raw: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = booster_scalar(lowered) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_all_caps(raw) {
        scalar += caps_emphasis(valence);
    }
    scalar
}

fn is_all_caps(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

/// True when some, but not all, tokens are written in capitals.
fn has_cap_differential(tokens: &[&str]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

fn apply_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|t| t == "but") else {
        return;
    };
    for (i, sentiment) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *sentiment *= CONTRAST_BEFORE;
        } else if i > pivot {
            *sentiment *= CONTRAST_AFTER;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };

    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn score_sentiments(sentiments: &[f64], text: &str) -> ScoreVector {
    let emphasis = punctuation_emphasis(text);

    let mut total: f64 = sentiments.iter().sum();
    if total > 0.0 {
        total += emphasis;
    } else if total < 0.0 {
        total -= emphasis;
    }
    let compound = normalize(total);

    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0usize;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            positive_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            negative_sum += sentiment - 1.0;
        } else {
            neutral_count += 1;
        }
    }

    if positive_sum > negative_sum.abs() {
        positive_sum += emphasis;
    } else if positive_sum < negative_sum.abs() {
        negative_sum -= emphasis;
    }

    let denominator = positive_sum + negative_sum.abs() + neutral_count as f64;
    if denominator <= 0.0 {
        return ScoreVector::NEUTRAL;
    }

    ScoreVector::new(
        (negative_sum / denominator).abs(),
        neutral_count as f64 / denominator,
        (positive_sum / denominator).abs(),
        compound,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compound(text: &str) -> f64 {
        LexiconAnalyzer::new().analyze(text).compound
    }

    #[test]
    fn test_single_word_matches_normalization() {
        let score = LexiconAnalyzer::new().analyze("love");
        let expected = 3.2 / (3.2f64.powi(2) + NORMALIZATION_ALPHA).sqrt();

        assert!((score.compound - expected).abs() < 1e-9);
        assert_eq!(score.positive, 1.0);
        assert_eq!(score.negative, 0.0);
        assert_eq!(score.neutral, 0.0);
    }

    #[test]
    fn test_polarity_direction() {
        assert!(compound("I love this!") > 0.0);
        assert!(compound("I hate this.") < 0.0);
    }

    #[test]
    fn test_text_without_sentiment_is_neutral() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.analyze("the meeting is at noon"), ScoreVector::NEUTRAL);
        assert_eq!(analyzer.analyze(""), ScoreVector::NEUTRAL);
        assert_eq!(analyzer.analyze("   "), ScoreVector::NEUTRAL);
    }

    #[test]
    fn test_negation_flips_polarity() {
        assert!(compound("good") > 0.0);
        assert!(compound("not good") < 0.0);
        assert!(compound("don\u{2019}t love it") < 0.0);
        assert!(compound("it isn't bad") > 0.0);
    }

    #[test]
    fn test_boosters_scale_intensity() {
        assert!(compound("very good") > compound("good"));
        assert!(compound("slightly good") < compound("good"));
        assert!(compound("very bad") < compound("bad"));
    }

    #[test]
    fn test_caps_emphasis_in_mixed_case() {
        assert!(compound("GOOD day") > compound("good day"));
        // all-caps text carries no differential
        assert_eq!(compound("GOOD DAY"), compound("good day"));
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert!(compound("good!!!") > compound("good"));
        assert!(compound("bad!!") < compound("bad"));
        assert_eq!(punctuation_emphasis("!!!!!!"), 4.0 * EXCLAMATION_INCREMENT);
        assert_eq!(punctuation_emphasis("what?"), 0.0);
        assert_eq!(punctuation_emphasis("what????"), MAX_QUESTION_EMPHASIS);
    }

    #[test]
    fn test_contrast_weights_clause_after_but() {
        assert!(compound("the food was good but the service was terrible") < 0.0);
        assert!(compound("the food was terrible but the service was good") > 0.0);
    }

    #[test]
    fn test_least_negates() {
        assert!(compound("the least helpful answer") < 0.0);
        assert!(compound("at least helpful") > 0.0);
    }

    #[test]
    fn test_emoticons_are_scored() {
        assert!(compound("see you soon :)") > 0.0);
        assert!(compound("missed the train :(") < 0.0);
        assert!(compound("<3") > 0.0);
    }

    #[test]
    fn test_components_are_well_formed() {
        let analyzer = LexiconAnalyzer::new();
        let samples = [
            "I love this!",
            "I hate this.",
            "Wow, this is really powerful!",
            "not bad, not great, kinda boring but ok???",
            "THIS IS THE WORST DAY EVER!!!!!",
            "ok",
            "the food was good but the service was terrible",
        ];

        for text in samples {
            let score = analyzer.analyze(text);
            assert!(score.is_well_formed(), "ill-formed score for '{text}': {score}");
        }
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::parse("splendid\t2.5\ndreadful\t-2.5\n").unwrap();
        let analyzer = LexiconAnalyzer::with_lexicon(lexicon);

        assert!(analyzer.analyze("a splendid evening").compound > 0.0);
        assert!(analyzer.analyze("a dreadful evening").compound < 0.0);
        assert_eq!(analyzer.analyze("I love this"), ScoreVector::NEUTRAL);
    }

    #[test]
    fn test_from_config_missing_lexicon_fails() {
        let config = AnalysisConfig {
            message_limit: None,
            lexicon_path: Some("/nonexistent/lexicon.tsv".to_string()),
        };
        assert!(LexiconAnalyzer::from_config(&config).is_err());
    }
}
