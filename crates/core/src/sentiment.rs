//! Lexicon-based comment sentiment.
//!
//! Every lexicon hit contributes its valence, adjusted by nearby boosters,
//! negators, shouting and a contrastive "but". The sum gets
//! punctuation emphasis and is normalized to [-1, 1] with `x / sqrt(x² + 15)`.

use std::collections::{HashMap, HashSet};

use crate::{
    lexicon::{BOOSTERS, NEGATORS, VALENCES},
    types::{Comment, LabeledComment, Sentiment, SentimentLabel},
};

/// Scores above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Scores below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

const NORMALIZATION_ALPHA: f64 = 15.0;
const NEGATION_SCALAR: f64 = -0.74;
const CAPS_EMPHASIS: f64 = 0.733;
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_EMPHASIS: f64 = 0.18;
const BOOSTER_WINDOW: usize = 3;
const BOOSTER_DECAY: [f64; BOOSTER_WINDOW] = [1.0, 0.95, 0.9];
const NEGATION_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            positive: POSITIVE_THRESHOLD,
            negative: NEGATIVE_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn label(&self, score: f64) -> SentimentLabel {
        if score > self.positive {
            SentimentLabel::Positive
        } else if score < self.negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

#[derive(Debug)]
struct Token {
    text: String,
    shouting: bool,
}

pub struct SentimentClassifier {
    valences: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negators: HashSet<&'static str>,
    thresholds: Thresholds,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self::with_thresholds(Thresholds::default())
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
            thresholds,
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        let score = self.polarity(text);
        Sentiment {
            label: self.thresholds.label(score),
            score,
        }
    }

    /// Label a whole dataset, keeping comment order
    pub fn label_comments(&self, comments: Vec<Comment>) -> Vec<LabeledComment> {
        comments
            .into_iter()
            .map(|comment| {
                let sentiment = self.classify(&comment.text);
                LabeledComment { comment, sentiment }
            })
            .collect()
    }

    /// Polarity in [-1, 1]; 0.0 for text without sentiment words
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let any_shouting = tokens.iter().any(|t| t.shouting);
        let all_shouting = tokens.iter().all(|t| t.shouting);
        let caps_differ = any_shouting && !all_shouting;
        let but_at = tokens.iter().position(|t| t.text == "but");

        let mut sum = 0.0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.valences.get(token.text.as_str()) else {
                continue;
            };
            let mut valence = base;
            if token.shouting && caps_differ {
                valence += CAPS_EMPHASIS * valence.signum();
            }

            for (distance, prev) in tokens[..i].iter().rev().take(BOOSTER_WINDOW).enumerate() {
                if let Some(&boost) = self.boosters.get(prev.text.as_str()) {
                    let mut scalar = boost * valence.signum();
                    if prev.shouting && caps_differ {
                        scalar += CAPS_EMPHASIS * scalar.signum();
                    }
                    valence += scalar * BOOSTER_DECAY[distance];
                }
            }

            let window = &tokens[i.saturating_sub(NEGATION_WINDOW)..i];
            if window.iter().any(|t| self.is_negator(&t.text)) {
                valence *= NEGATION_SCALAR;
            }

            match but_at {
                Some(at) if i < at => valence *= 0.5,
                Some(at) if i > at => valence *= 1.5,
                _ => {}
            }

            sum += valence;
        }

        if sum != 0.0 {
            let emphasis = punctuation_emphasis(text);
            sum += emphasis * sum.signum();
        }

        normalize(sum)
    }

    fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word) || word.ends_with("n't")
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_EMPHASIS,
        _ => 0.96,
    };
    exclamations as f64 * EXCLAMATION_EMPHASIS + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Split on whitespace into words (letters, digits, apostrophes) and
/// standalone symbols such as emoji.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for raw in text.split_whitespace() {
        let mut word = String::new();
        for ch in raw.chars() {
            if ch.is_alphanumeric() || ch == '\'' || ch == '\u{2019}' {
                word.push(if ch == '\u{2019}' { '\'' } else { ch });
                continue;
            }
            push_word(&mut tokens, &mut word);
            if !ch.is_ascii() && ch != '\u{fe0f}' && !ch.is_whitespace() {
                tokens.push(Token {
                    text: ch.to_string(),
                    shouting: false,
                });
            }
        }
        push_word(&mut tokens, &mut word);
    }

    tokens
}

fn push_word(tokens: &mut Vec<Token>, word: &mut String) {
    let trimmed = word.trim_matches('\'');
    if !trimmed.is_empty() {
        let letters = trimmed.chars().filter(|c| c.is_alphabetic()).count();
        let shouting = letters >= 2
            && trimmed
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(|c| c.is_uppercase());
        tokens.push(Token {
            text: trimmed.to_lowercase(),
            shouting,
        });
    }
    word.clear();
}
