// Polarity Scorer
// Scorer seam plus a lexicon-based default

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Produces a polarity in [-1.0, 1.0] for a text. Deterministic and total.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> f64;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}

const NEGATION_WINDOW: usize = 2;
const NEGATION_FACTOR: f64 = -0.5;

const OPINION_WORDS: &[(&str, f64)] = &[
    // Positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("cool", 0.35),
    ("delighted", 0.7),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("excited", 0.375),
    ("exciting", 0.3),
    ("fantastic", 0.4),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("great", 0.8),
    ("happy", 0.8),
    ("helpful", 0.5),
    ("impressive", 1.0),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleased", 0.5),
    ("positive", 0.23),
    ("promising", 0.5),
    ("recommend", 0.4),
    ("solid", 0.3),
    ("strong", 0.43),
    ("success", 0.6),
    ("successful", 0.75),
    ("thanks", 0.2),
    ("win", 0.8),
    ("wonderful", 1.0),
    ("wow", 0.1),
    // Negative
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broken", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("disaster", -0.8),
    ("disgusting", -1.0),
    ("dumb", -0.375),
    ("fail", -0.5),
    ("failed", -0.5),
    ("fake", -0.5),
    ("fear", -0.4),
    ("hate", -0.8),
    ("horrible", -1.0),
    ("lose", -0.3),
    ("mess", -0.5),
    ("negative", -0.3),
    ("poor", -0.4),
    ("sad", -0.5),
    ("scam", -0.8),
    ("scary", -0.5),
    ("sick", -0.71),
    ("stupid", -0.8),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("useless", -0.5),
    ("wasted", -0.2),
    ("weak", -0.375),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "nor", "cannot",
    "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't",
    "won't", "can't", "couldn't", "shouldn't", "wouldn't", "ain't",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.5),
    ("barely", 0.4),
];

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("token pattern is valid"))
}

/// Averages the polarity of opinion words, with intensifier and negation
/// adjustments. Texts without opinion words score 0.0.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let words = OPINION_WORDS
            .iter()
            .map(|(w, s)| (w.to_string(), *s))
            .collect();
        Self::with_lexicon(words)
    }

    /// Custom word -> polarity mapping; keeps the built-in modifiers.
    pub fn with_lexicon(words: HashMap<String, f64>) -> Self {
        Self {
            words,
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(w, m)| (w.to_string(), *m))
                .collect(),
        }
    }

    fn tokenize(text: &str) -> Vec<String> {
        let lowered = text.to_lowercase().replace('\u{2019}', "'");
        token_re()
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(text);
        let mut contributions = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.words.get(token) else {
                continue;
            };
            let mut value = base;

            if i > 0 {
                if let Some(mult) = self.intensifiers.get(&tokens[i - 1]) {
                    value *= mult;
                }
            }

            let window_start = i.saturating_sub(NEGATION_WINDOW);
            if tokens[window_start..i].iter().any(|t| self.negations.contains(t)) {
                value *= NEGATION_FACTOR;
            }

            contributions.push(value);
        }

        if contributions.is_empty() {
            return 0.0;
        }
        let mean = contributions.iter().sum::<f64>() / contributions.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
