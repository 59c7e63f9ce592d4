//! Built-in content served without calling the upstream API: the canned
//! replies used in local mode and the pool of suggested prompts.

mod table;

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use self::table::{
    CODING, CODING_KEYWORDS, CREATIVE, CREATIVE_KEYWORDS, GENERAL, GREETINGS, GREETING_KEYWORDS,
    QUESTIONS, SUGGESTIONS,
};

pub const SUGGESTION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory {
    Greetings,
    Questions,
    Coding,
    Creative,
    General,
}

impl ResponseCategory {
    /// First match wins: greeting, coding, creative, then a question mark.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if contains_any(GREETING_KEYWORDS) {
            ResponseCategory::Greetings
        } else if contains_any(CODING_KEYWORDS) {
            ResponseCategory::Coding
        } else if contains_any(CREATIVE_KEYWORDS) {
            ResponseCategory::Creative
        } else if lower.contains('?') {
            ResponseCategory::Questions
        } else {
            ResponseCategory::General
        }
    }

    pub fn responses(&self) -> &'static [&'static str] {
        match self {
            ResponseCategory::Greetings => GREETINGS,
            ResponseCategory::Questions => QUESTIONS,
            ResponseCategory::Coding => CODING,
            ResponseCategory::Creative => CREATIVE,
            ResponseCategory::General => GENERAL,
        }
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        // every table is non-empty
        self.responses().choose(rng).copied().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCategory::Greetings => "greetings",
            ResponseCategory::Questions => "questions",
            ResponseCategory::Coding => "coding",
            ResponseCategory::Creative => "creative",
            ResponseCategory::General => "general",
        }
    }
}

impl fmt::Display for ResponseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn suggestion_pool() -> &'static [&'static str] {
    SUGGESTIONS
}

/// Up to [`SUGGESTION_COUNT`] distinct prompts from the pool, uniformly shuffled.
pub fn sample_suggestions<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = SUGGESTIONS.to_vec();
    pool.shuffle(rng);
    pool.into_iter()
        .take(SUGGESTION_COUNT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn greeting_beats_every_other_category() {
        assert_eq!(
            ResponseCategory::classify("hi, can you write code?"),
            ResponseCategory::Greetings
        );
        assert_eq!(ResponseCategory::classify("HELLO there"), ResponseCategory::Greetings);
    }

    #[test]
    fn coding_beats_creative_and_questions() {
        assert_eq!(
            ResponseCategory::classify("write python for me?"),
            ResponseCategory::Coding
        );
    }

    #[test]
    fn creative_beats_questions() {
        assert_eq!(
            ResponseCategory::classify("can you compose a poem?"),
            ResponseCategory::Creative
        );
    }

    #[test]
    fn question_mark_without_keywords_is_a_question() {
        assert_eq!(ResponseCategory::classify("what is gravity?"), ResponseCategory::Questions);
    }

    #[test]
    fn plain_statement_is_general() {
        assert_eq!(ResponseCategory::classify("tell me about mars"), ResponseCategory::General);
    }

    #[test]
    fn keywords_match_as_substrings() {
        // "this" contains "hi"
        assert_eq!(ResponseCategory::classify("is this real"), ResponseCategory::Greetings);
    }

    #[test]
    fn picks_come_from_the_category_table() {
        let mut rng = rand::thread_rng();
        for category in [
            ResponseCategory::Greetings,
            ResponseCategory::Questions,
            ResponseCategory::Coding,
            ResponseCategory::Creative,
            ResponseCategory::General,
        ] {
            assert_eq!(category.responses().len(), 3);
            for _ in 0..20 {
                assert!(category.responses().contains(&category.pick(&mut rng)));
            }
        }
    }

    #[test]
    fn suggestions_are_four_distinct_pool_entries() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let picked = sample_suggestions(&mut rng);
            assert_eq!(picked.len(), SUGGESTION_COUNT);
            let unique: HashSet<&String> = picked.iter().collect();
            assert_eq!(unique.len(), SUGGESTION_COUNT);
            assert!(picked.iter().all(|s| suggestion_pool().contains(&s.as_str())));
        }
    }

    #[test]
    fn suggestion_order_varies() {
        let mut rng = rand::thread_rng();
        let orders: HashSet<Vec<String>> =
            (0..200).map(|_| sample_suggestions(&mut rng)).collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn category_displays_lowercase() {
        assert_eq!(ResponseCategory::Creative.to_string(), "creative");
        assert_eq!(ResponseCategory::Questions.to_string(), "questions");
    }
}
