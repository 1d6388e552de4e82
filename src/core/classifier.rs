//! # Reply Classifier
//!
//! Picks one of four canned replies by keyword substring matching.
//!
//! Rules are checked in the order of [`RULES`]; the first one that matches
//! wins. Rules overlap ("what food has calories" hits both the diet and the
//! calorie rule), so the order is part of the behavior. When nothing matches,
//! [`Reply::Fallback`] is returned.
//!
//! Matching runs on an already lower-cased message. Use [`classify_message`]
//! to lower-case and classify in one step.

/// The canned replies the assistant can give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Diet,
    Calories,
    HowItWorks,
    Fallback,
}

impl Reply {
    pub fn text(&self) -> &'static str {
        match self {
            Reply::Diet => {
                "Avoid ❌: Sugar, fried food, white rice. ✅ Prefer: veggies, proteins, whole grains, and 2-3L water daily 💧."
            }
            Reply::Calories => {
                "On average, a balanced diabetic diet = 1500–2000 kcal/day depending on age, weight & activity. 🍲"
            }
            Reply::HowItWorks => {
                "I use a Machine Learning model (Logistic Regression). It studies your glucose, BMI, BP, age, and family history → then calculates your diabetes risk ✅."
            }
            Reply::Fallback => {
                "I'm still learning 😅. Try asking about 'diet', 'calories', or 'how prediction works'."
            }
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Reply::Diet => "diet",
            Reply::Calories => "calories",
            Reply::HowItWorks => "how-it-works",
            Reply::Fallback => "fallback",
        }
    }
}

/// How a rule's keywords combine.
#[derive(Debug, Clone, Copy)]
pub enum Keywords {
    /// Matches if the message contains at least one keyword.
    Any(&'static [&'static str]),
    /// Matches if the message contains every keyword.
    All(&'static [&'static str]),
}

impl Keywords {
    pub fn matches(&self, message: &str) -> bool {
        match self {
            Keywords::Any(words) => words.iter().any(|w| message.contains(w)),
            Keywords::All(words) => words.iter().all(|w| message.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: Keywords,
    pub reply: Reply,
}

/// Priority-ordered rule table.
pub const RULES: &[Rule] = &[
    Rule {
        keywords: Keywords::Any(&["diet", "food"]),
        reply: Reply::Diet,
    },
    Rule {
        keywords: Keywords::Any(&["calorie", "calories"]),
        reply: Reply::Calories,
    },
    Rule {
        keywords: Keywords::All(&["how", "work"]),
        reply: Reply::HowItWorks,
    },
];

/// Classify a lower-cased message.
pub fn classify_reply(lowercased: &str) -> Reply {
    RULES
        .iter()
        .find(|rule| rule.keywords.matches(lowercased))
        .map(|rule| rule.reply)
        .unwrap_or(Reply::Fallback)
}

/// Classify a lower-cased message and return the reply text.
pub fn classify(lowercased: &str) -> &'static str {
    classify_reply(lowercased).text()
}

/// Lower-case `message`, then classify it.
pub fn classify_message(message: &str) -> Reply {
    classify_reply(&message.to_lowercase())
}
