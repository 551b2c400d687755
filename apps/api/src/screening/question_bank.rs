//! Question Bank — maps declared skills to a bounded set of technical quiz questions.
//!
//! Lookup is a lowercase exact match against a fixed table. Sampling is random
//! on purpose; callers that need reproducible picks pass a seeded RNG.

use rand::seq::SliceRandom;
use rand::Rng;

/// Questions drawn per matched skill.
pub const QUESTIONS_PER_SKILL: usize = 2;
/// Upper bound on the selected set. Short sets are never padded.
pub const MAX_QUESTIONS: usize = 5;

type SkillTable = &'static [(&'static str, &'static [&'static str])];

const SKILL_QUESTIONS: SkillTable = &[
    (
        "javascript",
        &[
            "Explain the difference between let, const, and var in JavaScript.",
            "What is event delegation and how does it work?",
            "How do closures work in JavaScript? Provide an example.",
            "What are the differences between == and === operators?",
            "Explain the concept of hoisting in JavaScript.",
        ],
    ),
    (
        "python",
        &[
            "What are Python decorators and how do you use them?",
            "Explain the difference between lists and tuples in Python.",
            "What is the Global Interpreter Lock (GIL) in Python?",
            "How do you handle exceptions in Python?",
            "What are Python generators and when would you use them?",
        ],
    ),
    (
        "react",
        &[
            "What are React hooks and why were they introduced?",
            "Explain the difference between controlled and uncontrolled components.",
            "What is the virtual DOM and how does it improve performance?",
            "How do you optimize React applications for better performance?",
            "What are React context and when should you use it?",
        ],
    ),
    (
        "node.js",
        &[
            "What is the event loop in Node.js?",
            "How do you handle asynchronous operations in Node.js?",
            "What are streams in Node.js and when would you use them?",
            "Explain the difference between process.nextTick() and setImmediate().",
            "How do you handle errors in Node.js applications?",
        ],
    ),
    (
        "java",
        &[
            "What are the main principles of Object-Oriented Programming?",
            "Explain the difference between abstract classes and interfaces.",
            "What is garbage collection in Java?",
            "How does exception handling work in Java?",
            "What are Java generics and why are they useful?",
        ],
    ),
    (
        "sql",
        &[
            "What is the difference between INNER JOIN and LEFT JOIN?",
            "How do you optimize slow SQL queries?",
            "What are database indexes and when should you use them?",
            "Explain ACID properties in databases.",
            "What is normalization and why is it important?",
        ],
    ),
];

/// Used verbatim when none of the declared skills has an entry.
pub const GENERAL_QUESTIONS: &[&str] = &[
    "Describe a challenging technical problem you've solved recently.",
    "How do you stay updated with new technologies in your field?",
    "What's your approach to debugging code?",
];

/// Immutable skill → questions lookup.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    skills: SkillTable,
    general: &'static [&'static str],
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self {
            skills: SKILL_QUESTIONS,
            general: GENERAL_QUESTIONS,
        }
    }
}

impl QuestionBank {
    /// Returns the candidate questions for a skill, matched case-insensitively.
    pub fn questions_for(&self, skill: &str) -> Option<&'static [&'static str]> {
        let key = skill.to_lowercase();
        self.skills
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, questions)| *questions)
    }

    /// Selects quiz questions for the declared skills.
    ///
    /// Algorithm:
    /// 1. For each skill in caller order, sample `QUESTIONS_PER_SKILL` distinct questions
    /// 2. Unknown skills contribute nothing
    /// 3. If nothing matched, use the general set verbatim
    /// 4. Truncate to `MAX_QUESTIONS`, preserving accumulation order
    ///
    /// Duplicate skills are sampled independently, so the result may repeat a question.
    pub fn select<R: Rng + ?Sized>(&self, skills: &[String], rng: &mut R) -> Vec<String> {
        let mut selected: Vec<String> = Vec::new();

        for skill in skills {
            if let Some(pool) = self.questions_for(skill) {
                selected.extend(
                    pool.choose_multiple(&mut *rng, QUESTIONS_PER_SKILL)
                        .map(|q| q.to_string()),
                );
            }
        }

        if selected.is_empty() {
            selected = self.general.iter().map(|q| q.to_string()).collect();
        }

        selected.truncate(MAX_QUESTIONS);
        selected
    }
}
