//! Immutable vocabulary configuration injected into the extractors and the
//! matching engine. Nothing here is mutated at runtime; custom vocabularies can
//! be constructed for tests or per-deployment tuning.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Engineering branch codes recognized by the portal.
///
/// Declaration order matters: it is the iteration order of the default
/// [`BranchKeywordTable`], and resume branch extraction is first-match-wins in
/// that order (a documented heuristic, not an oversight).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
    Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Branch {
    Cse,
    Ece,
    Eee,
    Mech,
    Civil,
    It,
}

/// Canonical skill tokens recognized in both resumes and job descriptions.
/// The same vocabulary must be used on both sides for matching to be symmetric.
const DEFAULT_SKILL_TOKENS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "c++", "c#", "c", "ruby", "php",
    "swift", "kotlin", "go", "rust",
    // Web frameworks
    "react", "reactjs", "angular", "vue", "vuejs", "node.js", "nodejs", "express",
    "django", "flask", "spring boot", "asp.net",
    "html", "html5", "css", "css3", "sass", "scss", "bootstrap", "tailwind",
    "material ui", "jquery",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "cassandra", "oracle",
    "sqlite", "nosql", "dbms",
    // Cloud and DevOps
    "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins",
    "ci/cd", "devops",
    "git", "github", "gitlab", "bitbucket", "jira", "agile", "scrum", "kanban",
    // ML and data
    "machine learning", "deep learning", "ai", "artificial intelligence",
    "data science", "nlp", "computer vision",
    "pandas", "numpy", "tensorflow", "pytorch", "scikit-learn", "keras",
    "opencv", "yolo",
    // APIs and architecture
    "rest api", "restful", "graphql", "microservices", "websockets", "grpc", "api",
    // Systems
    "linux", "unix", "bash", "powershell", "windows", "shell scripting",
    // Analytics
    "tableau", "power bi", "excel", "data visualization", "matplotlib", "seaborn",
    // Testing
    "testing", "unit testing", "integration testing", "selenium", "jest", "mocha",
    "junit", "pytest",
    "firebase", "dynamodb", "elasticsearch",
    "next.js", "nuxt.js", "gatsby", "redux", "mobx", "webpack", "vite",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Design
    "photoshop", "illustrator", "figma", "sketch", "adobe xd", "ui/ux",
    // Blockchain
    "blockchain", "solidity", "web3", "ethereum", "smart contracts",
    // Misc
    "twilio", "autoencoder", "u-net", "neural networks", "cnn", "rnn",
    "data structures", "algorithms", "oop", "object-oriented programming",
    "vs code", "visual studio",
];

static DEFAULT_VOCABULARY: Lazy<SkillVocabulary> =
    Lazy::new(|| SkillVocabulary::new(DEFAULT_SKILL_TOKENS.iter().copied()));

/// A fixed set of canonical skill tokens plus their pre-compiled word-boundary
/// patterns. Tokens are lowercased and trimmed at construction; regex
/// metacharacters in tokens are escaped.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    tokens: Vec<(String, Regex)>,
}

impl SkillVocabulary {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = BTreeSet::new();
        let mut compiled = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            if token.is_empty() || !seen.insert(token.clone()) {
                continue;
            }
            // Escaped tokens always compile; the pattern is the same
            // boundary-wrapped, case-insensitive form the portal has always
            // matched with.
            let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&token)))
                .expect("escaped skill token must compile");
            compiled.push((token, pattern));
        }
        Self { tokens: compiled }
    }

    /// The built-in portal vocabulary (~120 tokens).
    pub fn builtin() -> &'static SkillVocabulary {
        &DEFAULT_VOCABULARY
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        let token = token.trim().to_lowercase();
        self.tokens.iter().any(|(t, _)| *t == token)
    }

    pub(crate) fn patterns(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.tokens.iter().map(|(t, r)| (t.as_str(), r))
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}

/// Ordered mapping of branch codes to the free-text keyword variants that
/// identify them. Matching is plain substring search over lowercased text, and
/// entry order is the documented tie-break when several branches' keywords
/// appear in the same document.
#[derive(Debug, Clone)]
pub struct BranchKeywordTable {
    entries: Vec<(Branch, Vec<String>)>,
}

impl BranchKeywordTable {
    pub fn new(entries: Vec<(Branch, Vec<String>)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(branch, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|k| k.trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (branch, keywords)
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[(Branch, Vec<String>)] {
        &self.entries
    }

    /// First branch whose any keyword is a substring of `lower_text`, in table
    /// order. Returns the matched keyword alongside for diagnostics.
    pub fn first_match(&self, lower_text: &str) -> Option<(Branch, &str)> {
        for (branch, keywords) in &self.entries {
            for keyword in keywords {
                if lower_text.contains(keyword.as_str()) {
                    return Some((*branch, keyword));
                }
            }
        }
        None
    }

    /// All branches with at least one keyword present, in table order.
    pub fn all_matches(&self, lower_text: &str) -> Vec<Branch> {
        self.entries
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower_text.contains(k.as_str())))
            .map(|(branch, _)| *branch)
            .collect()
    }
}

impl Default for BranchKeywordTable {
    fn default() -> Self {
        let keywords = |branch: Branch| -> Vec<String> {
            let list: &[&str] = match branch {
                Branch::Cse => &[
                    "computer science", "cs", "cse", "computer engineering",
                    "computer", "computing",
                ],
                Branch::Ece => &[
                    "electronics", "ece", "electronics and communication",
                    "electronics & communication",
                ],
                Branch::Eee => &[
                    "electrical", "eee", "electrical engineering",
                    "electrical & electronics",
                ],
                Branch::Mech => &["mechanical", "mech", "mechanical engineering"],
                Branch::Civil => &["civil", "civil engineering"],
                Branch::It => &[
                    "information technology", "it", "information science",
                    "information systems",
                ],
            };
            list.iter().map(|s| s.to_string()).collect()
        };

        Self::new(Branch::iter().map(|b| (b, keywords(b))).collect())
    }
}
