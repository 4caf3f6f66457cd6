use std::collections::HashSet;
use std::path::Path;

use regex::{Match, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const SKILLS: &[&str] = &[
    // Programming
    "Python", "Java", "C", "C++", "C#", "Go", "Rust", "JavaScript", "TypeScript", "SQL", "R",
    "Scala", "MATLAB", "Bash", "Shell",
    // ML/AI
    "Machine Learning", "Deep Learning", "NLP", "Computer Vision", "CNN", "RNN", "Transformers",
    "PyTorch", "TensorFlow", "Keras", "scikit-learn", "spaCy", "XGBoost", "LightGBM",
    // Data
    "Pandas", "NumPy", "Matplotlib", "Seaborn", "Plotly", "Spark", "Hadoop", "Hive", "Pig",
    "Airflow", "Kafka", "dbt",
    // Web, cloud, devops
    "Django", "Flask", "FastAPI", "Streamlit", "React", "Node.js", "AWS", "GCP", "Azure",
    "Docker", "Kubernetes", "Terraform", "CI/CD", "Git",
    // Databases
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "Elasticsearch", "Neo4j",
    // Tools
    "Tableau", "Power BI", "Excel", "Figma", "JIRA", "Confluence", "Agile", "Scrum",
];

pub const EDUCATION_KEYWORDS: &[&str] = &[
    "B.Tech", "B.E", "B.Sc", "BCA", "BBA", "B.Com", "M.Tech", "M.E", "M.Sc", "MCA", "MBA",
    "PhD", "Doctorate", "Bachelor", "Master", "Diploma", "Intermediate", "PUC", "HSC", "CBSE",
    "ICSE",
];

pub const TITLE_HINTS: &[&str] = &[
    "Engineer", "Developer", "Analyst", "Scientist", "Consultant", "Manager", "Intern",
    "Specialist", "Architect",
];

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive literal occurrences of a term that are not glued to a
/// word character on either side. Boundaries are checked at the phrase's
/// start and end only, so internal spaces of multi-word terms are literal.
pub struct BoundedMatches<'r, 't> {
    regex: &'r Regex,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for BoundedMatches<'_, 't> {
    type Item = Match<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos <= self.text.len() {
            let m = self.regex.find_at(self.text, self.pos)?;

            let before = self.text[..m.start()].chars().next_back();
            let after = self.text[m.end()..].chars().next();
            let bounded = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);

            if bounded {
                self.pos = m.end();
                return Some(m);
            }

            // retry one character past the rejected start
            let step = self.text[m.start()..].chars().next().map_or(1, char::len_utf8);
            self.pos = m.start() + step;
        }
        None
    }
}

#[derive(Debug, Clone)]
pub struct Term {
    canonical: String,
    regex: Regex,
}

impl Term {
    pub fn new(canonical: &str) -> Result<Self> {
        let canonical = canonical.trim();
        if canonical.is_empty() {
            return Err(Error::InvalidTerm(canonical.to_string()));
        }

        let regex = RegexBuilder::new(&regex::escape(canonical))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            canonical: canonical.to_string(),
            regex,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    pub fn occurrences<'r, 't>(&'r self, text: &'t str) -> BoundedMatches<'r, 't> {
        BoundedMatches {
            regex: &self.regex,
            text,
            pos: 0,
        }
    }

    #[must_use]
    pub fn appears_in(&self, text: &str) -> bool {
        self.occurrences(text).next().is_some()
    }
}

/// An ordered set of terms, deduplicated case-insensitively with the first
/// spelling kept as canonical.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<Term>,
}

impl Vocabulary {
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        vocabulary.extend(terms)?;
        Ok(vocabulary)
    }

    pub fn extend<I, S>(&mut self, terms: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = self
            .terms
            .iter()
            .map(|t| t.canonical.to_lowercase())
            .collect();

        for term in terms {
            let term = Term::new(term.as_ref())?;
            if seen.insert(term.canonical.to_lowercase()) {
                self.terms.push(term);
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(Term::as_str)
    }

    #[must_use]
    pub fn contains(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        self.terms.iter().any(|t| t.canonical.to_lowercase() == needle)
    }

    /// Canonical entries that appear at least once in `text`, sorted.
    #[must_use]
    pub fn matches_in(&self, text: &str) -> Vec<String> {
        let mut found: Vec<String> = self
            .terms
            .iter()
            .filter(|t| t.appears_in(text))
            .map(|t| t.canonical.clone())
            .collect();
        found.sort();
        found
    }
}

/// Overrides for the built-in vocabularies, read from JSON.
///
/// Lists that are present replace the built-in list, or are appended to it
/// when `extend` is set. Absent lists keep the built-in entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub extend: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<Vec<String>>,
}

/// The static vocabularies shared by every extraction call.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub skills: Vocabulary,
    pub education: Vocabulary,
    pub titles: Vocabulary,
}

impl Lexicon {
    pub fn new(skills: Vocabulary, education: Vocabulary, titles: Vocabulary) -> Self {
        Self {
            skills,
            education,
            titles,
        }
    }

    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            Vocabulary::new(SKILLS)?,
            Vocabulary::new(EDUCATION_KEYWORDS)?,
            Vocabulary::new(TITLE_HINTS)?,
        ))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::from_overrides(file)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let lexicon = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            skills = lexicon.skills.len(),
            education = lexicon.education.len(),
            titles = lexicon.titles.len(),
            "Loaded lexicon"
        );
        Ok(lexicon)
    }

    pub fn from_overrides(file: LexiconFile) -> Result<Self> {
        let mut lexicon = Self::builtin()?;
        let extend = file.extend;

        let apply = |vocab: &mut Vocabulary, list: Option<Vec<String>>| -> Result<()> {
            match list {
                Some(terms) if extend => vocab.extend(terms),
                Some(terms) => {
                    *vocab = Vocabulary::new(terms)?;
                    Ok(())
                }
                None => Ok(()),
            }
        };

        apply(&mut lexicon.skills, file.skills)?;
        apply(&mut lexicon.education, file.education)?;
        apply(&mut lexicon.titles, file.titles)?;

        Ok(lexicon)
    }
}
