use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Framing of a generated blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlogCategory {
    #[serde(rename = "Educational/How-to Content")]
    EducationalHowTo,
    #[serde(rename = "Use Case Articles")]
    UseCase,
    #[serde(rename = "Problem-Solution Articles")]
    ProblemSolution,
    #[serde(rename = "Best Practices and Tips")]
    BestPractices,
    #[serde(rename = "Case Studies and Success Stories")]
    CaseStudies,
}

impl BlogCategory {
    pub const ALL: [BlogCategory; 5] = [
        Self::EducationalHowTo,
        Self::UseCase,
        Self::ProblemSolution,
        Self::BestPractices,
        Self::CaseStudies,
    ];

    /// Label shown to the user and embedded verbatim in prompts
    pub fn label(&self) -> &'static str {
        match self {
            Self::EducationalHowTo => "Educational/How-to Content",
            Self::UseCase => "Use Case Articles",
            Self::ProblemSolution => "Problem-Solution Articles",
            Self::BestPractices => "Best Practices and Tips",
            Self::CaseStudies => "Case Studies and Success Stories",
        }
    }
}

impl fmt::Display for BlogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown blog category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for BlogCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Kind of artifact a request produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    #[default]
    Blog,
    Keywords,
    SocialPost,
}

impl GenerationMode {
    /// Only blog generation is framed by a category
    pub fn requires_category(&self) -> bool {
        matches!(self, Self::Blog)
    }
}
