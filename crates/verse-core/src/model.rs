use serde::{Deserialize, Serialize};

/// A named poetic form. Unknown names are preserved as `Other`, never
/// rejected; every style has a displayable name that round-trips.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Style {
    Haiku,
    Sonnet,
    Limerick,
    Ode,
    Villanelle,
    Elegy,
    Ballad,
    Epigram,
    Acrostic,
    FreeVerse,
    Other(String),
}

impl Style {
    pub fn name(&self) -> &str {
        match self {
            Style::Haiku => "Haiku",
            Style::Sonnet => "Sonnet",
            Style::Limerick => "Limerick",
            Style::Ode => "Ode",
            Style::Villanelle => "Villanelle",
            Style::Elegy => "Elegy",
            Style::Ballad => "Ballad",
            Style::Epigram => "Epigram",
            Style::Acrostic => "Acrostic",
            Style::FreeVerse => "Free Verse",
            Style::Other(name) => name,
        }
    }
}

impl From<&str> for Style {
    fn from(s: &str) -> Self {
        match s {
            "Haiku" => Style::Haiku,
            "Sonnet" => Style::Sonnet,
            "Limerick" => Style::Limerick,
            "Ode" => Style::Ode,
            "Villanelle" => Style::Villanelle,
            "Elegy" => Style::Elegy,
            "Ballad" => Style::Ballad,
            "Epigram" => Style::Epigram,
            "Acrostic" => Style::Acrostic,
            "Free Verse" => Style::FreeVerse,
            other => Style::Other(other.to_string()),
        }
    }
}

impl From<String> for Style {
    fn from(s: String) -> Self {
        Style::from(s.as_str())
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.name().to_string()
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
