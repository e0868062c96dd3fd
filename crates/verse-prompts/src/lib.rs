use rand::seq::IndexedRandom;
use verse_core::Style;

/// Writing prompts offered by the prompt generator.
pub const PROMPTS: [&str; 22] = [
    "Choose one of your five senses and write a poem that focuses on it.",
    "Write a poem inspired by a color.",
    "Write about something that happened to you this week.",
    "Write a poem inspired by your favorite song.",
    "Write about a lesson you recently learned.",
    "Write a poem about a significant person in your life.",
    "Write advice you would give to your younger self.",
    "Describe your experience of traveling somewhere.",
    "Recall a favorite holiday memory.",
    "Create a gallery of your heart in a poem.",
    "Describe a strange dream you've had.",
    "Write about a time your illusions were shattered.",
    "Write about a favorite childhood memory.",
    "Imagine yourself as a home under renovation.",
    "Write a haiku about nature.",
    "Observe another time period in a poem.",
    "Write from your pet's perspective.",
    "Imagine switching places with someone for a day.",
    "Write about body positivity.",
    "Freeze a special moment in time through poetry.",
    "Describe an inner dialogue during a run.",
    "Write about yourself as both hero and villain.",
];

/// Styles offered by the prompt generator.
pub const STYLES: [Style; 10] = [
    Style::Haiku,
    Style::Sonnet,
    Style::Limerick,
    Style::FreeVerse,
    Style::Ode,
    Style::Villanelle,
    Style::Elegy,
    Style::Ballad,
    Style::Epigram,
    Style::Acrostic,
];

/// Pick one element with the process-wide RNG. No determinism promised.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::rng())
}

pub fn random_prompt() -> &'static str {
    pick(&PROMPTS).copied().unwrap_or(PROMPTS[0])
}

pub fn random_style() -> Style {
    pick(&STYLES).cloned().unwrap_or(Style::FreeVerse)
}
