use verse_core::{Style, Verdict};

use crate::lines::non_blank_lines;

const HAIKU_SYLLABLES: [usize; 3] = [5, 7, 5];

/// Check a poem's structure against a style. Total: every style and every
/// text produce a verdict, never an error. Styles outside the named set
/// (and Free Verse) have no strict rules and always pass.
pub fn validate(style: &Style, text: &str) -> Verdict {
    let lines = non_blank_lines(text);

    match style {
        Style::Haiku => {
            // Line count is checked first and short-circuits; syllables are
            // only consulted for exactly-3-line poems.
            if lines.len() != 3 {
                return Verdict::fail("A haiku should have exactly three lines.");
            }
            let counts: Vec<usize> = lines.iter().map(|line| verse_syllable::estimate(line)).collect();
            if counts != HAIKU_SYLLABLES {
                return Verdict::fail("Haiku lines should have 5, 7, and 5 syllables respectively.");
            }
            Verdict::pass("This poem structure looks like a Haiku!")
        }
        Style::Sonnet => exactly(
            lines.len(),
            14,
            "A sonnet should have exactly 14 lines.",
            "This poem has the correct number of lines for a Sonnet.",
        ),
        Style::Limerick => exactly(
            lines.len(),
            5,
            "A limerick should have exactly 5 lines.",
            "This poem has the correct number of lines for a Limerick.",
        ),
        Style::Ode => at_least(
            lines.len(),
            3,
            "An ode should have at least 3 lines.",
            "This poem has the correct structure for an Ode.",
        ),
        Style::Villanelle => exactly(
            lines.len(),
            19,
            "A villanelle should have exactly 19 lines.",
            "This poem has the correct structure for a Villanelle.",
        ),
        Style::Elegy => at_least(
            lines.len(),
            3,
            "An elegy should have at least 3 lines.",
            "This poem has the correct structure for an Elegy.",
        ),
        Style::Ballad => at_least(
            lines.len(),
            4,
            "A ballad should have at least 4 lines.",
            "This poem has the correct structure for a Ballad.",
        ),
        Style::Epigram => {
            if lines.len() != 2 && lines.len() != 4 {
                return Verdict::fail("An epigram should have either 2 or 4 lines.");
            }
            Verdict::pass("This poem has the correct structure for an Epigram.")
        }
        Style::Acrostic => at_least(
            lines.len(),
            1,
            "An acrostic should have at least 1 line.",
            "This poem has the correct structure for an Acrostic.",
        ),
        Style::FreeVerse | Style::Other(_) => {
            Verdict::pass(format!("\"{}\" has no strict rules, write freely!", style.name()))
        }
    }
}

fn exactly(got: usize, want: usize, fail: &str, ok: &str) -> Verdict {
    if got != want {
        Verdict::fail(fail)
    } else {
        Verdict::pass(ok)
    }
}

fn at_least(got: usize, min: usize, fail: &str, ok: &str) -> Verdict {
    if got < min {
        Verdict::fail(fail)
    } else {
        Verdict::pass(ok)
    }
}
