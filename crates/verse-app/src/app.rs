use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use chrono::Utc;
use verse_core::{Poem, Style, Verdict};
use verse_storage::Storage;
use verse_storage_json::JsonFileStorage;

use crate::Config;

/// Application service: wires config and storage around the pure core.
/// The validator and scorer themselves stay stateless; the app only adds
/// the save flow and the saved-poem list.
pub struct App {
    storage: Box<dyn Storage>,
}

impl App {
    /// Open against the configured data directory, writing the default
    /// config on first run. An explicit `data_dir` bypasses the config.
    pub fn open(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir,
            None => {
                let default_dir = Config::default_config().data_dir();
                let cfg_path = Config::config_path(&default_dir);
                let cfg = if cfg_path.exists() {
                    Config::load_from(&cfg_path)?
                } else {
                    let cfg = Config::default_config();
                    cfg.save_to(&cfg_path)?;
                    cfg
                };
                cfg.data_dir()
            }
        };
        Ok(Self::with_storage(Box::new(JsonFileStorage::new(Config::poems_path(&dir)))))
    }

    pub fn with_storage(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Draw a random prompt and style pair.
    pub fn draw_prompt(&self) -> (String, Style) {
        (verse_prompts::random_prompt().to_string(), verse_prompts::random_style())
    }

    pub fn validate(&self, style: &Style, text: &str) -> Verdict {
        verse_forms::validate(style, text)
    }

    pub fn score(&self, text: &str) -> u8 {
        verse_doom::score(text)
    }

    /// Score and persist a poem, prepending it to the saved list. The save
    /// is blocked when the style's structural check fails; styles with no
    /// strict rules always pass.
    pub fn save_poem(&self, text: &str, style: Style, prompt: &str) -> Result<Poem> {
        if text.trim().is_empty() {
            bail!("Your poem is empty! Write something to save.");
        }
        let verdict = verse_forms::validate(&style, text);
        if !verdict.valid {
            bail!("{}", verdict.message);
        }
        let poem = Poem {
            text: text.to_string(),
            style,
            prompt: prompt.to_string(),
            doom: verse_doom::score(text),
            date: Utc::now(),
        };
        let mut poems = self.storage.load()?;
        poems.insert(0, poem.clone());
        self.storage.save(&poems)?;
        Ok(poem)
    }

    /// Saved poems, most recent first.
    pub fn poems(&self) -> Result<Vec<Poem>> {
        self.storage.load()
    }

    /// Share token for the saved poem at `index` (0 = most recent).
    pub fn share(&self, index: usize) -> Result<String> {
        let poems = self.storage.load()?;
        let poem = poems
            .get(index)
            .ok_or_else(|| anyhow!("no saved poem at index {} ({} saved)", index, poems.len()))?;
        Ok(verse_share::encode(poem))
    }

    /// Import a shared poem. The doom score travels inside the token and is
    /// kept as-is, so sender and receiver see the same record.
    pub fn import(&self, token: &str) -> Result<Poem> {
        let poem = verse_share::decode(token)?;
        let mut poems = self.storage.load()?;
        poems.insert(0, poem.clone());
        self.storage.save(&poems)?;
        Ok(poem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verse_storage::InMemoryStorage;

    fn app() -> App {
        App::with_storage(Box::new(InMemoryStorage::new()))
    }

    #[test]
    fn save_rejects_blank_text() {
        let app = app();
        let err = app.save_poem("   \n  ", Style::FreeVerse, "").unwrap_err();
        assert_eq!(err.to_string(), "Your poem is empty! Write something to save.");
        assert!(app.poems().unwrap().is_empty());
    }

    #[test]
    fn save_scores_and_prepends() {
        let app = app();
        app.save_poem("cat dog sun", Style::FreeVerse, "p1").unwrap();
        let saved = app.save_poem("night night night", Style::FreeVerse, "p2").unwrap();
        assert_eq!(saved.doom, 100);

        let poems = app.poems().unwrap();
        assert_eq!(poems.len(), 2);
        assert_eq!(poems[0].text, "night night night");
        assert_eq!(poems[0].doom, 100);
        assert_eq!(poems[1].text, "cat dog sun");
        assert_eq!(poems[1].doom, 0);
    }

    #[test]
    fn duplicate_saves_are_permitted() {
        let app = app();
        app.save_poem("same words", Style::FreeVerse, "p").unwrap();
        app.save_poem("same words", Style::FreeVerse, "p").unwrap();
        assert_eq!(app.poems().unwrap().len(), 2);
    }

    #[test]
    fn save_blocks_on_failed_validation() {
        let app = app();
        let err = app.save_poem("one\ntwo", Style::Ode, "p").unwrap_err();
        assert_eq!(err.to_string(), "An ode should have at least 3 lines.");
        assert!(app.poems().unwrap().is_empty());
    }

    #[test]
    fn share_then_import_round_trips() {
        let app = app();
        let saved = app
            .save_poem("doom and gloom\nin every room\nunder a waning moon", Style::Ode, "a prompt")
            .unwrap();
        let token = app.share(0).unwrap();

        let other = App::with_storage(Box::new(InMemoryStorage::new()));
        let imported = other.import(&token).unwrap();
        assert_eq!(imported.text, saved.text);
        assert_eq!(imported.style, saved.style);
        assert_eq!(imported.doom, saved.doom);
        assert_eq!(other.poems().unwrap().len(), 1);
    }

    #[test]
    fn share_out_of_range_is_an_error() {
        let app = app();
        assert!(app.share(0).is_err());
    }

    #[test]
    fn import_rejects_garbage_tokens() {
        let app = app();
        assert!(app.import("???").is_err());
        assert!(app.poems().unwrap().is_empty());
    }

    #[test]
    fn draw_prompt_uses_the_shipped_pools() {
        let app = app();
        for _ in 0..20 {
            let (prompt, style) = app.draw_prompt();
            assert!(verse_prompts::PROMPTS.contains(&prompt.as_str()));
            assert!(verse_prompts::STYLES.contains(&style));
        }
    }

    #[test]
    fn validate_and_score_pass_through() {
        let app = app();
        assert!(app.validate(&Style::Epigram, "one\ntwo").valid);
        assert_eq!(app.score("night night night"), 100);
    }
}
