use verse_core::Poem;

pub trait Storage: Send + Sync {
    /// Load the saved poem list, most recent first. Missing state loads as
    /// an empty list, not an error.
    fn load(&self) -> anyhow::Result<Vec<Poem>>;

    /// Replace the saved poem list wholesale.
    fn save(&self, poems: &[Poem]) -> anyhow::Result<()>;
}
