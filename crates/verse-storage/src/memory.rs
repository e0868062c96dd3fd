use std::sync::Mutex;

use verse_core::Poem;

use crate::traits::Storage;

/// In-memory storage for tests. Not durable, but good for unit tests and
/// exercising the save flow without a filesystem.
#[derive(Default)]
pub struct InMemoryStorage {
    inner: Mutex<Vec<Poem>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn load(&self) -> anyhow::Result<Vec<Poem>> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, poems: &[Poem]) -> anyhow::Result<()> {
        *self.inner.lock().unwrap() = poems.to_vec();
        Ok(())
    }
}
