use super::KeyValueStore;
use anyhow::Context;
use tracing::debug;

/// Key the previous palette index lives under.
pub const DEFAULT_KEY: &str = "lastThemeIndex";

/// The one remembered fact: which catalog index was applied last time.
pub struct LastChoice<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
    key: &'a str,
}

impl<'a, S: KeyValueStore + ?Sized> LastChoice<'a, S> {
    pub fn new(store: &'a mut S, key: &'a str) -> Self {
        Self { store, key }
    }

    /// Previous index, if one is stored and fits a catalog of `len`.
    ///
    /// Unreadable, malformed and out-of-range values all count as absent.
    pub fn load(&self, len: usize) -> Option<usize> {
        let raw = match self.store.get(self.key) {
            Ok(raw) => raw?,
            Err(err) => {
                debug!("ignoring unreadable {}: {err:#}", self.key);
                return None;
            }
        };
        let index = parse_index(&raw, len);
        if index.is_none() {
            debug!("ignoring stored {} = {raw:?}", self.key);
        }
        index
    }

    pub fn save(&mut self, index: usize) -> anyhow::Result<()> {
        self.store
            .set(self.key, &index.to_string())
            .context("persist last palette index")
    }

    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.store.remove(self.key).context("clear last palette index")
    }
}

/// Strict decimal parse; anything else is treated as no previous choice.
pub fn parse_index(raw: &str, len: usize) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<usize>().ok().filter(|&i| i < len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("0", 5), Some(0));
        assert_eq!(parse_index(" 4\n", 5), Some(4));
        assert_eq!(parse_index("5", 5), None);
        assert_eq!(parse_index("-1", 5), None);
        assert_eq!(parse_index("+1", 5), None);
        assert_eq!(parse_index("2abc", 5), None);
        assert_eq!(parse_index("NaN", 5), None);
        assert_eq!(parse_index("", 5), None);
        assert_eq!(parse_index("99999999999999999999999", 5), None);
    }

    #[test]
    fn test_load_save_clear() {
        let mut store = MemoryStore::new();
        let mut last = LastChoice::new(&mut store, DEFAULT_KEY);
        assert_eq!(last.load(5), None);

        last.save(3).unwrap();
        assert_eq!(last.load(5), Some(3));
        // Catalog shrank since the value was written.
        assert_eq!(last.load(3), None);

        last.clear().unwrap();
        assert_eq!(last.load(5), None);
        drop(last);
        assert_eq!(store.get(DEFAULT_KEY).unwrap(), None);
    }

    #[test]
    fn test_value_is_decimal_string() {
        let mut store = MemoryStore::new();
        LastChoice::new(&mut store, "k").save(12).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("12"));
    }
}
