use crate::storage::{KeyValueStore, LastChoice};
use crate::style::{self, StyleSurface};
use crate::theme::{Catalog, selector};
use rand::Rng;
use tracing::{info, warn};

/// What a single run ended up applying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub index: usize,
    pub name: String,
    pub previous: Option<usize>,
}

/// Picks a palette that differs from last time, remembers it, and applies it.
pub struct ThemeController<'a> {
    catalog: &'a Catalog,
    storage_key: &'a str,
}

impl<'a> ThemeController<'a> {
    pub fn new(catalog: &'a Catalog, storage_key: &'a str) -> Self {
        Self {
            catalog,
            storage_key,
        }
    }

    /// Runs once per load. Storage failures never stop the palette from
    /// being applied.
    pub fn run<K, S, R>(&self, store: &mut K, surface: &mut S, rng: &mut R) -> Applied
    where
        K: KeyValueStore + ?Sized,
        S: StyleSurface + ?Sized,
        R: Rng + ?Sized,
    {
        let mut last = LastChoice::new(store, self.storage_key);
        let previous = last.load(self.catalog.len());

        let (index, palette) = selector::select(self.catalog, previous, rng);

        if let Err(err) = last.save(index) {
            warn!("{err:#}");
        }

        style::apply(palette, surface);
        info!("Theme applied: {}", palette.name);

        Applied {
            index,
            name: palette.name.to_string(),
            previous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::storage::last_choice::DEFAULT_KEY;
    use crate::style::{RootStyle, vars};
    use crate::theme::Palette;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("storage disabled")
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("quota exceeded")
        }

        fn remove(&mut self, _key: &str) -> anyhow::Result<()> {
            anyhow::bail!("storage disabled")
        }
    }

    fn three() -> Catalog {
        Catalog::new(vec![
            Palette::EMERALD,
            Palette::ROYAL_BLUE,
            Palette::AMETHYST,
        ])
        .unwrap()
    }

    #[test]
    fn test_excludes_stored_previous() {
        let catalog = three();
        let controller = ThemeController::new(&catalog, DEFAULT_KEY);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..100 {
            let mut store = MemoryStore::new();
            store.set(DEFAULT_KEY, "1").unwrap();
            let mut style = RootStyle::default();

            let applied = controller.run(&mut store, &mut style, &mut rng);

            assert!(applied.index == 0 || applied.index == 2);
            assert_eq!(applied.previous, Some(1));
            assert_eq!(
                style.get(vars::PRIMARY),
                Some(catalog[applied.index].primary.channels().as_str())
            );
            assert_eq!(
                store.get(DEFAULT_KEY).unwrap(),
                Some(applied.index.to_string())
            );
        }
    }

    #[test]
    fn test_first_load_persists_choice() {
        let catalog = Catalog::builtin();
        let controller = ThemeController::new(&catalog, DEFAULT_KEY);
        let mut store = MemoryStore::new();
        let mut style = RootStyle::default();
        let mut rng = StdRng::seed_from_u64(5);

        let applied = controller.run(&mut store, &mut style, &mut rng);

        assert!(applied.index < 5);
        assert_eq!(applied.previous, None);
        assert_eq!(applied.name, catalog[applied.index].name);
        assert_eq!(
            store.get(DEFAULT_KEY).unwrap(),
            Some(applied.index.to_string())
        );
    }

    #[test]
    fn test_consecutive_loads_never_repeat() {
        let catalog = Catalog::builtin();
        let controller = ThemeController::new(&catalog, DEFAULT_KEY);
        let mut store = MemoryStore::new();
        let mut rng = StdRng::seed_from_u64(9);

        let mut prev = None;
        for _ in 0..200 {
            let mut style = RootStyle::default();
            let applied = controller.run(&mut store, &mut style, &mut rng);
            assert_eq!(applied.previous, prev);
            assert_ne!(Some(applied.index), prev);
            prev = Some(applied.index);
        }
    }

    #[test]
    fn test_malformed_previous_is_ignored() {
        let catalog = three();
        let controller = ThemeController::new(&catalog, DEFAULT_KEY);
        let mut store = MemoryStore::new();
        store.set(DEFAULT_KEY, "banana").unwrap();
        let mut style = RootStyle::default();
        let mut rng = StdRng::seed_from_u64(2);

        let applied = controller.run(&mut store, &mut style, &mut rng);
        assert_eq!(applied.previous, None);
        assert_eq!(
            store.get(DEFAULT_KEY).unwrap(),
            Some(applied.index.to_string())
        );
    }

    #[test]
    fn test_broken_storage_still_applies() {
        let catalog = Catalog::builtin();
        let controller = ThemeController::new(&catalog, DEFAULT_KEY);
        let mut style = RootStyle::default();
        let mut rng = StdRng::seed_from_u64(4);

        let applied = controller.run(&mut BrokenStore, &mut style, &mut rng);

        assert_eq!(applied.previous, None);
        assert_eq!(
            style.get(vars::RING),
            Some(catalog[applied.index].ring.channels().as_str())
        );
    }
}
