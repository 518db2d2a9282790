use super::palette::Palette;
use anyhow::{bail, ensure};
use std::collections::HashSet;
use std::ops::Index;

/// Ordered palette list. Never empty, names unique.
#[derive(Debug, Clone)]
pub struct Catalog {
    palettes: Vec<Palette>,
}

impl Catalog {
    pub fn new(palettes: Vec<Palette>) -> anyhow::Result<Self> {
        ensure!(!palettes.is_empty(), "palette catalog is empty");

        let mut seen = HashSet::new();
        for p in &palettes {
            if !seen.insert(p.name.to_lowercase()) {
                bail!("duplicate palette name {:?}", p.name);
            }
        }

        Ok(Self { palettes })
    }

    pub fn builtin() -> Self {
        Self {
            palettes: Palette::BUILTIN.to_vec(),
        }
    }

    /// Configured palettes, or the built-in set when none are configured.
    pub fn from_config(palettes: &[Palette]) -> anyhow::Result<Self> {
        if palettes.is_empty() {
            Ok(Self::builtin())
        } else {
            Self::new(palettes.to_vec())
        }
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.iter()
    }

    /// Case-insensitive lookup by name.
    pub fn find(&self, name: &str) -> Option<(usize, &Palette)> {
        self.palettes
            .iter()
            .enumerate()
            .find(|(_, p)| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

impl Index<usize> for Catalog {
    type Output = Palette;

    fn index(&self, index: usize) -> &Palette {
        &self.palettes[index]
    }
}
