//! Random palette selection that never repeats the previous pick.

use super::catalog::Catalog;
use super::palette::Palette;
use rand::Rng;

/// Draws an index in `0..len`, uniform over every index except `last`.
///
/// `last` outside `0..len` excludes nothing. With a single entry the
/// answer is always 0. `len` must be non-zero.
pub fn pick_index<R: Rng + ?Sized>(len: usize, last: Option<usize>, rng: &mut R) -> usize {
    debug_assert!(len > 0, "cannot pick from an empty catalog");
    if len <= 1 {
        return 0;
    }

    match last.filter(|&l| l < len) {
        Some(excluded) => {
            // Sample from the len - 1 survivors, then skip over the excluded slot.
            let i = rng.random_range(0..len - 1);
            if i >= excluded { i + 1 } else { i }
        }
        None => rng.random_range(0..len),
    }
}

pub fn select<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    last: Option<usize>,
    rng: &mut R,
) -> (usize, &'a Palette) {
    let index = pick_index(catalog.len(), last, rng);
    (index, &catalog[index])
}
