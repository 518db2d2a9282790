//! Global style variables.
//!
//! The stylesheet reads accent colours only through the custom properties
//! named in [`vars`]; [`apply`] writes every one of them for a palette.

use crate::theme::{GRADIENT_STOPS, Palette};
use std::fmt::Write as _;

pub mod vars {
    pub const PRIMARY: &str = "--primary";
    pub const ACCENT: &str = "--accent";
    pub const RING: &str = "--ring";
    pub const BG_BASE_DARK: &str = "--palette-bg-base-dark";
    pub const BG_BASE_LIGHT: &str = "--palette-bg-base-light";

    /// `stop` is zero-based; names are one-based.
    pub fn grad_dark(stop: usize) -> String {
        format!("--palette-bg-grad-dark-{}", stop + 1)
    }

    pub fn grad_light(stop: usize) -> String {
        format!("--palette-bg-grad-light-{}", stop + 1)
    }
}

/// Somewhere global style variables can be written.
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);
}

/// Custom properties for one CSS rule, kept in first-write order.
#[derive(Debug, Clone)]
pub struct RootStyle {
    selector: String,
    props: Vec<(String, String)>,
}

impl RootStyle {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            props: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn to_css(&self) -> String {
        let mut out = format!("{} {{\n", self.selector);
        for (name, value) in &self.props {
            let _ = writeln!(out, "  {name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}

impl Default for RootStyle {
    fn default() -> Self {
        Self::new(":root")
    }
}

impl StyleSurface for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        match self.props.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.props.push((name.to_string(), value.to_string())),
        }
    }
}

/// Every variable [`apply`] writes, in write order.
pub fn variable_names() -> Vec<String> {
    let mut names: Vec<String> = [
        vars::PRIMARY,
        vars::ACCENT,
        vars::RING,
        vars::BG_BASE_DARK,
        vars::BG_BASE_LIGHT,
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    names.extend((0..GRADIENT_STOPS).map(vars::grad_dark));
    names.extend((0..GRADIENT_STOPS).map(vars::grad_light));
    names
}

pub fn apply<S: StyleSurface + ?Sized>(palette: &Palette, surface: &mut S) {
    surface.set_property(vars::PRIMARY, &palette.primary.channels());
    surface.set_property(vars::ACCENT, &palette.accent.channels());
    surface.set_property(vars::RING, &palette.ring.channels());

    surface.set_property(vars::BG_BASE_DARK, &palette.bg_base_dark.css());
    surface.set_property(vars::BG_BASE_LIGHT, &palette.bg_base_light.css());

    for (i, grad) in palette.grads_dark.iter().enumerate() {
        surface.set_property(&vars::grad_dark(i), &grad.css());
    }
    for (i, grad) in palette.grads_light.iter().enumerate() {
        surface.set_property(&vars::grad_light(i), &grad.css());
    }
}
