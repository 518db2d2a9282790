//! Accent palettes

use crate::color::{Hsl, Hsla};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Every palette carries this many background gradient stops per mode.
pub const GRADIENT_STOPS: usize = 5;

/// One accent theme, applied as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: Cow<'static, str>,
    pub primary: Hsl,
    pub accent: Hsl,
    pub ring: Hsl,
    pub bg_base_dark: Hsl,
    pub bg_base_light: Hsl,
    /// Layered in order, first stop on top.
    pub grads_dark: [Hsla; GRADIENT_STOPS],
    pub grads_light: [Hsla; GRADIENT_STOPS],
}

impl Palette {
    pub const EMERALD: Self = Self {
        name: Cow::Borrowed("Emerald"),
        primary: Hsl::new(158, 64, 52),
        accent: Hsl::new(170, 70, 40),
        ring: Hsl::new(158, 64, 52),
        bg_base_dark: Hsl::new(160, 15, 5),
        bg_base_light: Hsl::new(158, 20, 95),
        grads_dark: [
            Hsla::opaque(158, 40, 10),
            Hsla::opaque(170, 40, 15),
            Hsla::opaque(140, 40, 10),
            Hsla::opaque(160, 30, 15),
            Hsla::opaque(150, 30, 12),
        ],
        grads_light: [
            Hsla::opaque(158, 40, 90),
            Hsla::opaque(170, 40, 85),
            Hsla::opaque(140, 40, 90),
            Hsla::opaque(160, 30, 85),
            Hsla::opaque(150, 30, 88),
        ],
    };

    pub const ROYAL_BLUE: Self = Self {
        name: Cow::Borrowed("Royal Blue"),
        primary: Hsl::new(217, 91, 60),
        accent: Hsl::new(200, 90, 50),
        ring: Hsl::new(217, 91, 60),
        bg_base_dark: Hsl::new(222, 47, 5),
        bg_base_light: Hsl::new(217, 30, 96),
        grads_dark: [
            Hsla::opaque(217, 40, 10),
            Hsla::opaque(230, 40, 15),
            Hsla::opaque(200, 40, 10),
            Hsla::opaque(220, 30, 15),
            Hsla::opaque(210, 30, 12),
        ],
        grads_light: [
            Hsla::opaque(217, 40, 90),
            Hsla::opaque(230, 40, 88),
            Hsla::opaque(200, 40, 90),
            Hsla::opaque(220, 30, 88),
            Hsla::opaque(210, 30, 92),
        ],
    };

    pub const AMETHYST: Self = Self {
        name: Cow::Borrowed("Amethyst"),
        primary: Hsl::new(270, 50, 60),
        accent: Hsl::new(290, 60, 50),
        ring: Hsl::new(270, 50, 60),
        bg_base_dark: Hsl::new(270, 15, 5),
        bg_base_light: Hsl::new(270, 20, 96),
        grads_dark: [
            Hsla::opaque(270, 40, 10),
            Hsla::opaque(285, 40, 15),
            Hsla::opaque(255, 40, 10),
            Hsla::opaque(275, 30, 15),
            Hsla::opaque(265, 30, 12),
        ],
        grads_light: [
            Hsla::opaque(270, 40, 90),
            Hsla::opaque(285, 40, 88),
            Hsla::opaque(255, 40, 90),
            Hsla::opaque(275, 30, 88),
            Hsla::opaque(265, 30, 92),
        ],
    };

    pub const CRIMSON: Self = Self {
        name: Cow::Borrowed("Crimson"),
        primary: Hsl::new(340, 70, 60),
        accent: Hsl::new(360, 80, 60),
        ring: Hsl::new(340, 70, 60),
        bg_base_dark: Hsl::new(340, 15, 5),
        bg_base_light: Hsl::new(340, 20, 96),
        grads_dark: [
            Hsla::opaque(340, 40, 10),
            Hsla::opaque(355, 40, 15),
            Hsla::opaque(325, 40, 10),
            Hsla::opaque(345, 30, 15),
            Hsla::opaque(335, 30, 12),
        ],
        grads_light: [
            Hsla::opaque(340, 40, 90),
            Hsla::opaque(355, 40, 88),
            Hsla::opaque(325, 40, 90),
            Hsla::opaque(345, 30, 88),
            Hsla::opaque(335, 30, 92),
        ],
    };

    pub const AMBER: Self = Self {
        name: Cow::Borrowed("Amber"),
        primary: Hsl::new(45, 93, 47),
        accent: Hsl::new(25, 90, 50),
        ring: Hsl::new(45, 93, 47),
        bg_base_dark: Hsl::new(40, 15, 5),
        bg_base_light: Hsl::new(40, 20, 96),
        grads_dark: [
            Hsla::opaque(45, 40, 10),
            Hsla::opaque(60, 40, 15),
            Hsla::opaque(30, 40, 10),
            Hsla::opaque(50, 30, 15),
            Hsla::opaque(40, 30, 12),
        ],
        grads_light: [
            Hsla::opaque(45, 40, 90),
            Hsla::opaque(60, 40, 88),
            Hsla::opaque(30, 40, 90),
            Hsla::opaque(50, 30, 88),
            Hsla::opaque(40, 30, 92),
        ],
    };

    /// Built-in catalog order. Stored indices refer to this order.
    pub const BUILTIN: [Self; 5] = [
        Self::EMERALD,
        Self::ROYAL_BLUE,
        Self::AMETHYST,
        Self::CRIMSON,
        Self::AMBER,
    ];
}
