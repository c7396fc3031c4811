//! Font descriptions for the standard Helvetica family.
//!
//! Font resolution is left to the renderer; the engine only asks for a size,
//! a weight and a slant.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Default for Font {
    fn default() -> Self {
        Self::regular(Self::DEFAULT_SIZE)
    }
}

impl Font {
    pub const DEFAULT_SIZE: f32 = 12.0;

    /// Every face a renderer has to register, in a stable order.
    pub const FACES: [(FontWeight, FontStyle); 4] = [
        (FontWeight::Regular, FontStyle::Normal),
        (FontWeight::Bold, FontStyle::Normal),
        (FontWeight::Regular, FontStyle::Italic),
        (FontWeight::Bold, FontStyle::Italic),
    ];

    pub const fn regular(size: f32) -> Self {
        Self { size, weight: FontWeight::Regular, style: FontStyle::Normal }
    }

    pub const fn bold(size: f32) -> Self {
        Self { size, weight: FontWeight::Bold, style: FontStyle::Normal }
    }

    pub const fn bold_italic(size: f32) -> Self {
        Self { size, weight: FontWeight::Bold, style: FontStyle::Italic }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    /// Index of this font's face within [`Font::FACES`].
    pub fn face_index(&self) -> usize {
        Self::FACES
            .iter()
            .position(|(w, s)| *w == self.weight && *s == self.style)
            .unwrap_or(0)
    }

    /// PostScript name of the standard Type1 face.
    pub fn base_font_name(&self) -> &'static str {
        base_font_name(self.weight, self.style)
    }
}

/// Get the standard 14 PostScript name for a Helvetica face.
pub fn base_font_name(weight: FontWeight, style: FontStyle) -> &'static str {
    match (weight, style) {
        (FontWeight::Regular, FontStyle::Normal) => "Helvetica",
        (FontWeight::Bold, FontStyle::Normal) => "Helvetica-Bold",
        (FontWeight::Regular, FontStyle::Italic) => "Helvetica-Oblique",
        (FontWeight::Bold, FontStyle::Italic) => "Helvetica-BoldOblique",
    }
}
