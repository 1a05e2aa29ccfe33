use super::color::Color;

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
    Heavy,
}

/// Font family class; concrete typeface selection belongs to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFamily {
    #[default]
    Default,
    Monospace,
}

/// A renderer-agnostic font description
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDesc {
    pub size: f32,
    pub weight: FontWeight,
    pub family: FontFamily,
    pub italic: bool,
}

impl FontDesc {
    pub fn system(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            family: FontFamily::Default,
            italic: false,
        }
    }

    pub fn monospace(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            family: FontFamily::Monospace,
            italic: false,
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

impl Default for FontDesc {
    fn default() -> Self {
        Self::system(30.0, FontWeight::Regular)
    }
}

/// A foreground style: color plus font
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Foreground {
    pub color: Color,
    pub font: FontDesc,
}

impl Foreground {
    pub fn new(color: Color, font: FontDesc) -> Self {
        Self { color, font }
    }
}
