//! What a source hands to the text-drawing collaborator each render.

use match_counter_types::TextStyle;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
        }
    }
}

/// Settings for the text collaborator, derived from a [`TextStyle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSourceSettings {
    pub font_face: String,
    pub font_size: u16,
    pub font_flags: u32,
    pub color: u32,
    pub outline: bool,
    pub outline_color: u32,
    pub outline_size: u32,
    pub align: TextAlign,
    /// Fixed `(width, height)` box, only set for a custom width
    pub extents: Option<(u32, u32)>,
}

impl From<&TextStyle> for TextSourceSettings {
    fn from(style: &TextStyle) -> Self {
        let font_size = style.effective_font_size();
        let extents = (style.custom_width > 0)
            .then(|| (style.custom_width, u32::from(font_size) * 2));

        Self {
            font_face: style.effective_font_face().to_string(),
            font_size,
            font_flags: style.font_flags,
            color: style.color,
            outline: style.outline,
            outline_color: style.outline_color,
            outline_size: style.outline_size,
            align: if style.align_center {
                TextAlign::Center
            } else {
                TextAlign::Left
            },
            extents,
        }
    }
}

/// Rendered counter text plus its drawing settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub text: String,
    pub settings: TextSourceSettings,
}
