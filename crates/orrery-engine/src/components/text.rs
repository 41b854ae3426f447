/// Font face requested from the host. The host maps the family name to
/// whatever it has available.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// A run of text drawn with its baseline-left corner at the entity position.
#[derive(Debug, Clone, PartialEq)]
pub struct TextComponent {
    pub text: String,
    pub font: FontSpec,
    /// RGBA, 0.0 - 1.0.
    pub color: [f32; 4],
}

impl TextComponent {
    pub fn new(text: impl Into<String>, font: FontSpec) -> Self {
        Self {
            text: text.into(),
            font,
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// Replace the text. Returns `true` when it actually changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text.clear();
        self.text.push_str(text);
        true
    }
}
