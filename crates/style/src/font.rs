use serde::{de, Deserialize, Deserializer, Serialize};

/// The built-in PDF font families the renderer can draw with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// Sans-serif (Helvetica / Arial metrics).
    #[default]
    Helvetica,
    /// Serif (Times Roman).
    Times,
}

impl FontFamily {
    /// Parse a family name (e.g., "helvetica", "times", "serif")
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "helvetica" | "arial" | "sans-serif" | "sans" => Ok(FontFamily::Helvetica),
            "times" | "times-roman" | "times new roman" | "serif" => Ok(FontFamily::Times),
            _ => Err(format!("Unsupported font family: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn is_bold(self) -> bool {
        matches!(self, FontStyle::Bold | FontStyle::BoldItalic)
    }

    pub fn is_italic(self) -> bool {
        matches!(self, FontStyle::Italic | FontStyle::BoldItalic)
    }
}

/// A fully resolved font selection: family, style and size in points.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f32,
}

impl FontSpec {
    pub const fn new(family: FontFamily, style: FontStyle, size: f32) -> Self {
        Self { family, style, size }
    }

    pub const fn with_style(self, style: FontStyle) -> Self {
        Self { style, ..self }
    }

    pub const fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    /// The PostScript name of the matching standard Type1 font.
    pub fn postscript_name(&self) -> &'static str {
        match (self.family, self.style) {
            (FontFamily::Helvetica, FontStyle::Normal) => "Helvetica",
            (FontFamily::Helvetica, FontStyle::Bold) => "Helvetica-Bold",
            (FontFamily::Helvetica, FontStyle::Italic) => "Helvetica-Oblique",
            (FontFamily::Helvetica, FontStyle::BoldItalic) => "Helvetica-BoldOblique",
            (FontFamily::Times, FontStyle::Normal) => "Times-Roman",
            (FontFamily::Times, FontStyle::Bold) => "Times-Bold",
            (FontFamily::Times, FontStyle::Italic) => "Times-Italic",
            (FontFamily::Times, FontStyle::BoldItalic) => "Times-BoldItalic",
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(FontFamily::Helvetica, FontStyle::Normal, 10.0)
    }
}
