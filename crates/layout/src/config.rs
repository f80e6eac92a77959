use quire_types::Color;
use quire_types::document::DEFAULT_CURRENCY;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Currency used when a document does not name one.
    ///
    /// Defaults to `"USD"`.
    pub default_currency: String,
    /// Replaces the template's accent colour (the Modern side bar and total band).
    ///
    /// Defaults to `None`, keeping each template's own palette.
    pub accent_color: Option<Color>,
}

impl LayoutConfig {
    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }

    pub fn with_accent_color(mut self, color: Color) -> Self {
        self.accent_color = Some(color);
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_currency: DEFAULT_CURRENCY.to_string(),
            accent_color: None,
        }
    }
}
