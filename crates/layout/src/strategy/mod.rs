//! Page templates.
//!
//! Each template is a [`RenderStrategy`] that walks an invoice top to bottom,
//! drawing through a recording [`Canvas`](crate::Canvas) and advancing a
//! single vertical [`Cursor`](crate::Cursor). Formatting and wrapping are
//! shared; only geometry and palette differ.

mod classic;
mod modern;

pub use classic::ClassicStrategy;
pub use modern::ModernStrategy;

use crate::LayoutError;
use crate::config::LayoutConfig;
use quire_render_core::{DrawCommand, DrawingSurface};
use quire_types::InvoiceDocument;
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

/// What ended up in a line item's thumbnail slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Thumbnail {
    Image,
    Placeholder,
}

/// The vertical span one line item occupies on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGroup {
    pub item_index: usize,
    /// Cursor position at which the row starts.
    pub top: f32,
    pub height: f32,
    /// `None` for templates without an image column.
    pub thumbnail: Option<Thumbnail>,
}

impl RowGroup {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Everything a strategy issued, in order, plus one row group per line item.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub commands: Vec<DrawCommand>,
    pub rows: Vec<RowGroup>,
}

pub trait RenderStrategy: Send + Sync + fmt::Debug {
    /// Draws `doc` onto `surface`. The document is assumed to be valid.
    fn render(
        &self,
        doc: &InvoiceDocument,
        surface: &mut dyn DrawingSurface,
    ) -> Result<PageLayout, LayoutError>;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    #[default]
    Modern,
    Classic,
}

impl TemplateStyle {
    pub fn strategy(self, config: &LayoutConfig) -> Box<dyn RenderStrategy> {
        match self {
            TemplateStyle::Modern => Box::new(ModernStrategy::new(config)),
            TemplateStyle::Classic => Box::new(ClassicStrategy::new(config)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateStyle::Modern => "modern",
            TemplateStyle::Classic => "classic",
        }
    }
}

impl FromStr for TemplateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(TemplateStyle::Modern),
            "classic" => Ok(TemplateStyle::Classic),
            _ => Err(format!("Unknown template '{}', expected 'modern' or 'classic'", s)),
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TemplateStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parse_is_case_insensitive() {
        assert_eq!("Modern".parse::<TemplateStyle>().unwrap(), TemplateStyle::Modern);
        assert_eq!(" CLASSIC ".parse::<TemplateStyle>().unwrap(), TemplateStyle::Classic);
        assert!("fancy".parse::<TemplateStyle>().is_err());
    }

    #[test]
    fn test_template_serde() {
        let style: TemplateStyle = serde_json::from_str("\"Classic\"").unwrap();
        assert_eq!(style, TemplateStyle::Classic);
        assert_eq!(serde_json::to_string(&TemplateStyle::Modern).unwrap(), "\"modern\"");
        assert_eq!(TemplateStyle::default(), TemplateStyle::Modern);
    }

    #[test]
    fn test_strategy_selection() {
        let config = LayoutConfig::default();
        assert_eq!(TemplateStyle::Modern.strategy(&config).name(), "modern");
        assert_eq!(TemplateStyle::Classic.strategy(&config).name(), "classic");
    }
}
