//! The invoice data model consumed by the layout engine.
//!
//! Field names follow the JSON wire format (camelCase). Unknown fields are
//! ignored. Required fields default to empty values on deserialization so the
//! engine, not the parser, decides whether a document is complete.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub from: Party,
    #[serde(default)]
    pub to: Party,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
}

impl InvoiceDocument {
    /// The currency code to format amounts with, falling back to `fallback`
    /// when the document does not name one.
    pub fn currency_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        present(&self.currency).unwrap_or(fallback)
    }

    /// The currency code, defaulting to USD.
    pub fn currency_code(&self) -> &str {
        self.currency_or(DEFAULT_CURRENCY)
    }

    /// Tax amount, zero when absent.
    pub fn tax_amount(&self) -> Decimal {
        self.tax.unwrap_or_default()
    }

    /// Tax rate percentage, zero when absent.
    pub fn tax_rate_percent(&self) -> Decimal {
        self.tax_rate.unwrap_or_default()
    }

    pub fn has_item_images(&self) -> bool {
        self.items.iter().any(|item| item.image_ref().is_some())
    }

    pub fn notes_text(&self) -> Option<&str> {
        present(&self.notes)
    }

    pub fn payment_terms_text(&self) -> Option<&str> {
        present(&self.payment_terms)
    }
}

/// One side of the invoice (issuer or recipient).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Only meaningful on the issuing party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

impl Party {
    /// The optional address lines that are present, in print order.
    ///
    /// City and zip share one line, which is emitted when either is present.
    pub fn contact_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(address) = present(&self.address) {
            lines.push(address.to_string());
        }
        let city = present(&self.city).unwrap_or("");
        let zip = present(&self.zip).unwrap_or("");
        if !city.is_empty() || !zip.is_empty() {
            lines.push(format!("{} {}", city, zip).trim().to_string());
        }
        for field in [&self.country, &self.email, &self.phone] {
            if let Some(value) = present(field) {
                lines.push(value.to_string());
            }
        }
        lines
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    /// Per-item tax as supplied by the caller. Not used for layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LineItem {
    /// Always derived from quantity and unit price. `None` when the product
    /// does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }

    pub fn image_ref(&self) -> Option<&str> {
        present(&self.image_url)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}
