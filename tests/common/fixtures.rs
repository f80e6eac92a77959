use image::{ImageFormat, Rgba, RgbaImage};
use quire::InvoiceDocument;
use serde_json::{json, Value};
use std::io::Cursor;

/// The invoice from the README walkthrough: two items, 10% tax, USD implied.
pub fn invoice_json() -> Value {
    json!({
        "invoiceNumber": "INV-2024-001",
        "issueDate": "2024-01-15",
        "dueDate": "2024-02-14",
        "from": {
            "name": "Acme Studio",
            "address": "12 Market Street",
            "city": "Springfield",
            "zip": "12345",
            "country": "USA",
            "email": "billing@acme.test",
            "phone": "+1 555 0100"
        },
        "to": {
            "name": "Globex Corporation",
            "address": "1 Corporate Plaza",
            "city": "Cypress Creek",
            "country": "USA",
            "email": "ap@globex.test"
        },
        "items": [
            { "description": "Website design", "quantity": 1, "unitPrice": 6000 },
            { "description": "Hosting (12 months)", "quantity": 12, "unitPrice": 250 }
        ],
        "subtotal": 9000,
        "tax": 900,
        "taxRate": 10,
        "total": 9900,
        "notes": "Thank you for choosing Acme.",
        "paymentTerms": "Net 30"
    })
}

pub fn sample_invoice() -> InvoiceDocument {
    serde_json::from_value(invoice_json()).expect("fixture is a valid invoice")
}

/// Same invoice, with a thumbnail reference on the first item.
pub fn invoice_with_image(src: &str) -> InvoiceDocument {
    let mut doc = sample_invoice();
    doc.items[0].image_url = Some(src.to_string());
    doc
}

/// A small opaque PNG.
pub fn png_bytes() -> Vec<u8> {
    let img = RgbaImage::from_pixel(8, 8, Rgba([99, 102, 241, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode png");
    out.into_inner()
}
