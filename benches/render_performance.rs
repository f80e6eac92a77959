//! Invoice rendering benchmarks
//!
//! Measures single-invoice render time per template and batch throughput
//! on the sequential and parallel executors.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quire::{InvoiceDocument, InvoiceRendererBuilder, TemplateStyle};
use serde_json::json;
use std::hint::black_box;

fn invoice(items: usize) -> InvoiceDocument {
    let items: Vec<_> = (0..items)
        .map(|i| {
            json!({
                "description": format!("Consulting block {} covering discovery workshops, written findings and follow-up review", i),
                "quantity": 1 + i % 4,
                "unitPrice": 125.5
            })
        })
        .collect();
    serde_json::from_value(json!({
        "invoiceNumber": "BENCH-001",
        "issueDate": "2024-03-01",
        "dueDate": "2024-03-31",
        "from": { "name": "Bench Co", "address": "1 Loop Road", "city": "Criterion", "email": "bench@example.test" },
        "to": { "name": "Client Ltd", "country": "NL" },
        "items": items,
        "subtotal": 1000,
        "tax": 210,
        "taxRate": 21,
        "total": 1210,
        "currency": "EUR",
        "notes": "Prices exclude travel.",
        "paymentTerms": "Net 14"
    }))
    .expect("benchmark invoice is valid")
}

fn bench_single_invoice(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_invoice");
    let doc = invoice(8);
    for template in [TemplateStyle::Modern, TemplateStyle::Classic] {
        let renderer = InvoiceRendererBuilder::new()
            .with_template(template)
            .build()
            .expect("renderer builds");
        group.bench_with_input(BenchmarkId::from_parameter(template), &doc, |b, doc| {
            b.iter(|| renderer.render(black_box(doc)).expect("render"));
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_throughput");
    let batch_size = 64;
    group.throughput(Throughput::Elements(batch_size as u64));
    let docs: Vec<InvoiceDocument> = (0..batch_size).map(|_| invoice(8)).collect();

    for parallel in [false, true] {
        let renderer = InvoiceRendererBuilder::new()
            .with_parallel(parallel)
            .build()
            .expect("renderer builds");
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| renderer.render_batch(black_box(docs.clone())));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_invoice, bench_batch);
criterion_main!(benches);
