// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Benchmarks for the hot pipeline stages: type detection and field parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use laudo_document::{detect, parse_fields};

fn bench_detect(c: &mut Criterion) {
    let pdf_like = b"%PDF-1.5\n%\xE2\xE3\xCF\xD3\n1 0 obj <<>> endobj".to_vec();
    let mut dicom_like = vec![0u8; 128];
    dicom_like.extend_from_slice(b"DICM\x02\x00\x00\x00UL\x04\x00");
    let unknown = vec![b'a'; 4096];

    c.bench_function("detect_pdf", |b| {
        b.iter(|| detect(black_box(&pdf_like)));
    });
    c.bench_function("detect_dicom", |b| {
        b.iter(|| detect(black_box(&dicom_like)));
    });
    c.bench_function("detect_unknown", |b| {
        b.iter(|| detect(black_box(&unknown)));
    });
}

fn bench_parse_fields(c: &mut Criterion) {
    let small = "Indicação: Dor no peito\nAchados: Exame normal\nConclusão: Sem sinais\nData 01/02/2023 e 03-02-2024";
    let mut large = String::new();
    for page in 0..200 {
        large.push_str("Indicação: controle pós-operatório\n");
        large.push_str("Achados: parênquima homogêneo, sem lesões focais\n");
        large.push_str("Conclusão: exame dentro dos limites da normalidade\n");
        large.push_str(&format!("Revisado em 0{}/1{}/202{}\n\n", page % 9 + 1, page % 2, page % 10));
    }

    c.bench_function("parse_fields_small", |b| {
        b.iter(|| parse_fields(black_box(small)));
    });
    c.bench_function("parse_fields_large", |b| {
        b.iter(|| parse_fields(black_box(&large)));
    });
}

criterion_group!(benches, bench_detect, bench_parse_fields);
criterion_main!(benches);
