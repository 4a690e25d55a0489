// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Report field parsing — pulls the three labelled sections and all date-like
// tokens out of loosely-structured report text.

use std::sync::LazyLock;

use laudo_core::ExtractedReport;
use regex::Regex;
use tracing::instrument;

/// A recognised section header, optionally followed by a colon. Accent and
/// ASCII spellings are both accepted, case-insensitively, anywhere in the
/// text. The greedy `\s*` means a colon-less header swallows the whitespace
/// (including newlines) that follows it before content starts.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(indica[çc][ãa]o|achados|conclus[ãa]o)\s*:?").expect("header pattern")
});

/// Where a captured section ends: a newline introducing another recognised
/// header (this time with a mandatory colon), or a blank line. End of text is
/// handled by the caller.
static TERMINATOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\n(?:(?:indica[çc][ãa]o|achados|conclus[ãa]o)\s*:|\n)")
        .expect("terminator pattern")
});

/// A date-like token: 1–2 digits, separator, 1–2 digits, separator, 2 or 4
/// digits. No calendar validation — `99/99/9999` matches.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").expect("date pattern"));

/// Parse report text into labelled sections and date tokens.
///
/// Deterministic and pure. Sections with no matching header stay `None` —
/// the parser never invents empty strings — while a header followed
/// immediately by a terminator yields `Some("")`. When a header repeats, the
/// last occurrence wins.
#[instrument(skip(text), fields(len = text.len()))]
pub fn parse_fields(text: &str) -> ExtractedReport {
    let mut report = ExtractedReport::default();

    let mut pos = 0;
    while let Some(caps) = HEADER_RE.captures_at(text, pos) {
        let whole = caps.get(0).expect("match has a whole span");
        let header = caps.get(1).expect("header group always captures");

        let rest = &text[whole.end()..];
        let content_end = TERMINATOR_RE
            .find(rest)
            .map_or(rest.len(), |terminator| terminator.start());
        let content = rest[..content_end].trim().to_string();

        let slot = match section_key(header.as_str()) {
            SectionKey::Indicacao => &mut report.indicacao,
            SectionKey::Achados => &mut report.achados,
            SectionKey::Conclusao => &mut report.conclusao,
        };
        *slot = Some(content);

        pos = whole.end() + content_end;
    }

    report.datas = DATE_RE
        .find_iter(text)
        .map(|token| token.as_str().to_string())
        .collect();

    report
}

enum SectionKey {
    Indicacao,
    Achados,
    Conclusao,
}

/// Map a matched header spelling (any case, any accent variant) to its
/// canonical section.
fn section_key(header: &str) -> SectionKey {
    let lower = header.to_lowercase();
    if lower.starts_with("indica") {
        SectionKey::Indicacao
    } else if lower.starts_with("achados") {
        SectionKey::Achados
    } else {
        SectionKey::Conclusao
    }
}
