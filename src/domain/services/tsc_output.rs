//! Parser for the compiler's plain-text diagnostics
//!
//! With `--pretty false` each diagnostic starts on its own line as either
//! `file(line,col): category TScode: message` or `category TScode: message`.
//! Indented lines that follow continue the previous message chain.

use crate::domain::entities::{Diagnostic, DiagnosticCategory};

/// Extract all diagnostics from compiler output.
///
/// Lines that are neither a diagnostic header nor a continuation are
/// ignored (summaries, blank lines, banners).
pub fn parse_tsc_output(output: &str) -> Vec<Diagnostic> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    for line in output.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            if let Some(last) = diagnostics.last_mut() {
                last.message.push('\n');
                last.message.push_str(line.trim_start());
            }
            continue;
        }

        if let Some(diagnostic) = parse_located(line).or_else(|| parse_header(line)) {
            diagnostics.push(diagnostic);
        }
    }

    diagnostics
}

/// `src/a.ts(3,14): error TS2304: Cannot find name 'x'.`
fn parse_located(line: &str) -> Option<Diagnostic> {
    let split = line.find("): ")?;
    let head = &line[..split];
    let open = head.rfind('(')?;
    let (row, col) = head[open + 1..].split_once(',')?;
    let row: usize = row.trim().parse().ok()?;
    let col: usize = col.trim().parse().ok()?;
    let file = &head[..open];
    if file.is_empty() {
        return None;
    }

    let diagnostic = parse_header(&line[split + 3..])?;
    Some(diagnostic.in_file(file).at(row, col))
}

/// `error TS5058: The specified path does not exist.`
fn parse_header(text: &str) -> Option<Diagnostic> {
    let (category, rest) = text.split_once(' ')?;
    let category = DiagnosticCategory::from_keyword(category)?;
    let (code, message) = rest.split_once(": ")?;
    let code: u32 = code.strip_prefix("TS")?.parse().ok()?;

    Some(
        Diagnostic::error(message.trim())
            .with_category(category)
            .with_code(code),
    )
}
