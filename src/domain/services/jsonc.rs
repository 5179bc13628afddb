//! JSON-with-comments normalization
//!
//! `tsconfig.json` allows `//` and `/* */` comments plus trailing commas.
//! `strip_jsonc` blanks them out with spaces so the result is plain JSON of
//! the same byte length, with every newline kept in place. Error positions
//! reported against the stripped text are therefore valid for the original.

/// Replace comments and trailing commas with whitespace.
pub fn strip_jsonc(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    // Index into `out` of the last comma seen outside strings, cleared by any
    // significant token.
    let mut pending_comma: Option<usize> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            b'"' => {
                pending_comma = None;
                let end = string_end(bytes, i);
                out.extend_from_slice(&bytes[i..end]);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                let end = bytes[i..]
                    .iter()
                    .position(|c| *c == b'\n')
                    .map(|p| i + p)
                    .unwrap_or(bytes.len());
                blank(&bytes[i..end], &mut out);
                i = end;
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = bytes[i + 2..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .map(|p| i + 2 + p + 2)
                    .unwrap_or(bytes.len());
                blank(&bytes[i..end], &mut out);
                i = end;
            }
            b',' => {
                pending_comma = Some(out.len());
                out.push(b);
                i += 1;
            }
            b'}' | b']' => {
                if let Some(at) = pending_comma.take() {
                    out[at] = b' ';
                }
                out.push(b);
                i += 1;
            }
            b' ' | b'\t' | b'\r' | b'\n' => {
                out.push(b);
                i += 1;
            }
            _ => {
                pending_comma = None;
                out.push(b);
                i += 1;
            }
        }
    }

    // Only ASCII bytes were replaced, and always by ASCII spaces, so the
    // buffer is still valid UTF-8.
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

/// Index one past the closing quote of the string starting at `start`
fn string_end(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Push spaces for `span`, preserving line breaks and multi-byte widths
fn blank(span: &[u8], out: &mut Vec<u8>) {
    for &c in span {
        out.push(match c {
            b'\n' | b'\r' => c,
            _ => b' ',
        });
    }
}
