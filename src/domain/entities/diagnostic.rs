//! Diagnostic entity
//!
//! A structured compiler or configuration message. Collection code builds
//! these; event sinks decide how they are rendered.

use std::fmt;
use std::path::{Path, PathBuf};

/// Severity reported by the producer of a diagnostic.
///
/// Kept for reporting only. Every category aborts the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticCategory {
    #[default]
    Error,
    Warning,
    Suggestion,
    Message,
}

impl DiagnosticCategory {
    /// Parse the category word printed by the compiler
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "suggestion" => Some(Self::Suggestion),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
            Self::Message => "message",
        }
    }
}

/// 1-based line/column position inside a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Compute the position of a byte offset within `text`
    pub fn from_offset(text: &str, offset: usize) -> Self {
        let offset = offset.min(text.len());
        let before = &text.as_bytes()[..offset];
        let line = before.iter().filter(|b| **b == b'\n').count() + 1;
        let line_start = before
            .iter()
            .rposition(|b| *b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        Self {
            line,
            column: offset - line_start + 1,
        }
    }
}

/// A single diagnostic: optional location, category, optional code, message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: Option<PathBuf>,
    pub position: Option<Position>,
    pub category: DiagnosticCategory,
    /// Numeric compiler code (the `2322` in `TS2322`)
    pub code: Option<u32>,
    pub message: String,
}

impl Diagnostic {
    /// Error diagnostic without a location
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            file: None,
            position: None,
            category: DiagnosticCategory::Error,
            code: None,
            message: message.into(),
        }
    }

    pub fn in_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.position = Some(Position::new(line, column));
        self
    }

    pub fn with_code(mut self, code: u32) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders as `Error <file> (<line>,<col>): <message>`.
    ///
    /// The prefix is always `Error`: warnings are reported the same way.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error")?;
        if let Some(file) = &self.file {
            write!(f, " {}", file.display())?;
            if let Some(pos) = &self.position {
                write!(f, " ({},{})", pos.line, pos.column)?;
            }
        }
        write!(f, ": {}", self.message)
    }
}
