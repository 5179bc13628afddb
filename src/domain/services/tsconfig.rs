//! `tsconfig.json` parsing
//!
//! Pure text-to-`ProjectConfig` conversion. File resolution lives in the
//! infrastructure layer because it walks the disk.

use std::path::Path;

use serde_json::Value;

use super::jsonc::strip_jsonc;
use crate::domain::entities::{Diagnostic, Position, ProjectConfig};

/// Parse the text of a project configuration file.
///
/// Returns every problem found rather than stopping at the first one, so a
/// single run reports all of them.
pub fn parse_project_config(path: &Path, text: &str) -> Result<ProjectConfig, Vec<Diagnostic>> {
    let stripped = strip_jsonc(text);

    let value: Value = serde_json::from_str(&stripped).map_err(|e| {
        let message = e.to_string();
        let message = message
            .split(" at line ")
            .next()
            .unwrap_or(message.as_str())
            .to_string();
        let column = e.column().max(1);
        vec![Diagnostic::error(message)
            .in_file(path)
            .at(e.line().max(1), column)
            .with_code(1005)]
    })?;

    let Value::Object(root) = value else {
        return Err(vec![Diagnostic::error(
            "The root value of a 'tsconfig.json' file must be an object.",
        )
        .in_file(path)
        .at(1, 1)
        .with_code(5092)]);
    };

    let mut diagnostics = Vec::new();
    let mut config = ProjectConfig::default();

    match root.get("compilerOptions") {
        None | Some(Value::Null) => {}
        Some(Value::Object(options)) => config.compiler_options = options.clone(),
        Some(_) => diagnostics.push(type_error(path, text, "compilerOptions", "object")),
    }

    for key in ["files", "include", "exclude"] {
        let parsed = match root.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                let strings: Option<Vec<String>> = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect();
                if strings.is_none() {
                    diagnostics.push(type_error(path, text, key, "string[]"));
                }
                strings
            }
            Some(_) => {
                diagnostics.push(type_error(path, text, key, "Array"));
                None
            }
        };
        match key {
            "files" => config.files = parsed,
            "include" => config.include = parsed,
            _ => config.exclude = parsed,
        }
    }

    if let Some(files) = &config.files {
        if files.is_empty() && config.include.is_none() {
            diagnostics.push(
                Diagnostic::error("The 'files' list in config file is empty.")
                    .in_file(path)
                    .with_code(18002),
            );
        }
    }

    if let Some(out_dir) = config.compiler_options.get("outDir") {
        if !out_dir.is_string() {
            diagnostics.push(
                Diagnostic::error("Compiler option 'outDir' requires a value of type string.")
                    .in_file(path)
                    .with_code(5024),
            );
        }
    }

    if diagnostics.is_empty() {
        Ok(config)
    } else {
        Err(diagnostics)
    }
}

fn type_error(path: &Path, text: &str, key: &str, expected: &str) -> Diagnostic {
    let diagnostic = Diagnostic::error(format!(
        "Compiler option '{key}' requires a value of type {expected}."
    ))
    .in_file(path)
    .with_code(5024);

    match text.find(&format!("\"{key}\"")) {
        Some(offset) => {
            let pos = Position::from_offset(text, offset);
            diagnostic.at(pos.line, pos.column)
        }
        None => diagnostic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<ProjectConfig, Vec<Diagnostic>> {
        parse_project_config(&PathBuf::from("tsconfig.json"), text)
    }

    #[test]
    fn parses_commented_config() {
        let config = parse(
            r#"{
  // Extension sources
  "compilerOptions": {
    "target": "es2017",
    "outDir": "ts-out", /* emitted here */
  },
  "include": ["src/**/*"],
}"#,
        )
        .unwrap();

        assert_eq!(config.out_dir(), Some("ts-out"));
        assert_eq!(config.include, Some(vec!["src/**/*".to_string()]));
        assert_eq!(config.files, None);
    }

    #[test]
    fn syntax_error_reports_position() {
        let errors = parse("{\n  \"compilerOptions\": {\n    \"target\" \"es5\"\n  }\n}").unwrap_err();
        assert_eq!(errors.len(), 1);
        let pos = errors[0].position.unwrap();
        assert_eq!(pos.line, 3);
        assert_eq!(errors[0].file, Some(PathBuf::from("tsconfig.json")));
        assert!(!errors[0].message.contains("at line"));
    }

    #[test]
    fn non_object_root_is_rejected() {
        let errors = parse("[1, 2]").unwrap_err();
        assert_eq!(errors[0].code, Some(5092));
    }

    #[test]
    fn wrong_types_are_all_reported() {
        let errors = parse(
            r#"{
  "compilerOptions": true,
  "include": "src",
  "exclude": [1]
}"#,
        )
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors[0].message.contains("'compilerOptions'"));
        assert_eq!(errors[0].position.unwrap().line, 2);
        assert!(errors[1].message.contains("'include'"));
        assert!(errors[2].message.contains("'exclude'"));
    }

    #[test]
    fn empty_files_list_is_an_error() {
        let errors = parse(r#"{ "files": [] }"#).unwrap_err();
        assert_eq!(errors[0].code, Some(18002));
    }

    #[test]
    fn empty_document_is_a_syntax_error() {
        assert!(parse("").is_err());
        assert!(parse("// only a comment").is_err());
    }
}
