//! Configuration failures abort before anything is written.
//!
//! None of these runs reaches tool lookup, so no compiler is needed.

mod common;

use common::*;

#[test]
fn malformed_tsconfig_aborts_before_output_exists() {
    let env = TestEnv::with_extension();
    env.write(
        "tsconfig.json",
        "{\n  \"compilerOptions\": {\n    \"target\": \n  }\n",
    );

    let result = env.run(&[]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("Error ") && result.stderr.contains("tsconfig.json ("),
        "expected a located diagnostic, got:\n{}",
        result.stderr
    );
    assert_output_contains!(result, "error: failed to load project configuration");
    assert!(!env.project_path("build").exists());
    assert!(!env.project_path("jsonview.zip").exists());
}

#[test]
fn malformed_tsconfig_keeps_previous_output() {
    let env = TestEnv::with_extension();
    env.write("build/viewer.js", "previous build");
    env.write("jsonview.zip", "previous archive");
    env.write("tsconfig.json", "{ \"include\": [\"src\"] ");

    let result = env.run(&["build"]);

    assert!(!result.is_success());
    assert_eq!(env.read("build/viewer.js"), b"previous build");
    assert_eq!(env.read("jsonview.zip"), b"previous archive");
}

#[test]
fn diagnostics_print_before_summary_line() {
    let env = TestEnv::with_extension();
    env.write("tsconfig.json", "{ \"files\": \"src/viewer.ts\" }");

    let result = env.run(&[]);

    assert!(!result.is_success());
    let diagnostic = result.stderr.find("Error ").expect("diagnostic line");
    let summary = result.stderr.find("error: ").expect("summary line");
    assert!(diagnostic < summary, "stderr:\n{}", result.stderr);
}

#[test]
fn missing_tsconfig_is_a_diagnostic() {
    let env = TestEnv::new();

    let result = env.run(&[]);

    assert!(!result.is_success());
    assert_output_contains!(result, "Error: Cannot read file");
    assert!(!env.project_path("build").exists());
}

#[test]
fn no_inputs_is_a_diagnostic() {
    let env = TestEnv::new();
    env.write("tsconfig.json", r#"{ "include": ["src"] }"#);

    let result = env.run(&["check"]);

    assert!(!result.is_success());
    assert_output_contains!(result, "No inputs were found");
}

#[test]
fn invalid_build_config_is_reported() {
    let env = TestEnv::with_extension();
    env.write("extbuild.toml", "[output]\ndir = 42\n");

    let result = env.run(&[]);

    assert!(!result.is_success());
    assert_output_contains!(result, "error: invalid build configuration");
    assert!(!env.project_path("build").exists());
}

#[test]
fn explicit_config_must_exist() {
    let env = TestEnv::with_extension();

    let result = env.run(&["--config", "missing.toml"]);

    assert!(!result.is_success());
    assert_output_contains!(result, "missing.toml");
}

#[test]
fn unknown_config_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write("extbuild.toml", "[output]\narchve = \"ext.zip\"\n");
    env.write("tsconfig.json", "{");

    let result = env.run(&[]);

    assert!(!result.is_success());
    assert_output_contains!(result, "warning: unknown key 'archve'");
    assert_output_contains!(result, "did you mean 'archive'?");
}

#[test]
fn root_flag_selects_project() {
    let env = TestEnv::new();
    env.write("ext/tsconfig.json", "{ \"compilerOptions\": 3 }");

    let result = env.run(&["--root", "ext", "check"]);

    assert!(!result.is_success());
    assert_output_contains!(result, "compilerOptions");
}
