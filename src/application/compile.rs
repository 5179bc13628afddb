//! Type-check and transpile stage
//!
//! Shared by `build` and `check`. Nothing outside the intermediate
//! directory is touched, so a failure here leaves the previous build intact.
//! The intermediate directory itself is emptied before every compile, so
//! only files from this run can reach the bundler.

use crate::domain::entities::{Diagnostic, ResolvedProject};
use crate::domain::ports::{BuildEvent, BuildEventSink, Compiler, Toolchain};
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::fs::reset_dir;
use crate::infrastructure::load_project;

use super::build::BuildOptions;

/// Load `tsconfig.json`, then run the compiler over it.
///
/// Every diagnostic, whatever its category, is reported to `sink` and fails
/// the stage. An unsafe output layout is rejected before anything is read.
pub fn compile_project<T: Toolchain>(
    toolchain: &T,
    options: &BuildOptions,
    sink: &dyn BuildEventSink,
) -> BuildResult<ResolvedProject> {
    options.check_layout()?;

    let config_path = options.project_config_path();
    let intermediate_dir = options.intermediate_dir();
    let _span = tracing::info_span!("compile", config = %config_path.display()).entered();

    let excludes = [options.output_dir(), intermediate_dir.clone()];
    let project = match load_project(&config_path, &excludes) {
        Ok(project) => project,
        Err(diagnostics) => {
            report(sink, &diagnostics);
            return Err(BuildError::ProjectConfig {
                path: config_path,
                diagnostics,
            });
        }
    };
    sink.on_event(BuildEvent::ProjectResolved {
        config_path: config_path.clone(),
        source_count: project.source_count(),
    });

    let compiler = toolchain.compiler()?;
    reset_dir(&intermediate_dir)?;
    tracing::info!(compiler = compiler.name(), sources = project.source_count(), "compiling");
    let output = compiler.compile(&project, &intermediate_dir)?;

    if !output.is_clean() {
        let mut diagnostics = output.diagnostics;
        if diagnostics.is_empty() {
            diagnostics.push(Diagnostic::error("Emit skipped: no output files were written."));
        }
        report(sink, &diagnostics);
        return Err(BuildError::Compilation { diagnostics });
    }

    sink.on_event(BuildEvent::Compiled {
        out_dir: intermediate_dir,
    });
    Ok(project)
}

fn report(sink: &dyn BuildEventSink, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        sink.on_event(BuildEvent::Diagnostic(diagnostic.clone()));
    }
}
