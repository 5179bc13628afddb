//! Build command handler

use anyhow::Result;

use extbuild::application::BuildOptions;
use extbuild::presentation::output::render_build_summary;
use extbuild::presentation::{create_build_use_case, create_event_sink};

/// Execute the build command
pub fn cmd_build(options: &BuildOptions, json: bool) -> Result<()> {
    let use_case = create_build_use_case(options);
    let report = use_case.execute_with_events(options, create_event_sink(json, "build"))?;

    if !json {
        println!("{}", render_build_summary(&report, &options.project_root));
    }
    Ok(())
}
