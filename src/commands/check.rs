//! Check command handler

use anyhow::Result;

use extbuild::application::BuildOptions;
use extbuild::presentation::output::render_check_summary;
use extbuild::presentation::{create_check_use_case, create_event_sink};

/// Execute the check command
pub fn cmd_check(options: &BuildOptions, json: bool) -> Result<()> {
    let use_case = create_check_use_case(options);
    let project = use_case.execute_with_events(options, create_event_sink(json, "check"))?;

    if !json {
        println!("{}", render_check_summary(&project));
    }
    Ok(())
}
