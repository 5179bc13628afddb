//! Clean command handler
//!
//! Removes the output directory, transpiled files, and archive.

use anyhow::Result;

use extbuild::application::BuildOptions;
use extbuild::presentation::create_event_sink;
use extbuild::presentation::factory::create_clean_use_case;
use extbuild::presentation::output::render_clean_summary;

/// Execute the clean command
pub fn cmd_clean(options: &BuildOptions, json: bool) -> Result<()> {
    let result =
        create_clean_use_case().execute_with_events(options, create_event_sink(json, "clean"))?;

    if !json {
        println!("{}", render_clean_summary(&result, &options.project_root));
    }
    Ok(())
}
