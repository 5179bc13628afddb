//! Build Use Case
//!
//! Orchestrates the packaging flow, each stage once and in order:
//! 1. Type-check and transpile (`tsconfig.json` -> intermediate directory)
//! 2. Reset the output directory
//! 3. Bundle every entry point, in parallel
//! 4. Copy static assets
//! 5. Write the archive
//!
//! The first error aborts the run. Nothing is rolled back.

use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;

use crate::config::BundleConfig;
use crate::domain::ports::{
    BuildEvent, BuildEventSink, BundleRequest, Bundler, NoopEventSink, Toolchain,
};
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::fs::{copy_assets, reset_dir};
use crate::infrastructure::write_archive;

use crate::application::compile::compile_project;
use super::options::BuildOptions;
use super::result::BuildReport;

/// One entry point to bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleJob {
    pub entry: String,
    /// Transpiled entry file
    pub input: PathBuf,
    /// Bundle to write
    pub output: PathBuf,
}

impl BundleJob {
    fn request<'a>(&'a self, config: &'a BundleConfig) -> BundleRequest<'a> {
        BundleRequest {
            entry: &self.entry,
            input: &self.input,
            output: &self.output,
            format: config.format,
            global_name: &config.name,
        }
    }
}

/// Build use case - parameterized by the toolchain it drives
pub struct BuildUseCase<T: Toolchain> {
    toolchain: T,
}

impl<T: Toolchain> BuildUseCase<T> {
    pub fn new(toolchain: T) -> Self {
        Self { toolchain }
    }

    /// Execute the build silently
    pub fn execute(&self, options: &BuildOptions) -> BuildResult<BuildReport> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the build, reporting progress and diagnostics to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &BuildOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> BuildResult<BuildReport> {
        let result = self.run(options, event_sink.as_ref());
        if let Err(e) = &result {
            event_sink.on_event(BuildEvent::Failed {
                error: e.to_string(),
            });
        }
        result
    }

    fn run(&self, options: &BuildOptions, sink: &dyn BuildEventSink) -> BuildResult<BuildReport> {
        sink.on_event(BuildEvent::Started {
            project_root: options.project_root.clone(),
            config_path: options.project_config_path(),
        });

        // 1. Type-check and transpile
        let project = compile_project(&self.toolchain, options, sink)?;

        // Everything that can fail without touching the output goes first
        let bundler = self.toolchain.bundler()?;
        let jobs = plan_bundles(options)?;

        // 2. Reset output directory
        let output_dir = options.output_dir();
        reset_dir(&output_dir)?;
        sink.on_event(BuildEvent::OutputReset {
            dir: output_dir.clone(),
        });

        // 3. Bundle
        let bundles = bundle_all(&bundler, &jobs, &options.config.bundle)?;
        for (index, job) in jobs.iter().enumerate() {
            sink.on_event(BuildEvent::Bundled {
                index,
                entry: job.entry.clone(),
                output: job.output.clone(),
            });
        }

        // 4. Static assets
        let assets = {
            let _span = tracing::info_span!("assets").entered();
            copy_assets(&options.project_root, &options.config.assets, &output_dir)?
        };
        if sink.wants_detailed_events() {
            for asset in &assets {
                sink.on_event(BuildEvent::AssetCopied {
                    source: asset.source.clone(),
                    destination: asset.destination.clone(),
                });
            }
        }

        // 5. Archive
        let archive = {
            let _span = tracing::info_span!("archive").entered();
            write_archive(&output_dir, &options.archive_path())?
        };
        sink.on_event(BuildEvent::Archived {
            path: archive.path.clone(),
            entry_count: archive.entries.len(),
            digest: archive.digest.clone(),
        });

        sink.on_event(BuildEvent::Completed {
            bundle_count: bundles.len(),
            asset_count: assets.len(),
            archive: Some(archive.path.clone()),
        });

        Ok(BuildReport {
            source_files: project.file_names,
            bundles,
            assets,
            archive,
        })
    }
}

/// One job per configured entry point; every transpiled input must exist
pub fn plan_bundles(options: &BuildOptions) -> BuildResult<Vec<BundleJob>> {
    let intermediate_dir = options.intermediate_dir();
    let output_dir = options.output_dir();

    options
        .config
        .bundle
        .entry_points
        .iter()
        .map(|entry| {
            let input = intermediate_dir.join(entry);
            if !input.is_file() {
                return Err(BuildError::MissingEntryPoint {
                    name: entry.clone(),
                    path: input,
                });
            }
            Ok(BundleJob {
                entry: entry.clone(),
                output: output_dir.join(entry),
                input,
            })
        })
        .collect()
}

/// Run every job on a pool with one worker per job.
///
/// All jobs run to completion; if several fail, the error of the earliest
/// job in `jobs` order is returned.
pub fn bundle_all<B: Bundler>(
    bundler: &B,
    jobs: &[BundleJob],
    config: &BundleConfig,
) -> BuildResult<Vec<PathBuf>> {
    if jobs.is_empty() {
        return Ok(Vec::new());
    }

    let _span = tracing::info_span!("bundle", bundler = bundler.name(), jobs = jobs.len()).entered();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.len())
        .thread_name(|i| format!("bundle-{i}"))
        .build()?;

    let results: Vec<BuildResult<()>> = pool.install(|| {
        jobs.par_iter()
            .map(|job| {
                tracing::debug!(entry = %job.entry, "bundling");
                bundler.bundle(&job.request(config))
            })
            .collect()
    });

    for result in results {
        result?;
    }
    Ok(jobs.iter().map(|job| job.output.clone()).collect())
}
