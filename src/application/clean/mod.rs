//! Clean Use Case
//!
//! Removes everything a build produces:
//! - the output (staging) directory
//! - the intermediate (transpiled) directory
//! - the archive

mod result;
mod use_case;

pub use result::CleanResult;
pub use use_case::CleanUseCase;
