//! File System Operations
//!
//! Staging-directory management and asset copying.

mod assets;
mod local;

pub use assets::{copy_assets, file_name_matcher, match_files, CopiedAsset};
pub use local::{
    copy_dir_all, copy_file, list_files, normalize, remove_dir_if_exists, remove_file_if_exists,
    reset_dir, slash_path,
};
