// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref, path::PathBuf};

use miette::IntoDiagnostic;

/// A directory under [`std::env::temp_dir`] that is deleted when dropped.
#[derive(Debug)]
pub struct TempDir {
    inner: PathBuf,
}

/// # Errors
///
/// Returns an error if the directory can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let new_temp_dir = root.join(format!("r3bl_string_ext_{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir {
        inner: new_temp_dir,
    })
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_is_deleted_on_drop() {
        let temp_dir = try_create_temp_dir().unwrap();
        let copy_of_path = temp_dir.to_path_buf();
        assert!(copy_of_path.exists());
        drop(temp_dir);
        assert!(!copy_of_path.exists());
    }
}
