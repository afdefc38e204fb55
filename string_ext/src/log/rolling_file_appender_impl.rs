// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Create a file appender that never rolls over, writing to `path_str`. The file is
/// created (and appended to if it exists) in the parent folder of `path_str`.
///
/// # Errors
///
/// Returns an error if `path_str` has no parent folder or no file name, eg: `/` or `..`,
/// or if the folder or the file can't be created.
pub fn try_create_rolling_file_appender(
    path_str: &str,
) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access the folder of {}. It might not exist, or you don't have the \
             required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().and_then(|it| it.to_str()).ok_or_else(|| {
        miette::miette!(
            "Can't access the file name of {}. It might not exist, or you don't have \
             the required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(parent)
        .into_diagnostic()
}
