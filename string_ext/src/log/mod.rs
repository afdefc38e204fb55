// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Optional [`tracing`] setup. The library only emits events, it never installs a
//! subscriber on its own. Use [`try_initialize_logging_global`] (apps) or
//! [`try_initialize_logging_thread_local`] (tests) to see them.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use rolling_file_appender_impl::*;
pub use tracing_config::*;
pub use tracing_init::*;
