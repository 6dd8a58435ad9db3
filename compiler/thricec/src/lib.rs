//! Thrice compiler driver.
//!
//! The `thrice` binary is a thin argument dispatcher over [`commands`];
//! [`reporting`] renders errors as source-annotated diagnostics.

use std::sync::Once;

pub mod commands;
pub mod reporting;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=thrice_lexer=trace` or `RUST_LOG=debug`; set
/// `THRICE_LOG_TREE=1` as well for an indented span tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("THRICE_LOG_TREE").is_some();

        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(tree_layer)
            .with(flat_layer)
            .with(filter)
            .init();
    });
}
