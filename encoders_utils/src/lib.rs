mod macros;

/// Version string of the workspace, used for `--version` output.
pub const fn encoders_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
