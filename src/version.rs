//! Version string assembly.
//!
//! Dev builds carry the short git hash emitted by the build script; builds
//! with `--features release` (and checkouts without git metadata) get the
//! clean `<semver> (<date>)` form.

/// Human-facing version string, e.g. `0.2.0 (a1b2c3d 2026-08-05)`.
pub fn version() -> String {
    let semver = env!("CARGO_PKG_VERSION");
    let date = env!("GRIDFALL_BUILD_DATE");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            let short = &sha[..sha.len().min(7)];
            format!("{semver} ({short} {date})")
        }
        _ => format!("{semver} ({date})"),
    }
}
