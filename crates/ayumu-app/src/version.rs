//! Build metadata.

const UNKNOWN_SHA: &str = "unknown";
const SHORT_SHA_LEN: usize = 9;

/// Package version followed by the git commit it was built from.
#[must_use]
pub fn build_version() -> String {
    format_version(env!("CARGO_PKG_VERSION"), option_env!("VERGEN_GIT_SHA"))
}

fn format_version(pkg_version: &str, git_sha: Option<&str>) -> String {
    let sha = git_sha
        .filter(|sha| !sha.is_empty())
        .map_or(UNKNOWN_SHA, |sha| sha.get(..SHORT_SHA_LEN).unwrap_or(sha));
    format!("{pkg_version} ({sha})")
}
