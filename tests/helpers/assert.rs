use snapbox::Assert;

/// Assert that compares against fixture files, which can be rewritten by running with
/// `SNAPSHOTS=overwrite`. Paths are not normalized, so JSON escapes like `\"` stay intact.
pub fn assert() -> Assert {
    Assert::new()
        .action_env("SNAPSHOTS")
        .normalize_paths(false)
}
