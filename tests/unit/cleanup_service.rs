//! Unit tests for the artifact cleaner's safe-deletion scoping.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use stevedore::application::services::cleanup::ArtifactCleaner;

use crate::helpers::{FakeFs, RecordingReporter};

const OUTPUT_DIR: &str = "/run/stevedore";

#[test]
fn test_cleanup_removes_artifact_directory_under_root() {
    let artifact = "/run/stevedore/0123456789-web/compose.yml";
    let fs = FakeFs::with_files(&[(artifact, "services: {}\n")]);
    let reporter = RecordingReporter::default();

    ArtifactCleaner::new(&fs, Path::new(OUTPUT_DIR)).cleanup(Path::new(artifact), &reporter);

    assert_eq!(
        *fs.removed.borrow(),
        vec![PathBuf::from("/run/stevedore/0123456789-web")]
    );
    assert!(fs.file(Path::new(artifact)).is_none());
}

#[test]
fn test_cleanup_leaves_paths_outside_root_alone() {
    // An unrendered template lives in its source-of-truth store; it exists
    // and would be deletable, but must never be touched.
    let template = "/nix/store/abc-compose/compose.yml";
    let fs = FakeFs::with_files(&[(template, "services: {}\n")]);
    let reporter = RecordingReporter::default();

    ArtifactCleaner::new(&fs, Path::new(OUTPUT_DIR)).cleanup(Path::new(template), &reporter);

    assert!(fs.removed.borrow().is_empty());
    assert!(fs.file(Path::new(template)).is_some());
    assert!(reporter.events().is_empty());
}

#[test]
fn test_cleanup_never_removes_the_root_itself() {
    // A file sitting directly in the root has the root as its containing
    // directory; deleting it would take every artifact with it.
    let stray = "/run/stevedore/compose.yml";
    let fs = FakeFs::with_files(&[(stray, "services: {}\n")]);
    let reporter = RecordingReporter::default();

    ArtifactCleaner::new(&fs, Path::new(OUTPUT_DIR)).cleanup(Path::new(stray), &reporter);

    assert!(fs.removed.borrow().is_empty());
}

#[test]
fn test_cleanup_failure_is_warned_and_absorbed() {
    let artifact = "/run/stevedore/0123456789-web/compose.yml";
    let fs = FakeFs::with_files(&[(artifact, "services: {}\n")]);
    fs.fail_removals.set(true);
    let reporter = RecordingReporter::default();

    ArtifactCleaner::new(&fs, Path::new(OUTPUT_DIR)).cleanup(Path::new(artifact), &reporter);

    let events = reporter.events();
    assert_eq!(events.len(), 1);
    assert!(
        events[0].starts_with("warn: Failed to delete /run/stevedore/0123456789-web"),
        "got: {}",
        events[0]
    );
}
