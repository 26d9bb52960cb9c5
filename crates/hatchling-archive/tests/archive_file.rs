//! Integration tests for the JSON-file grave archive.
//!
//! Each test works in its own directory under the system temp dir and
//! removes it when done.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use std::path::PathBuf;

use chrono::Utc;
use hatchling_archive::{Archive, ArchiveBackend, JsonFileBackend};
use hatchling_types::{AdultVariant, DeathCause, Grave, GraveId, Stage};

/// A scratch directory removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("hatchling-archive-{}", GraveId::new()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn file(&self) -> PathBuf {
        self.0.join("graves.json")
    }

    /// Files the backend renamed out of the way.
    fn set_aside(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.0)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .is_some_and(|name| name.starts_with("graves.json.corrupt-"))
            })
            .collect()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn grave(name: &str, generation: u32, cause: DeathCause) -> Grave {
    Grave {
        id: Some(GraveId::new()),
        name: name.to_owned(),
        stage: Stage::Adult,
        adult_variant: Some(AdultVariant::Muscle),
        generation,
        feed_progress: 1,
        cause,
        died_at: Some(Utc::now()),
    }
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn graves_survive_a_new_archive_instance() {
    let scratch = Scratch::new();
    {
        let archive = Archive::new(JsonFileBackend::new(scratch.file()));
        archive.append(grave("Tama", 1, DeathCause::OldAge)).unwrap();
        archive
            .append(grave("Pochi", 2, DeathCause::Sickness))
            .unwrap();
    }

    let reopened = Archive::new(JsonFileBackend::new(scratch.file()));
    let graves = reopened.list();
    assert_eq!(graves.len(), 2);
    assert_eq!(graves[0].name, "Tama");
    assert_eq!(graves[0].cause, DeathCause::OldAge);
    assert_eq!(graves[1].name, "Pochi");
    assert_eq!(graves[1].adult_variant, Some(AdultVariant::Muscle));
}

#[test]
fn file_is_a_json_array() {
    let scratch = Scratch::new();
    let archive = Archive::new(JsonFileBackend::new(scratch.file()));
    archive
        .append(grave("Tama", 1, DeathCause::SelfTerminated))
        .unwrap();

    let raw = std::fs::read_to_string(scratch.file()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Tama");
    assert_eq!(records[0]["generation"], 1);
    assert_eq!(records[0]["cause"], "SelfTerminated");
}

#[test]
fn legacy_records_without_optional_fields_load() {
    let scratch = Scratch::new();
    std::fs::write(
        scratch.file(),
        r#"[{"name":"Old","stage":"Child","generation":4}]"#,
    )
    .unwrap();

    let graves = Archive::new(JsonFileBackend::new(scratch.file())).list();
    assert_eq!(graves.len(), 1);
    assert_eq!(graves[0].name, "Old");
    assert_eq!(graves[0].stage, Stage::Child);
    assert_eq!(graves[0].generation, 4);
    assert_eq!(graves[0].adult_variant, None);
}

#[test]
fn missing_parent_directory_is_created() {
    let scratch = Scratch::new();
    let nested = scratch.0.join("data").join("graves.json");
    let archive = Archive::new(JsonFileBackend::new(&nested));
    archive.append(grave("Tama", 1, DeathCause::OldAge)).unwrap();
    assert!(nested.exists());
    assert_eq!(archive.list().len(), 1);
}

// =============================================================================
// Ordering and reset
// =============================================================================

#[test]
fn list_is_ordered_by_generation() {
    let scratch = Scratch::new();
    let backend = JsonFileBackend::new(scratch.file());
    backend
        .store(&[
            grave("c", 3, DeathCause::OldAge),
            grave("a", 1, DeathCause::OldAge),
            grave("b", 2, DeathCause::OldAge),
        ])
        .unwrap();

    let names: Vec<String> = Archive::new(backend)
        .list()
        .into_iter()
        .map(|g| g.name)
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn reset_leaves_an_empty_array() {
    let scratch = Scratch::new();
    let archive = Archive::new(JsonFileBackend::new(scratch.file()));
    archive.append(grave("Tama", 1, DeathCause::OldAge)).unwrap();
    archive.reset().unwrap();

    assert!(archive.list().is_empty());
    let raw = std::fs::read_to_string(scratch.file()).unwrap();
    assert_eq!(raw.trim(), "[]");

    archive.append(grave("Pochi", 2, DeathCause::OldAge)).unwrap();
    assert_eq!(archive.list().len(), 1);
}

// =============================================================================
// Damaged files
// =============================================================================

#[test]
fn corrupt_file_is_moved_aside_and_appends_continue() {
    let scratch = Scratch::new();
    std::fs::write(scratch.file(), "{ not json").unwrap();
    let archive = Archive::new(JsonFileBackend::new(scratch.file()));

    archive.append(grave("Tama", 1, DeathCause::OldAge)).unwrap();
    archive.append(grave("Pochi", 2, DeathCause::Sickness)).unwrap();

    let names: Vec<String> = archive.list().into_iter().map(|g| g.name).collect();
    assert_eq!(names, vec!["Tama", "Pochi"]);

    let aside = scratch.set_aside();
    assert_eq!(aside.len(), 1);
    assert_eq!(std::fs::read_to_string(&aside[0]).unwrap(), "{ not json");
}

#[test]
fn foreign_format_file_is_kept_beside_the_new_archive() {
    let scratch = Scratch::new();
    let legacy = r#"[{"name":"Old","stage":3,"feed_count":20,"generation":1}]"#;
    std::fs::write(scratch.file(), legacy).unwrap();
    let archive = Archive::new(JsonFileBackend::new(scratch.file()));

    assert!(archive.list().is_empty());
    archive.append(grave("Tama", 2, DeathCause::OldAge)).unwrap();
    assert_eq!(archive.list().len(), 1);

    let aside = scratch.set_aside();
    assert_eq!(aside.len(), 1);
    assert_eq!(std::fs::read_to_string(&aside[0]).unwrap(), legacy);
}

#[test]
fn empty_file_is_an_empty_archive() {
    let scratch = Scratch::new();
    std::fs::write(scratch.file(), "\n").unwrap();
    let archive = Archive::new(JsonFileBackend::new(scratch.file()));
    assert!(archive.list().is_empty());
    archive.append(grave("Tama", 1, DeathCause::OldAge)).unwrap();
    assert_eq!(archive.list().len(), 1);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_appends_are_all_kept() {
    let scratch = Scratch::new();
    let archive = Archive::new(JsonFileBackend::new(scratch.file()));

    std::thread::scope(|scope| {
        for generation in 1..=8 {
            let archive = &archive;
            scope.spawn(move || {
                archive
                    .append(grave("pet", generation, DeathCause::OldAge))
                    .unwrap();
            });
        }
    });

    let generations: Vec<u32> = archive.list().iter().map(|g| g.generation).collect();
    assert_eq!(generations, (1..=8).collect::<Vec<u32>>());
}
