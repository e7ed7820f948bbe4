//! End-to-end pipeline runs against a temporary workspace.

use favanims::config::AppConfig;
use favanims::services::manifest::MANIFEST_TEMPLATE;
use favanims::workflow::{run, RunOutcome, RunSummary};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

fn test_config(root: &Path) -> AppConfig {
    AppConfig {
        root: root.to_path_buf(),
        manifest_name: "FavouriteAnims.xml".to_string(),
        staging_dir: root.join("staging"),
        assets_dir: root.join("anims"),
        asset_ext: "ycd".to_string(),
        settle: Duration::ZERO,
        unrar_tool: None,
        assume_yes: true,
        json: false,
    }
}

fn create_test_zip(dir: &Path, name: &str, files: &[(&str, &[u8])]) {
    let file = fs::File::create(dir.join(name)).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    for (entry_name, content) in files {
        writer.start_file(entry_name.to_string(), options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
}

fn completed(outcome: RunOutcome) -> RunSummary {
    match outcome {
        RunOutcome::Completed(summary) => summary,
        RunOutcome::Cancelled => panic!("run was cancelled"),
    }
}

#[test]
fn test_full_run_extracts_relocates_scans_and_merges() {
    let workspace = TempDir::new().unwrap();
    let config = test_config(workspace.path());
    fs::create_dir_all(&config.staging_dir).unwrap();

    create_test_zip(
        &config.staging_dir,
        "pack.zip",
        &[
            ("clips/a.xml", b"<Anim dict=\"club_duo\" name=\"a\" />\n"),
            ("notes/b.txt", b"<Anim dict=\"solo_test\" name=\"b\" />\n"),
            ("payload/clip.ycd", b"\x00\x01binary"),
        ],
    );

    let mut confirm = |_q: &str| panic!("no prompt expected with assume_yes");
    let summary = completed(run(&config, &mut confirm).unwrap());

    assert_eq!(summary.archives_found, 1);
    assert_eq!(summary.archives_extracted, 1);
    assert_eq!(summary.assets_moved, 1);
    assert_eq!(summary.markers_found, 2);
    assert!(summary.manifest_updated);

    // The binary payload landed in the flat assets folder.
    assert!(config.assets_dir.join("clip.ycd").is_file());
    assert!(!config.staging_dir.join("pack/payload/clip.ycd").exists());

    // The manifest was bootstrapped from the template and merged: SOLO
    // block before DUO block, both before the closing tag.
    let manifest = fs::read_to_string(workspace.path().join("FavouriteAnims.xml")).unwrap();
    assert!(manifest.starts_with("<?xml version=\"1.0\"?>\n<PedAnims>\n"));

    let solo_header = manifest.find("\t<Anim dict=\"SOLO\" name=\"\" />").unwrap();
    let solo_entry = manifest
        .find("\t<Anim dict=\"solo_test\" name=\"b\" />")
        .unwrap();
    let duo_header = manifest.find("\t<Anim dict=\"DUO\" name=\"\" />").unwrap();
    let duo_entry = manifest
        .find("\t<Anim dict=\"club_duo\" name=\"a\" />")
        .unwrap();
    let closing = manifest.find("</PedAnims>").unwrap();

    assert!(solo_header < solo_entry);
    assert!(solo_entry < duo_header);
    assert!(duo_header < duo_entry);
    assert!(duo_entry < closing);
}

#[test]
fn test_empty_staging_leaves_manifest_untouched() {
    let workspace = TempDir::new().unwrap();
    let config = test_config(workspace.path());
    fs::create_dir_all(&config.staging_dir).unwrap();
    fs::write(
        workspace.path().join("FavouriteAnims.xml"),
        MANIFEST_TEMPLATE,
    )
    .unwrap();

    let mut confirm = |_q: &str| panic!("no prompt expected with assume_yes");
    let summary = completed(run(&config, &mut confirm).unwrap());

    assert_eq!(summary.archives_found, 0);
    assert_eq!(summary.archives_extracted, 0);
    assert_eq!(summary.assets_moved, 0);
    assert_eq!(summary.markers_found, 0);
    assert!(!summary.manifest_updated);

    assert_eq!(
        fs::read_to_string(workspace.path().join("FavouriteAnims.xml")).unwrap(),
        MANIFEST_TEMPLATE
    );
}

#[test]
fn test_declining_manifest_creation_cancels_the_run() {
    let workspace = TempDir::new().unwrap();
    let mut config = test_config(workspace.path());
    config.assume_yes = false;

    let mut confirm = |_q: &str| false;
    let outcome = run(&config, &mut confirm).unwrap();

    assert!(matches!(outcome, RunOutcome::Cancelled));
    assert!(!workspace.path().join("FavouriteAnims.xml").exists());
    assert!(!config.staging_dir.exists());
}

#[test]
fn test_declining_staging_dir_creation_cancels_the_run() {
    let workspace = TempDir::new().unwrap();
    let mut config = test_config(workspace.path());
    config.assume_yes = false;
    fs::write(
        workspace.path().join("FavouriteAnims.xml"),
        MANIFEST_TEMPLATE,
    )
    .unwrap();

    // The manifest exists, so the only prompt is the staging directory.
    let mut confirm = |_q: &str| false;
    let outcome = run(&config, &mut confirm).unwrap();

    assert!(matches!(outcome, RunOutcome::Cancelled));
    assert!(!config.staging_dir.exists());
}
