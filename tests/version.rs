//! Integration test: the binary starts, reads config, and exits cleanly.

use std::fs;
use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_pinhole"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Expected output to contain version, but got: {}",
        stdout
    );
}

/// Config file pointing logs and store into a scratch directory.
fn scratch_config(name: &str, extra: &str) -> (std::path::PathBuf, std::path::PathBuf) {
    let dir = std::env::temp_dir().join(format!("pinhole_bin_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!(
            "log_file_path = {:?}\nstore_path = {:?}\n{extra}",
            dir.join("pinhole.log"),
            dir.join("store.json"),
        ),
    )
    .unwrap();
    (dir, config)
}

#[test]
fn exposure_subcommand_uses_config_defaults() {
    let (dir, config) = scratch_config(
        "exposure",
        "[defaults]\nfocal_length = 48.0\ncondition = \"Bright Sun\"\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_pinhole"))
        .args(["--config", config.to_str().unwrap(), "exposure"])
        .env_remove("PINHOLE_STORE")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("f/160.0"), "got: {stdout}");
    assert!(stdout.contains("Exposure:    1.0s"), "got: {stdout}");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn unknown_film_exits_non_zero() {
    let (dir, config) = scratch_config("bad_film", "");

    let output = Command::new(env!("CARGO_BIN_EXE_pinhole"))
        .args(["--config", config.to_str().unwrap(), "--film", "110", "exposure"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown film format: 110"), "got: {stderr}");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn profile_saved_by_one_run_is_listed_by_the_next() {
    let (dir, config) = scratch_config("profiles", "");
    let config = config.to_str().unwrap();

    let save = Command::new(env!("CARGO_BIN_EXE_pinhole"))
        .args(["--config", config, "--iso", "400", "profile", "save", "street"])
        .env_remove("PINHOLE_STORE")
        .output()
        .expect("Failed to execute binary");
    assert!(save.status.success());

    let list = Command::new(env!("CARGO_BIN_EXE_pinhole"))
        .args(["--config", config, "profile", "list"])
        .env_remove("PINHOLE_STORE")
        .output()
        .expect("Failed to execute binary");
    let stdout = String::from_utf8_lossy(&list.stdout);
    assert!(stdout.contains("street"), "got: {stdout}");
    assert!(stdout.contains("ISO 400"), "got: {stdout}");

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn one_shot_commands_run_without_a_writable_log_directory() {
    let dir = std::env::temp_dir().join("pinhole_bin_no_log_dir");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    // a plain file where the log directory should be
    let blocker = dir.join("blocker");
    fs::write(&blocker, "").unwrap();
    let config = dir.join("config.toml");
    fs::write(
        &config,
        format!(
            "log_file_path = {:?}\nstore_path = {:?}\n",
            blocker.join("logs").join("pinhole.log"),
            dir.join("store.json"),
        ),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pinhole"))
        .args(["--config", config.to_str().unwrap(), "films"])
        .env_remove("PINHOLE_STORE")
        .output()
        .expect("Failed to execute binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("6x9"));

    let _ = fs::remove_dir_all(dir);
}
