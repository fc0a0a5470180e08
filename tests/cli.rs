use assert_cmd::Command;
use predicates::prelude::*;

fn palette_cmd() -> Command {
    Command::cargo_bin("popuppalette").expect("binary exists")
}

#[test]
fn help_describes_the_palette() {
    palette_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Popup colour palette"));
}

#[test]
fn version_flag_prints_package_version() {
    palette_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_wayland_env() {
    palette_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("RUST_LOG", "error")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}

#[test]
fn unknown_arguments_are_rejected() {
    palette_cmd()
        .arg("--daemon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn schema_dump_lists_config_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("keybindings")
                .and(predicate::str::contains("standalone_position"))
                .and(predicate::str::contains("marker_file")),
        );
}
