//! Command line tests for the `vagrant_box_bundler` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const OVF: &str = r#"<Envelope><Network>
  <Adapter slot="0" enabled="true" MACAddress="0800271A2B3C" type="82540EM"/>
</Network></Envelope>"#;

fn artifact(temp: &TempDir) -> (String, String) {
    let disk = temp.path().join("disk.vmdk");
    let ovf = temp.path().join("web.ovf");
    fs::write(&disk, "disk").unwrap();
    fs::write(&ovf, OVF).unwrap();
    (disk.display().to_string(), ovf.display().to_string())
}

fn bundler() -> Command {
    Command::cargo_bin("vagrant_box_bundler").unwrap()
}

#[test]
fn builds_box_from_flags() {
    let temp = TempDir::new().unwrap();
    let (disk, ovf) = artifact(&temp);
    let output = format!("{}/{{{{.BuildName}}}}.box", temp.path().display());

    bundler()
        .args(["-f", &disk, "-f", &ovf, "-n", "web", "-o", &output])
        .assert()
        .success()
        .stdout(predicate::str::contains("Copying: "))
        .stdout(predicate::str::contains("'virtualbox' provider box:"))
        .stdout(predicate::str::contains("web.box"));

    assert!(temp.path().join("web.box").is_file());
}

#[test]
fn flags_override_settings_file() {
    let temp = TempDir::new().unwrap();
    let (disk, ovf) = artifact(&temp);
    let settings = temp.path().join("box.toml");
    fs::write(
        &settings,
        format!(
            "output = \"{}/{{{{ .BuildName }}}}_{{{{ .Provider }}}}.box\"\npacker_build_name = \"from-file\"\n",
            temp.path().display()
        ),
    )
    .unwrap();

    bundler()
        .args(["-f", &disk, "-f", &ovf, "-c"])
        .arg(&settings)
        .args(["-n", "from-flag"])
        .assert()
        .success();

    assert!(temp.path().join("from-flag_virtualbox.box").is_file());
    assert!(!temp.path().join("from-file_virtualbox.box").exists());
}

#[test]
fn missing_descriptor_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    let (disk, _) = artifact(&temp);

    bundler()
        .args(["-f", &disk, "-n", "web"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("descriptor file couldn't be found"));
}

#[test]
fn requires_artifact_files() {
    bundler().args(["-n", "web"]).assert().failure();
}
