#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

pub fn fjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fjour").unwrap();
    cmd.env_remove("FJOUR_ROOT");
    cmd.env_remove("FJOUR_LOG");
    cmd
}

/// Initialize a journal in a fresh temp directory
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    fjour_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Run a command inside the journal and return its stdout
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = fjour_cmd()
        .current_dir(temp.path())
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "fjour {:?} failed", args);
    String::from_utf8(output.stdout).unwrap()
}
