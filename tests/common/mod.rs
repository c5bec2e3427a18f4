#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = fs::canonicalize(tmp.path()).expect("canonical temp dir");
        let home = root.join("home");
        let project = home.join("work/app");
        fs::create_dir_all(&project).expect("create isolated project");

        Self {
            _tmp: tmp,
            home,
            project,
        }
    }

    /// Runs from inside the project with an isolated `HOME`.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("recite");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.project);
        cmd
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_global(&self, content: &str) -> PathBuf {
        write(&self.home, "CLAUDE.md", content)
    }

    pub fn write_project(&self, content: &str) -> PathBuf {
        write(&self.project, "CLAUDE.md", content)
    }

    pub fn install_canary(&self, scripts: &[&str]) {
        for s in scripts {
            write(&self.home.join(".claude/plugins"), s, "#!/bin/sh\n");
        }
    }

    pub fn write_canary_state(&self, raw: &str) {
        write(&self.home.join(".claude"), "canary-state.json", raw);
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("create dir");
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}
