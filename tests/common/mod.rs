#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub root: PathBuf,
}

impl TestEnv {
    /// Isolated HOME plus the fixture corpus described in `make_fixture_corpus`.
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let root = make_fixture_corpus(tmp.path());
        Self {
            _tmp: tmp,
            home,
            root,
        }
    }

    /// Same isolation, but the corpus root is an empty directory.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let root = tmp.path().join("corpus");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&root).expect("create empty corpus");
        Self {
            _tmp: tmp,
            home,
            root,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("receipt-stats");
        cmd.env("HOME", &self.home)
            .env_remove("RECEIPT_STATS_ROOT")
            .env_remove("RECEIPT_STATS_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn cmd_rooted(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd_rooted()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_text(&self, args: &[&str]) -> String {
        let out = self
            .cmd_rooted()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 output")
    }
}

fn line(category: &str) -> Value {
    json!({"category": category, "words": [{"text": "x"}]})
}

fn total_line(x1: i64, y1: i64, x2: i64, y2: i64) -> Value {
    json!({
        "category": "total.total_price",
        "words": [{"text": "10.00", "quad": {
            "x1": x1, "y1": y1, "x2": x2, "y2": y2,
            "x3": x2, "y3": y2, "x4": x1, "y4": y2
        }}]
    })
}

fn write_doc(root: &Path, partition: &str, name: &str, body: &str) {
    let dir = root.join(partition).join("json");
    fs::create_dir_all(&dir).expect("create partition dir");
    fs::write(dir.join(name), body).expect("write document");
}

/// dev: two receipts plus one malformed file.
/// test: one receipt plus one empty document.
/// train: absent.
///
/// Expected: 3 documents, 2 skipped; total 3, subtotal 1; dev image 0 and
/// test image "t-1" carry two tax lines each; total midpoints (5,5),
/// (25,50), (15,20); 13 categorized lines with `void_menu.price` rarest.
fn make_fixture_corpus(base: &Path) -> PathBuf {
    let root = base.join("corpus");

    let dev_1 = json!({
        "meta": {"image_id": 0, "split": "dev"},
        "valid_line": [
            total_line(0, 0, 10, 10),
            line("sub_total.subtotal_price"),
            line("sub_total.tax_price"),
            line("sub_total.tax_price"),
            line("menu.nm")
        ]
    });
    let dev_2 = json!({
        "meta": {"image_id": 1, "split": "dev"},
        "valid_line": [
            total_line(20, 40, 30, 60),
            line("sub_total.tax_price"),
            line("menu.nm"),
            line("menu.nm")
        ]
    });
    let test_1 = json!({
        "meta": {"image_id": "t-1", "split": "test"},
        "valid_line": [
            total_line(10, 10, 20, 30),
            line("sub_total.tax_price"),
            line("sub_total.service_TAX"),
            line("void_menu.price")
        ]
    });

    write_doc(&root, "dev", "receipt_00000.json", &dev_1.to_string());
    write_doc(&root, "dev", "receipt_00001.json", &dev_2.to_string());
    write_doc(&root, "dev", "receipt_broken.json", "{\"valid_line\": [");
    write_doc(&root, "test", "receipt_00000.json", &test_1.to_string());
    write_doc(&root, "test", "receipt_empty.json", "{}");

    root
}
