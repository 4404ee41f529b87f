use regex::Regex;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_typepass")
}

struct TestContext {
    dir: TempDir,
    words_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let words_path = dir.path().join("words.txt");

        let mut f = File::create(&words_path).unwrap();
        writeln!(f, "a of").unwrap();
        writeln!(f, "the bike").unwrap();

        Self { dir, words_path }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(binary())
            .args(args)
            .env("RUST_LOG", "warn")
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to execute binary")
    }
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn words_arg(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

#[test]
fn test_generate_json() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "generate",
        "-f",
        &words_arg(&ctx.words_path),
        "--min-len",
        "5",
        "--max-len",
        "6",
        "-w",
        "2",
        "--json",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["description"], "ofthe");
    assert_eq!(json["spaced"], "of the");
    assert_eq!(json["cost"], 14);
    assert_eq!(json["wordCount"], 2);
}

#[test]
fn test_generate_table_output() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "generate",
        "--words",
        "a,of,the,bike",
        "--min-len",
        "0",
        "--max-len",
        "10",
        "-w",
        "4",
    ]);
    assert!(out.status.success());

    let text = stdout(&out);
    let re = Regex::new(r"Passphrase\s*\|\s*ofathebike").unwrap();
    assert!(re.is_match(&text), "output was:\n{}", text);
    let re = Regex::new(r"Cost \(min-effort\)\s*\|\s*36").unwrap();
    assert!(re.is_match(&text), "output was:\n{}", text);
}

#[test]
fn test_config_file_with_cli_override() {
    let ctx = TestContext::new();
    let config = ctx.path("params.json");
    fs::write(
        &config,
        r#"{ "min_len": 5, "max_len": 6, "word_count": 2, "topology": "natural" }"#,
    )
    .unwrap();

    // File alone: natural topology, 5..=6 letters.
    let out = ctx.run(&[
        "generate",
        "--config",
        &words_arg(&config),
        "-f",
        &words_arg(&ctx.words_path),
        "--json",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["cost"], 12);

    // Explicit flags win over the file.
    let out = ctx.run(&[
        "generate",
        "--config",
        &words_arg(&config),
        "-f",
        &words_arg(&ctx.words_path),
        "--topology",
        "grid",
        "--min-len",
        "6",
        "--json",
    ]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json["description"], "ofbike");
    assert_eq!(json["cost"], 20);
}

#[test]
fn test_infeasible_exits_with_error() {
    let ctx = TestContext::new();
    let out = ctx.run(&[
        "generate",
        "-f",
        &words_arg(&ctx.words_path),
        "--min-len",
        "20",
        "--max-len",
        "24",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("no combination of 4 words"), "stderr: {}", err);
}

#[test]
fn test_invalid_word_exits_with_error() {
    let ctx = TestContext::new();
    let out = ctx.run(&["generate", "--words", "of,b4,the", "-w", "2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("'4'"));
}

#[test]
fn test_table_export_and_cache() {
    let ctx = TestContext::new();
    let csv_path = ctx.path("natural.csv");
    let out = ctx.run(&[
        "table",
        "--topology",
        "natural",
        "--format",
        "csv",
        "-o",
        &words_arg(&csv_path),
    ]);
    assert!(out.status.success());
    let csv = fs::read_to_string(&csv_path).unwrap();
    let re = Regex::new(r"(?m)^p,z,9\r?$").unwrap();
    assert!(re.is_match(&csv));

    // Tables are cached per topology and cap, written on first use and read afterwards.
    let cache = ctx.path("tables");
    let cache_arg = words_arg(&cache);
    let args = ["--table-cache", cache_arg.as_str(), "cost", "of the"];
    assert!(ctx.run(&args).status.success());
    let grid_file = cache.join("bigram_costs_grid_cap20.json");
    assert!(grid_file.exists());
    let raw: Vec<u32> = serde_json::from_str(&fs::read_to_string(&grid_file).unwrap()).unwrap();
    assert_eq!(raw.len(), 1024);
    assert!(ctx.run(&args).status.success());

    let out = ctx.run(&[
        "--table-cache",
        cache_arg.as_str(),
        "cost",
        "wz",
        "-t",
        "natural",
        "--json",
    ]);
    assert!(out.status.success());
    assert!(cache.join("bigram_costs_natural_cap20.json").exists());
    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(json[0]["total"], 2);
}

#[test]
fn test_table_grid_prints_letters() {
    let ctx = TestContext::new();
    let out = ctx.run(&["table"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Bigram costs: grid (max 11)"));
    let re = Regex::new(r"\|\s*q\s*\|").unwrap();
    assert!(re.is_match(&text));
}

#[test]
fn test_cost_json() {
    let ctx = TestContext::new();
    let out = ctx.run(&["cost", "of the", "bike", "--json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    // Sorted by total.
    assert_eq!(entries[0]["phrase"], "bike");
    assert_eq!(entries[0]["total"], 12);
    assert_eq!(entries[1]["phrase"], "of the");
    assert_eq!(entries[1]["gapCosts"], serde_json::json!([2]));
    assert_eq!(entries[1]["total"], 14);
}

#[test]
fn test_cost_rejects_composer_flags() {
    let ctx = TestContext::new();
    let out = ctx.run(&["cost", "of the", "--min-len", "3"]);
    assert!(!out.status.success());

    let out = ctx.run(&["cost", "--help"]);
    assert!(out.status.success());
    let help = stdout(&out);
    assert!(help.contains("--topology"));
    assert!(help.contains("--path-cap"));
    assert!(!help.contains("--word-count"));
    assert!(!help.contains("--objective"));
}
