use std::fs;
use std::path::Path;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_anchor-propagation"))
}

fn seed(dir: &Path, edges: &str) {
    fs::write(
        dir.join("v.jsonl"),
        "{\"id\":\"A\",\"label\":\"Bernie\",\"prelabelled\":true}\n{\"id\":\"B\",\"label\":\"\",\"prelabelled\":false}\n",
    )
    .unwrap();
    fs::write(dir.join("e.jsonl"), edges).unwrap();
}

fn args(dir: &Path, rounds: &str) -> Vec<String> {
    vec![
        rounds.to_string(),
        "--vertices".into(),
        dir.join("v.jsonl").display().to_string(),
        "--edges".into(),
        dir.join("e.jsonl").display().to_string(),
        "--output".into(),
        dir.join("out.jsonl").display().to_string(),
    ]
}

#[test]
fn success_exits_zero_and_writes_output() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), "{\"src\":\"B\",\"dst\":\"A\",\"weight\":5}\n");
    let status = bin().args(args(dir.path(), "1")).status().unwrap();
    assert!(status.success());
    let out = fs::read_to_string(dir.path().join("out.jsonl")).unwrap();
    assert!(out.contains("{\"id\":\"B\",\"label\":\"Bernie\"}"));
}

#[test]
fn zero_rounds_is_a_config_failure() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), "");
    let out = bin().args(args(dir.path(), "0")).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("rounds"));
    assert!(!dir.path().join("out.jsonl").exists());
}

#[test]
fn dangling_edge_names_the_id() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), "{\"src\":\"B\",\"dst\":\"ghost\",\"weight\":5}\n");
    let out = bin().args(args(dir.path(), "3")).output().unwrap();
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("ghost"));
    assert!(!dir.path().join("out.jsonl").exists());
}

#[test]
fn help_names_the_default_anchor_set() {
    let out = bin().arg("--help").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("default community labels"));
}
