use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_category-totals"))
}

#[test]
fn prints_totals_and_exits_zero() {
    let out = bin().arg("tests/fixtures/scenario_a.csv").output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap().trim_end(),
        r#"[{"Category":"A","Value":15},{"Category":"B","Value":3}]"#
    );
}

#[test]
fn failure_is_reported_as_json_with_exit_zero() {
    let out = bin()
        .arg("tests/fixtures/does_not_exist.csv")
        .env("RUST_LOG", "info")
        .output()
        .unwrap();
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["error"], "FileNotFound");
    // Logs stay on stderr.
    assert!(!out.stderr.is_empty());
}

#[test]
fn tab_delimiter_and_sorting_flags() {
    let out = bin()
        .args(["tests/fixtures/tabs.tsv", "--delimiter", "\\t", "--sort-by-category"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v, serde_json::json!([{"Category": "A", "Value": 4}, {"Category": "B", "Value": 2}]));
}

#[test]
fn pretty_flag_indents_output() {
    let out = bin()
        .args(["tests/fixtures/scenario_a.csv", "--pretty"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.trim_end().lines().count() > 1);
    assert!(text.contains("\n  {"));
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v, serde_json::json!([{"Category": "A", "Value": 15}, {"Category": "B", "Value": 3}]));
}

#[test]
fn input_path_falls_back_to_env() {
    let out = bin()
        .env("CATEGORY_TOTALS_INPUT", "tests/fixtures/all_non_numeric.csv")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim_end(), "[]");
}
