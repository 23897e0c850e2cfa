use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUDGET_JSON: &str = r#"{
  "incomes": [{ "amount": 200000, "cadence": "monthly", "source": "Salary" }],
  "fixed_expenses": [{ "name": "Rent", "amount": 80000, "cadence": "monthly" }],
  "variable_preferences": { "save_rate": 0.2 },
  "goals": []
}"#;

fn stashflow(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stashflow").unwrap();
    cmd.env("STASHFLOW_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG")
        .env_remove("STASHFLOW_TIER");
    cmd
}

fn write_budget(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn plan_prints_weekly_table() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(&dir, "budget.json", BUDGET_JSON);

    stashflow(&dir)
        .args(["plan", "--tier", "paid", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("week of 2026-10-12"))
        .stdout(predicate::str::contains("$460.30"))
        .stdout(predicate::str::contains("$55.24"))
        .stdout(predicate::str::contains("$220.94"))
        .stdout(predicate::str::contains("warning"));
}

#[test]
fn plan_uses_configured_currency_and_shows_outlook() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(&dir, "budget.json", BUDGET_JSON);
    write_budget(&dir, "config.json", r#"{ "currency_symbol": "€" }"#);

    stashflow(&dir)
        .args(["plan", "--tier", "paid", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("€460.30"))
        .stdout(predicate::str::contains("Saving €55.24/week grows to €"))
        .stdout(predicate::str::contains("in 10 years at 8.0%"));

    stashflow(&dir)
        .args(["project", "100", "--years", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€215.89"));
}

#[test]
fn plan_json_output_uses_cents() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(&dir, "budget.json", BUDGET_JSON);

    stashflow(&dir)
        .args(["plan", "--format", "json", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"income\": 46030"))
        .stdout(predicate::str::contains("\"tier\": \"free\""))
        .stdout(predicate::str::contains("\"engine_version\": 1"));
}

#[test]
fn plan_strict_rejects_unknown_cadence() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(
        &dir,
        "budget.json",
        r#"{ "incomes": [{ "amount": 100000, "cadence": "fortnightly" }] }"#,
    );

    stashflow(&dir)
        .args(["plan", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .success();

    stashflow(&dir)
        .args(["plan", "--strict", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cadence 'fortnightly'"));
}

#[test]
fn plan_enforces_limits_only_when_asked() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(
        &dir,
        "budget.json",
        r#"{ "incomes": [
              { "amount": 1000, "cadence": "weekly" },
              { "amount": 1000, "cadence": "weekly" },
              { "amount": 1000, "cadence": "weekly" }
           ] }"#,
    );

    stashflow(&dir)
        .args(["plan", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .success()
        .stderr(predicate::str::contains("Free plan allows 2 incomes"));

    stashflow(&dir)
        .args(["plan", "--enforce-limits", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan limit exceeded"));
}

#[test]
fn plan_rejects_negative_amounts() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(
        &dir,
        "budget.json",
        r#"{ "incomes": [{ "amount": -500, "cadence": "weekly" }] }"#,
    );

    stashflow(&dir)
        .arg("plan")
        .arg(&budget)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn project_shows_compound_growth() {
    let dir = TempDir::new().unwrap();

    stashflow(&dir)
        .args(["project", "100", "--rate", "0.08", "--years", "1,10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$108.00"))
        .stdout(predicate::str::contains("$215.89"));
}

#[test]
fn grow_summarizes_contributions() {
    let dir = TempDir::new().unwrap();

    stashflow(&dir)
        .args(["grow", "--contribution", "100", "--months", "24", "--rate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("After 24 months: $2400.00"));
}

#[test]
fn template_import_then_plan() {
    let dir = TempDir::new().unwrap();
    let template = dir.path().join("template.csv");
    let budget = dir.path().join("imported.json");

    stashflow(&dir)
        .arg("template")
        .arg("--output")
        .arg(&template)
        .assert()
        .success();

    stashflow(&dir)
        .arg("import")
        .arg(&template)
        .arg("--output")
        .arg(&budget)
        .assert()
        .success()
        .stderr(predicate::str::contains("Imported 5 row(s)"));

    stashflow(&dir)
        .args(["plan", "--today", "2026-10-17"])
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn import_reports_bad_rows() {
    let dir = TempDir::new().unwrap();
    let csv = write_budget(
        &dir,
        "budget.csv",
        "Category,Type,Amount,Frequency,Description\n\
         Salary,Income,2000,monthly,\n\
         Boat,Loan,50,monthly,\n",
    );

    stashflow(&dir)
        .arg("import")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"incomes\""))
        .stderr(predicate::str::contains("line 3: Unknown type 'Loan'"));
}

#[test]
fn limits_reports_status() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(&dir, "budget.json", BUDGET_JSON);

    stashflow(&dir)
        .arg("limits")
        .arg(&budget)
        .assert()
        .success()
        .stdout(predicate::str::contains("Within free tier limits."));
}

#[test]
fn report_from_saved_line_items() {
    let dir = TempDir::new().unwrap();
    let budget = write_budget(&dir, "budget.json", BUDGET_JSON);
    let items = dir.path().join("items.json");
    let variance = dir.path().join("variance.csv");

    stashflow(&dir)
        .args(["plan", "--tier", "paid", "--today", "2026-10-17", "--items"])
        .arg(&items)
        .arg(&budget)
        .assert()
        .success();

    stashflow(&dir)
        .arg("report")
        .arg(&items)
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance Report"))
        .stdout(predicate::str::contains("LIABILITIES"));

    stashflow(&dir)
        .arg("report")
        .arg(&items)
        .arg("--output")
        .arg(&variance)
        .assert()
        .success();

    let csv = std::fs::read_to_string(&variance).unwrap();
    assert!(csv.starts_with("Category,Planned ($),Actual ($),Variance ($),Variance (%)"));
    assert!(csv.contains("Rent,184.12,0.00,-184.12,-100.0"));
}

#[test]
fn init_creates_settings_and_template() {
    let dir = TempDir::new().unwrap();

    stashflow(&dir).arg("init").assert().success();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("budget-template.csv").exists());

    stashflow(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:    true"))
        .stdout(predicate::str::contains("Default tier:        free"));
}
