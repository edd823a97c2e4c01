use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cashly(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashly").unwrap();
    cmd.env("CASHLY_DATA_DIR", dir.path())
        .env_remove("CASHLY_LOG")
        .current_dir(dir.path());
    cmd
}

#[test]
fn test_ledger_flow() {
    let dir = TempDir::new().unwrap();

    cashly(&dir)
        .args(["entry", "add", "income", "1000", "Nomina", "-c", "Salario", "-d", "2025-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added ent-"));
    cashly(&dir)
        .args(["entry", "add", "expense", "600", "Mercado", "-c", "Comida", "-d", "2025-03-05"])
        .assert()
        .success();
    cashly(&dir)
        .args(["entry", "add", "expense", "200", "Cine", "-c", "Ocio", "-d", "2025-03-08"])
        .assert()
        .success();

    let listing = cashly(&dir).args(["entry", "list"]).assert().success();
    let stdout = String::from_utf8(listing.get_output().stdout.clone()).unwrap();
    let cine = stdout.find("Cine").unwrap();
    let nomina = stdout.find("Nomina").unwrap();
    assert!(cine < nomina, "newest entry should be listed first");

    cashly(&dir)
        .args(["entry", "list", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nomina").and(predicate::str::contains("Mercado").not()));

    cashly(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1000.00"));

    cashly(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("$800.00")
                .and(predicate::str::contains("20.0%"))
                .and(predicate::str::contains("used 80.0% of your budget")),
        );

    cashly(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comida").and(predicate::str::contains("$600.00")));

    let output = dir.path().join("ledger.csv");
    cashly(&dir)
        .args(["export", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 entries"));
    let csv = std::fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("fecha,tipo,descripcion,categoria,monto\n2025-03-08,expense,Cine,Ocio,200\n"));

    cashly(&dir)
        .args(["entry", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    cashly(&dir)
        .args(["entry", "clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 3 entries"));

    cashly(&dir)
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));

    cashly(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("added expense")
                .and(predicate::str::contains("cleared 3 entries")),
        );
}

#[test]
fn test_invalid_entry_fails_without_change() {
    let dir = TempDir::new().unwrap();

    cashly(&dir)
        .args(["entry", "add", "expense", "-5", "Cafe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
    cashly(&dir)
        .args(["entry", "add", "expense", "5", "   "])
        .assert()
        .failure();
    cashly(&dir)
        .args(["entry", "add", "transfer", "5", "Cafe"])
        .assert()
        .failure();

    cashly(&dir)
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_invalid_budget_fails() {
    let dir = TempDir::new().unwrap();

    cashly(&dir)
        .args(["budget", "set", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than 0"));
    cashly(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set a monthly budget"));
}

#[test]
fn test_empty_export_is_a_notice() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("empty.csv");

    cashly(&dir)
        .args(["export", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to export"));
    assert!(!output.exists());
}

#[test]
fn test_remove_by_prefix_and_unknown_id() {
    let dir = TempDir::new().unwrap();

    let added = cashly(&dir)
        .args(["entry", "add", "expense", "12.5", "Taxi", "-c", "Transporte"])
        .assert()
        .success();
    let stdout = String::from_utf8(added.get_output().stdout.clone()).unwrap();
    let id = stdout
        .split_whitespace()
        .find(|w| w.starts_with("ent-"))
        .unwrap()
        .to_string();

    cashly(&dir)
        .args(["entry", "remove", "ent-zzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing removed"));

    cashly(&dir)
        .args(["entry", "remove", "0f8c2a8e-5b1d-4c3e-9a7f-2d6b1e4c9a30"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No entry matches '0f8c2a8e-5b1d-4c3e-9a7f-2d6b1e4c9a30'; nothing removed",
        ));

    cashly(&dir)
        .args(["entry", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    cashly(&dir)
        .args(["entry", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."));
}

#[test]
fn test_corrupt_ledger_starts_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("cashly_entries"), "{not json").unwrap();
    std::fs::write(dir.path().join("data").join("cashly_budget"), "-20").unwrap();

    cashly(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("$0.00").and(predicate::str::contains("Set a monthly budget")),
        );
}
