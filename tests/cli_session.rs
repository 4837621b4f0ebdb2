use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SAMPLE: &str = "id,name,aisle,department,price\n\
                      1,Chocolate Sandwich Cookies,cookies cakes,snacks,3.50\n\
                      2,All-Seasons Salt,spices seasonings,pantry,4.99\n\
                      3,Robust Golden Unsweetened Oolong Tea,tea,beverages,2.49\n";

fn seed_db(dir: &Path) {
    let db = dir.join("db");
    fs::create_dir_all(&db).unwrap();
    fs::write(db.join("products.csv"), SAMPLE).unwrap();
    fs::write(db.join("products_default.csv"), SAMPLE).unwrap();
}

fn stockroom(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockroom").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn list_prints_ids_and_names() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_db(temp_dir.path());

    stockroom(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("There are 3 products"))
        .stdout(predicates::str::contains("LISTING 3 PRODUCTS"))
        .stdout(predicates::str::contains("#1: Chocolate Sandwich Cookies"))
        .stdout(predicates::str::contains("#3: Robust Golden Unsweetened Oolong Tea"));
}

#[test]
fn create_appends_and_persists() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_db(temp_dir.path());

    stockroom(temp_dir.path())
        .write_stdin("create\nSparkling Water\nC7\nbeverages\n2.5\n1.25\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("PRICE NOT IN 'x.xx' FORMAT"))
        .stdout(predicates::str::contains("CREATED PRODUCT #4"));

    let written =
        fs::read_to_string(temp_dir.path().join("db").join("products.csv")).unwrap();
    assert!(written.ends_with("4,Sparkling Water,C7,beverages,1.25\n"));
}

#[test]
fn destroy_removes_the_row() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_db(temp_dir.path());

    stockroom(temp_dir.path())
        .write_stdin("destroy\n9\n2\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("Product ID Not Found"))
        .stdout(predicates::str::contains("DELETED PRODUCT #2"));

    let written =
        fs::read_to_string(temp_dir.path().join("db").join("products.csv")).unwrap();
    assert!(!written.contains("All-Seasons Salt"));
    assert!(written.contains("Chocolate Sandwich Cookies"));
}

#[test]
fn reset_restores_the_default_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_db(temp_dir.path());
    let active = temp_dir.path().join("db").join("products.csv");

    // Edit the active store first so reset has something to undo.
    stockroom(temp_dir.path())
        .write_stdin("create\nSparkling Water\nC7\nbeverages\n1.25\n")
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&active).unwrap(), SAMPLE);

    stockroom(temp_dir.path())
        .write_stdin("reset\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("RESETTING DEFAULTS"));
    assert_eq!(fs::read_to_string(&active).unwrap(), SAMPLE);
}

#[test]
fn unrecognized_operation_leaves_the_store_untouched() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed_db(temp_dir.path());
    let active = temp_dir.path().join("db").join("products.csv");
    let before = fs::read_to_string(&active).unwrap();

    stockroom(temp_dir.path())
        .write_stdin("frobnicate\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("not recognized"))
        .stdout(predicates::str::contains("'List'"));

    assert_eq!(fs::read_to_string(&active).unwrap(), before);
}

#[test]
fn missing_store_file_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockroom(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Store file not found"));
}

#[test]
fn config_file_can_relocate_the_store() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("stock.csv"), SAMPLE).unwrap();
    fs::write(data.join("stock_default.csv"), SAMPLE).unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"db_dir": "data", "active_file": "stock.csv", "default_file": "stock_default.csv"}"#,
    )
    .unwrap();

    stockroom(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("#2: All-Seasons Salt"));
}
