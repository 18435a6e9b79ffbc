//! End-to-end menu sessions driven through stdin of the real binary

mod common;

use common::{add_item, backpack_cmd, script};
use predicates::prelude::*;

#[test]
fn test_empty_listing() {
    backpack_cmd()
        .write_stdin(script(&["4", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Backpack contents (0/10) ---"))
        .stdout(predicate::str::contains("Backpack is empty."));
}

#[test]
fn test_add_new_item_is_listed() {
    let input = [add_item("Rifle", "Weapon", "2").as_slice(), &["0"]].concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Item added successfully to slot 1."))
        .stdout(predicate::str::contains("(1/10)"))
        .stdout(predicate::str::contains(
            "1) Name: Rifle | Kind: Weapon | Quantity: 2",
        ));
}

#[test]
fn test_add_same_name_different_case_merges() {
    let input = [
        add_item("Rifle", "Weapon", "2").as_slice(),
        &add_item("rifle", "Weapon", "3"),
        &["3", "RIFLE", "0"],
    ]
    .concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Quantity updated to 5"))
        .stdout(predicate::str::contains("Item found:"))
        .stdout(predicate::str::contains(
            "1) Name: Rifle | Kind: Weapon | Quantity: 5",
        ))
        .stdout(predicate::str::contains("2) Name:").not());
}

#[test]
fn test_merge_keeps_first_kind() {
    let input = [
        add_item("Kit", "Heal", "1").as_slice(),
        &add_item("KIT", "Weapon", "1"),
        &["0"],
    ]
    .concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1) Name: Kit | Kind: Heal | Quantity: 2",
        ));
}

#[test]
fn test_full_backpack_rejects_new_item() {
    let mut input: Vec<&str> = Vec::new();
    let names = ["A", "B", "C"];
    for name in names {
        input.extend(add_item(name, "Misc", "1"));
    }
    input.extend(["1", "0"]);

    backpack_cmd()
        .args(["--capacity", "3"])
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Backpack is full!"))
        .stdout(predicate::str::contains("(3/3)"))
        .stdout(predicate::str::contains("See you next time!"));
}

#[test]
fn test_zero_quantity_rejected() {
    let input = [add_item("Kit", "Heal", "0").as_slice(), &["0"]].concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid quantity. Operation cancelled."))
        .stdout(predicate::str::contains("Backpack is empty."));
}

#[test]
fn test_non_numeric_quantity_rejected() {
    let input = [add_item("Kit", "Heal", "three").as_slice(), &["0"]].concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid quantity."))
        .stdout(predicate::str::contains("Item added").not());
}

#[test]
fn test_remove_missing_item() {
    backpack_cmd()
        .write_stdin(script(&["2", "Rifle", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Item 'Rifle' not found"));
}

#[test]
fn test_remove_middle_item_compacts() {
    let input = [
        add_item("A", "Misc", "1").as_slice(),
        &add_item("B", "Misc", "2"),
        &add_item("C", "Misc", "3"),
        &["2", "b", "4", "0"],
    ]
    .concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Item 'B' removed successfully."))
        .stdout(predicate::str::contains(
            "1) Name: A | Kind: Misc | Quantity: 1\n2) Name: C | Kind: Misc | Quantity: 3",
        ));
}

#[test]
fn test_long_name_truncated() {
    let input = [
        add_item("An extremely long item name that keeps going", "Misc", "1").as_slice(),
        &["0"],
    ]
    .concat();
    backpack_cmd()
        .write_stdin(script(&input))
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: An extremely long item name t |"));
}

#[test]
fn test_invalid_menu_option() {
    backpack_cmd()
        .write_stdin(script(&["9", "hello", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option. Try again."));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    backpack_cmd()
        .write_stdin("1\nRifle\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("See you next time!").not());
}
