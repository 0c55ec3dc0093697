//! Integration tests for CLI commands.

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn card_payload() -> Value {
    json!([
        {
            "title": "Salads",
            "image48Id": "salads.png",
            "itemCards": [
                {"card": {"info": {"id": 101, "name": "Greek Salad", "price": 45000, "isVeg": 1,
                    "imageId": "greek.png", "description": "feta and olives"}}},
                {"card": {"info": {"id": 102, "name": "Chicken Caesar", "price": 52500,
                    "itemAttribute": {"vegClassifier": "NONVEG"}}}}
            ]
        },
        {"title": "Coming Soon", "itemCards": []}
    ])
}

/// Temp workspace with a payload, a config, and a small asset tree.
fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().unwrap();
    let payload = dir.path().join("menu.json");
    fs::write(&payload, serde_json::to_string(&card_payload()).unwrap()).unwrap();

    for rel in ["public/img/menu/lg/greek.png", "public/img/menu/sm/salads.png"] {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"img").unwrap();
    }
    let config = dir.path().join("menukit.toml");
    fs::write(
        &config,
        "[assets]\nroot = \"public/img\"\nplaceholder = \"/img/none.svg\"\n",
    )
    .unwrap();
    (dir, payload, config)
}

fn menukit(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_menukit"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_slugify() {
    let (_dir, _, config) = workspace();
    let output = menukit(&config, &["slugify", "Greek  Salad!"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "greek-salad");
}

#[test]
fn test_price_formats() {
    let (_dir, _, config) = workspace();
    assert_eq!(stdout(&menukit(&config, &["price", "₹1,234.50"])), "1234.5");
    assert_eq!(stdout(&menukit(&config, &["price", "450", "--minor"])), "4.5");
    assert_eq!(stdout(&menukit(&config, &["price", "free"])), "0");
}

#[test]
fn test_nutrition_sources() {
    let (_dir, _, config) = workspace();
    let structured = menukit(
        &config,
        &["nutrition", "--structured", r#"{"Energy": "516 kcal"}"#, "--text", "protein-9g"],
    );
    assert_eq!(stdout_json(&structured), json!({"calories": 516.0}));

    let text = menukit(&config, &["nutrition", "--text", "protein-20g fat-5g"]);
    assert_eq!(stdout_json(&text), json!({"protein": 20.0, "fat": 5.0}));

    let invalid = menukit(&config, &["nutrition", "--structured", "{nope"]);
    assert!(!invalid.status.success());
    assert!(String::from_utf8_lossy(&invalid.stderr).contains("--structured"));
}

#[test]
fn test_normalize_prints_catalog() {
    let (_dir, payload, config) = workspace();
    let output = menukit(&config, &["normalize", payload.to_str().unwrap()]);
    assert!(output.status.success());
    let catalog = stdout_json(&output);
    assert_eq!(catalog[0]["name"], "Salads");
    assert_eq!(catalog[0]["items"][0]["id"], "101");
    assert_eq!(catalog[0]["items"][0]["price"], 450.0);
    assert_eq!(catalog[1]["id"], "coming-soon");
}

#[test]
fn test_normalize_report_flags_degraded_payloads() {
    let (dir, _, config) = workspace();
    let payload = dir.path().join("scalar.json");
    fs::write(&payload, "\"menu\"").unwrap();
    let output = menukit(&config, &["normalize", payload.to_str().unwrap(), "--report"]);
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["catalog"], json!([]));
    assert_eq!(value["report"]["status"], "degraded");
}

#[test]
fn test_categories_resolve_covers() {
    let (_dir, payload, config) = workspace();
    let output = menukit(&config, &["categories", payload.to_str().unwrap(), "--json"]);
    assert!(output.status.success());
    let summaries = stdout_json(&output);
    assert_eq!(summaries[0]["cover"], "/img/menu/sm/salads.png");
    assert_eq!(summaries[0]["item_count"], 2);
    assert_eq!(summaries[1]["cover"], "/img/none.svg");

    let table = menukit(&config, &["categories", payload.to_str().unwrap()]);
    let text = stdout(&table);
    assert!(text.contains("* salads"));
    assert!(text.contains("coming-soon"));
}

#[test]
fn test_items_filters() {
    let (_dir, payload, config) = workspace();
    let payload = payload.to_str().unwrap();
    let veg = menukit(&config, &["items", payload, "Salads", "--diet", "veg", "--json"]);
    assert!(veg.status.success());
    let items = stdout_json(&veg);
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["name"], "Greek Salad");

    let query = menukit(&config, &["items", payload, "salads", "--query", "CAESAR"]);
    let text = stdout(&query);
    assert!(text.contains("Chicken Caesar"));
    assert!(text.contains("525.00"));
    assert!(!text.contains("Greek Salad"));

    let bad = menukit(&config, &["items", payload, "salads", "--diet", "vegan"]);
    assert!(!bad.status.success());
}

#[test]
fn test_find_item() {
    let (_dir, payload, config) = workspace();
    let output = menukit(&config, &["find", payload.to_str().unwrap(), "salads", "greek-salad"]);
    assert!(output.status.success());
    let item = stdout_json(&output);
    assert_eq!(item["id"], "101");
    assert_eq!(item["category_id"], "salads");
    assert_eq!(item["image"], "/img/menu/lg/greek.png");
}

#[test]
fn test_find_missing_item_exits_nonzero() {
    let (_dir, payload, config) = workspace();
    let output = menukit(&config, &["find", payload.to_str().unwrap(), "salads", "brownie"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_resolve_image_tiers() {
    let (_dir, _, config) = workspace();
    assert_eq!(
        stdout(&menukit(&config, &["resolve-image", "greek.png"])),
        "/img/menu/lg/greek.png"
    );
    assert_eq!(
        stdout(&menukit(&config, &["resolve-image", "greek.png", "--thumbnail"])),
        "/img/none.svg"
    );
    assert_eq!(
        stdout(&menukit(&config, &["resolve-image", "https://cdn.example.com/a.png"])),
        "https://cdn.example.com/a.png"
    );
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("absent.toml");
    let output = menukit(&config, &["resolve-image", "missing.png"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "/img/placeholder.png");
}

#[test]
fn test_missing_payload_reports_error() {
    let (dir, _, config) = workspace();
    let missing = dir.path().join("nope.json");
    let output = menukit(&config, &["normalize", missing.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: failed to read"));
}
