mod common;

use assert_fs::prelude::*;
use common::TestContext;
use predicates::prelude::*;

#[test]
fn new_creates_project_files() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Created project 'demo'"));

    for file in ["package.json", "main.js", "build.bat", "vite.config.js"] {
        assert!(ctx.exists(file), "{} should exist", file);
    }

    let manifest = ctx.manifest();
    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["scripts"]["package:win"], "electron-builder --win portable --x64");
    assert_eq!(manifest["build"]["appId"], "com.example.demo");

    let main = ctx.read("main.js");
    assert!(main.contains("title: 'demo',"));
    assert!(main.contains("win.setMenuBarVisibility(false);"));
}

#[test]
fn new_with_vite_template_and_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["new", "site", "--template", "vite", "--app-version", "0.3.0"])
        .assert()
        .success();

    let manifest = ctx.manifest();
    assert_eq!(manifest["version"], "0.3.0");
    assert!(manifest.get("build").is_none());
}

#[test]
fn new_refuses_existing_project() {
    let ctx = TestContext::new();
    ctx.init_project();

    ctx.cli()
        .args(["new", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("package.json already exists"));

    assert_eq!(ctx.manifest()["name"], "demo");
}

#[test]
fn new_rejects_empty_name() {
    let ctx = TestContext::new();

    ctx.cli().args(["new", ""]).assert().failure().stderr(predicate::str::contains("Error:"));
    assert!(!ctx.exists("package.json"));
}

#[test]
fn dir_flag_selects_project_directory() {
    let ctx = TestContext::new();
    let outside = ctx.outside_dir();

    ctx.cli_in(&outside).arg("-C").arg(ctx.work_dir()).args(["new", "demo"]).assert().success();

    assert!(ctx.exists("package.json"));
    assert!(!outside.join("package.json").exists());
}

#[test]
fn import_manifest_regenerates_build_script() {
    let ctx = TestContext::new();
    let upload = assert_fs::TempDir::new().unwrap();
    let manifest = upload.child("package.json");
    manifest
        .write_str(
            r#"{"name":"imported","scripts":{"package:win":"electron-packager . Imported --arch=ia32"}}"#,
        )
        .unwrap();

    ctx.cli().arg("import").arg(manifest.path()).assert().success();

    assert_eq!(ctx.manifest()["name"], "imported");
    let bat = ctx.read("build.bat");
    assert!(bat.contains("npx electron-packager . Imported --platform=win32 --arch=ia32 --out=build"));
}

#[test]
fn import_rejects_other_files() {
    let ctx = TestContext::new();
    let upload = assert_fs::TempDir::new().unwrap();
    let page = upload.child("index.html");
    page.write_str("<html></html>").unwrap();

    ctx.cli()
        .arg("import")
        .arg(page.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("only package.json and main.js can be imported"));
}

#[test]
fn import_rejects_invalid_json() {
    let ctx = TestContext::new();
    let upload = assert_fs::TempDir::new().unwrap();
    let manifest = upload.child("package.json");
    manifest.write_str("{ \"name\": ").unwrap();

    ctx.cli()
        .arg("import")
        .arg(manifest.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse package.json"));

    assert!(!ctx.exists("package.json"));
}

#[test]
fn commands_without_project_fail() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("bat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No package.json found"));
}

#[test]
fn bat_honours_project_config() {
    let ctx = TestContext::new();
    ctx.init_project();
    ctx.write("elvite.toml", "[build_script]\nfile_name = \"Compilar.BAT\"\nlog_file = \"compilar.log\"\n");

    ctx.cli().arg("bat").assert().success().stdout(predicate::str::contains("Compilar.BAT"));

    let bat = ctx.read("Compilar.BAT");
    assert!(bat.contains("set LOGFILE=compilar.log\r\n"));
}

#[test]
fn invalid_project_config_is_reported() {
    let ctx = TestContext::new();
    ctx.init_project();
    ctx.write("elvite.toml", "[build_script]\nfile_name = \"../escape.bat\"\n");

    ctx.cli()
        .arg("bat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("build_script.file_name"));
}

#[test]
fn vite_config_is_kept_unless_forced() {
    let ctx = TestContext::new();
    ctx.write("vite.config.js", "// custom\n");

    ctx.cli()
        .arg("vite-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(ctx.read("vite.config.js"), "// custom\n");

    ctx.cli().args(["vite-config", "--force"]).assert().success();
    assert!(ctx.read("vite.config.js").contains("base: './'"));
}
