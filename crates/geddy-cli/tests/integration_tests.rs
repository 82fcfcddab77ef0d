//! Integration tests for the geddy-gen binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const ROUTER: &str = "var Router = require('./router').Router;\n\
var router = new Router();\n\
\n\
exports.router = router;\n";

/// A throwaway workspace: an app directory, a fake framework library and a
/// config file pointing at it.
struct Workspace {
    _temp: TempDir,
    app: PathBuf,
    library: PathBuf,
    config: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let app = temp.path().join("work");
        let library = temp.path().join("lib");
        fs::create_dir_all(&app).unwrap();
        fs::create_dir_all(&library).unwrap();

        let config = temp.path().join("geddy.toml");
        fs::write(
            &config,
            format!(
                "[paths]\nlibrary_dir = {:?}\n",
                library.display().to_string()
            ),
        )
        .unwrap();

        Self {
            _temp: temp,
            app,
            library,
            config,
        }
    }

    fn gen_dir(&self) -> PathBuf {
        self.library.join("geddy-core/scripts/gen")
    }

    fn with_gen_files(self) -> Self {
        let gen_dir = self.gen_dir();
        fs::create_dir_all(gen_dir.join("views")).unwrap();
        for file in ["router.js", "config.js", "main.js", "application.js"] {
            fs::write(gen_dir.join(file), format!("// {file}\n")).unwrap();
        }
        fs::write(gen_dir.join("views/index.html.ejs"), "<h1>index</h1>\n").unwrap();
        self
    }

    fn with_router(self) -> Self {
        fs::create_dir_all(self.app.join("config")).unwrap();
        fs::write(self.app.join("config/router.js"), ROUTER).unwrap();
        self
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo::cargo_bin_cmd!("geddy-gen");
        cmd.current_dir(&self.app)
            .env_remove("RUST_LOG")
            .env_remove("GEDDY_TEMPLATES_DIR")
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    fn read(&self, rel: impl AsRef<Path>) -> String {
        fs::read_to_string(self.app.join(rel)).unwrap()
    }
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_tasks() {
    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("app"))
        .stdout(predicate::str::contains("resource"));
}

#[test]
fn version_flag() {
    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_exits_2() {
    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("frobnicate")
        .assert()
        .code(2);
}

// ── app ───────────────────────────────────────────────────────────────────────

#[test]
fn app_dry_run_prints_plan_without_running() {
    let ws = Workspace::new();
    let gen_dir = ws.gen_dir();

    ws.cmd()
        .args(["app", "blog", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mkdir -p ./blog/config"))
        .stdout(predicate::str::contains(format!(
            "cp {}/router.js blog/config/",
            gen_dir.display()
        )));

    assert!(!ws.app.join("blog").exists());
}

#[test]
fn app_dry_run_json_is_an_array() {
    let ws = Workspace::new();

    let out = ws
        .cmd()
        .args(["--output-format", "json", "app", "blog", "--dry-run"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let plan: Vec<String> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(plan.len(), 10);
    assert_eq!(plan[0], "mkdir -p ./blog");
}

#[test]
fn app_creates_layout_and_copies_starter_files() {
    let ws = Workspace::new().with_gen_files();

    ws.cmd()
        .args(["app", "blog", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created app blog."));

    for dir in ["config", "app/models", "app/controllers", "app/views", "public"] {
        assert!(ws.app.join("blog").join(dir).is_dir(), "missing {dir}");
    }
    assert_eq!(ws.read("blog/config/router.js"), "// router.js\n");
    assert_eq!(ws.read("blog/app/controllers/main.js"), "// main.js\n");
}

#[test]
fn app_with_missing_generator_files_fails_with_command() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["app", "blog", "--yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Created app").not())
        .stderr(predicate::str::contains("router.js"));

    // directories ran before the first failing copy
    assert!(ws.app.join("blog/public").is_dir());
    assert!(!ws.app.join("blog/config/config.js").exists());
}

#[test]
fn invalid_app_name_exits_2() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["app", "my blog", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid app name"));

    assert_eq!(fs::read_dir(&ws.app).unwrap().count(), 0);
}

// ── resource ──────────────────────────────────────────────────────────────────

#[test]
fn resource_generates_files_route_and_views() {
    let ws = Workspace::new().with_gen_files().with_router();

    ws.cmd()
        .args(["resource", "post,posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ADDED] ./app/models/post.js"))
        .stdout(predicate::str::contains("[ADDED] ./app/controllers/posts.js"))
        .stdout(predicate::str::contains(
            "resources posts route added to ./config/router.js",
        ))
        .stdout(predicate::str::contains("Created view templates."));

    assert!(ws.read("app/models/post.js").contains("Post"));
    assert!(ws.read("app/controllers/posts.js").contains("Posts"));
    assert!(
        ws.read("config/router.js")
            .contains("router.resource('posts');\nexports.router = router;")
    );
    assert_eq!(
        ws.read("app/views/posts/index.html.ejs"),
        "<h1>index</h1>\n"
    );
}

#[test]
fn resource_twice_duplicates_route_unless_skipped() {
    let ws = Workspace::new().with_gen_files().with_router();

    ws.cmd().args(["resource", "post"]).assert().success();
    fs::write(ws.app.join("app/models/post.js"), "EDITED").unwrap();
    ws.cmd().args(["resource", "post"]).assert().success();
    assert!(ws.read("app/models/post.js").contains("var Post = function"));
    assert_eq!(
        ws.read("config/router.js")
            .matches("router.resource('posts');")
            .count(),
        2
    );

    ws.cmd()
        .args(["resource", "post", "--skip-existing-route"])
        .assert()
        .success();
    assert_eq!(
        ws.read("config/router.js")
            .matches("router.resource('posts');")
            .count(),
        2
    );
}

#[test]
fn resource_with_root_flag() {
    let ws = Workspace::new().with_gen_files().with_router();
    let root = ws.app.clone();

    cargo::cargo_bin_cmd!("geddy-gen")
        .current_dir(root.parent().unwrap())
        .arg("--config")
        .arg(&ws.config)
        .args(["resource", "person,people", "--root"])
        .arg(&root)
        .assert()
        .success();

    assert!(root.join("app/models/person.js").exists());
    assert!(root.join("app/views/people/index.html.ejs").exists());
}

#[test]
fn resource_uses_custom_templates_dir() {
    let ws = Workspace::new().with_gen_files().with_router();
    let templates = ws.library.join("templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("resource_model.ejs"),
        "model <%= nameSingular %>\n",
    )
    .unwrap();

    ws.cmd()
        .args(["resource", "post", "--templates-dir"])
        .arg(&templates)
        .assert()
        .success();

    assert_eq!(ws.read("app/models/post.js"), "model Post\n");
    // controller falls back to the built-in template
    assert!(ws.read("app/controllers/posts.js").contains("var Posts = function"));
}

#[test]
fn resource_without_router_exits_3_and_writes_nothing() {
    let ws = Workspace::new().with_gen_files();

    ws.cmd()
        .args(["resource", "post"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("router.js"));

    assert!(!ws.app.join("app").exists());
}

#[test]
fn resource_with_missing_views_exits_1() {
    let ws = Workspace::new().with_router();

    ws.cmd()
        .args(["resource", "post"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[ADDED] ./app/models/post.js"))
        .stdout(predicate::str::contains("Created view templates.").not());
}

#[test]
fn resource_with_too_many_names_exits_2() {
    let ws = Workspace::new().with_router();

    ws.cmd().args(["resource", "a,b,c"]).assert().code(2);
}

// ── install ───────────────────────────────────────────────────────────────────

#[test]
fn install_dry_run_prints_plan() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["install", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "mkdir -p {}",
            ws.library.display()
        )))
        .stdout(predicate::str::contains("cp geddy-core/scripts/geddy /usr/local/bin/"));
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn config_get_reads_file_value() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "get", "paths.library_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ws.library.display().to_string()));
}

#[test]
fn config_env_overrides_file() {
    let ws = Workspace::new();

    ws.cmd()
        .env("GEDDY_PATHS__BIN_DIR", "/opt/bin")
        .args(["config", "get", "paths.bin_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("paths.bin_dir = /opt/bin"));
}

#[test]
fn unknown_config_key_exits_4() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["config", "get", "paths.nope"])
        .assert()
        .code(4);
}

#[test]
fn missing_config_file_exits_4() {
    cargo::cargo_bin_cmd!("geddy-gen")
        .args(["--config", "/definitely/not/here.toml", "install", "--dry-run"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_default_config_once() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/geddy.toml");

    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[paths]"));
    assert!(written.contains("library_dir = \"~/.node_libraries\""));

    fs::write(&path, "# edited\n").unwrap();
    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");

    // the written defaults load back as a config file
    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("--config")
        .arg(&path)
        .args(["init", "--force"])
        .assert()
        .success();
    cargo::cargo_bin_cmd!("geddy-gen")
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format = auto"));
}

#[test]
fn completions_mention_binary() {
    cargo::cargo_bin_cmd!("geddy-gen")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("geddy-gen"));
}
