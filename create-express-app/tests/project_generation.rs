//! Integration tests for project generation

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use create_express_app_lib::installer::{InstallCall, RecordingInstaller};
use create_express_app_lib::templates::{CompilerConfig, PackageManifest};
use create_express_app_lib::{Language, Materializer, ProjectSpec};
use tempfile::TempDir;

/// Every regular file under `root`, relative and `/`-separated
fn list_files(root: &Path) -> BTreeSet<String> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeSet<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).unwrap();
                out.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut files = BTreeSet::new();
    walk(root, root, &mut files);
    files
}

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(ToString::to_string).collect()
}

/// Test the JavaScript example: `demo`, no extra packages
#[test]
fn test_javascript_project() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = RecordingInstaller::new();
    let spec = ProjectSpec::new("demo", Language::JavaScript, temp_dir.path());

    let result = Materializer::new(&recorder).materialize(&spec).unwrap();

    let root = temp_dir.path().join("demo");
    assert_eq!(result.layout.target_directory, root);
    assert_eq!(result.files.len(), 8);
    assert_eq!(
        list_files(&root),
        set(&[
            ".gitignore",
            "README.md",
            "index.js",
            "package.json",
            "src/app.js",
            "src/controllers/home.js",
            "src/middlewares/logger.js",
            "src/routes/index.js",
        ])
    );
    assert!(!root.join("tsconfig.json").exists());

    let manifest: PackageManifest =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest.name, "demo");
    assert_eq!(manifest.main, "index.js");
    assert_eq!(manifest.dependencies.len(), 1);
    assert_eq!(manifest.dependencies["express"], "^4.19.2");
    assert_eq!(manifest.dev_dependencies.len(), 1);
    assert_eq!(manifest.dev_dependencies["nodemon"], "^3.1.0");

    assert_eq!(
        recorder.calls(),
        vec![InstallCall {
            cwd: root,
            packages: Vec::new(),
        }]
    );
}

/// Test the TypeScript example: `api` with `dotenv cors`
#[test]
fn test_typescript_project_with_extras() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = RecordingInstaller::new();
    let spec = ProjectSpec::new("api", Language::TypeScript, temp_dir.path())
        .with_extra_packages("dotenv cors");

    Materializer::new(&recorder).materialize(&spec).unwrap();

    let root = temp_dir.path().join("api");
    let files = list_files(&root);
    assert_eq!(files.len(), 9);
    assert!(files.contains("tsconfig.json"));
    assert!(files
        .iter()
        .filter(|f| f.ends_with(".js") || f.ends_with(".ts"))
        .all(|f| f.ends_with(".ts")));

    let manifest: PackageManifest =
        serde_json::from_str(&fs::read_to_string(root.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest.main, "dist/index.js");

    let tsconfig: CompilerConfig =
        serde_json::from_str(&fs::read_to_string(root.join("tsconfig.json")).unwrap()).unwrap();
    assert_eq!(tsconfig, CompilerConfig::default());

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].packages.is_empty());
    assert_eq!(calls[1].packages, vec!["dotenv", "cors"]);
    assert!(calls.iter().all(|c| c.cwd == root));
}

/// Test that TypeScript adds exactly one file over JavaScript
#[test]
fn test_typescript_adds_only_tsconfig() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = RecordingInstaller::new();
    let materializer = Materializer::new(&recorder);

    materializer
        .materialize(&ProjectSpec::new("js", Language::JavaScript, temp_dir.path()))
        .unwrap();
    materializer
        .materialize(&ProjectSpec::new("ts", Language::TypeScript, temp_dir.path()))
        .unwrap();

    let strip = |files: BTreeSet<String>, ext: &str| -> BTreeSet<String> {
        files
            .into_iter()
            .map(|f| f.strip_suffix(ext).map_or(f.clone(), |stem| format!("{stem}.EXT")))
            .collect()
    };
    let js = strip(list_files(&temp_dir.path().join("js")), ".js");
    let ts = strip(list_files(&temp_dir.path().join("ts")), ".ts");

    assert_eq!(
        ts.difference(&js).cloned().collect::<Vec<_>>(),
        vec!["tsconfig.json".to_string()]
    );
    assert!(js.is_subset(&ts));
}

/// Test that internal imports carry the extension only for JavaScript
#[test]
fn test_written_import_paths() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = RecordingInstaller::new();
    let materializer = Materializer::new(&recorder);

    materializer
        .materialize(&ProjectSpec::new("js", Language::JavaScript, temp_dir.path()))
        .unwrap();
    materializer
        .materialize(&ProjectSpec::new("ts", Language::TypeScript, temp_dir.path()))
        .unwrap();

    let js_app = fs::read_to_string(temp_dir.path().join("js/src/app.js")).unwrap();
    assert!(js_app.contains("import router from \"./routes/index.js\";"));

    let ts_app = fs::read_to_string(temp_dir.path().join("ts/src/app.ts")).unwrap();
    assert!(ts_app.contains("import router from \"./routes/index\";"));

    let ts_controller =
        fs::read_to_string(temp_dir.path().join("ts/src/controllers/home.ts")).unwrap();
    assert!(ts_controller.contains("Hello from Express + TypeScript!"));
}

/// Test generating into the current directory with `.`
#[test]
fn test_sentinel_generates_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path().join("service");
    fs::create_dir(&cwd).unwrap();

    let recorder = RecordingInstaller::new();
    let spec = ProjectSpec::new(".", Language::JavaScript, &cwd);
    let result = Materializer::new(&recorder).materialize(&spec).unwrap();

    assert!(result.layout.in_place);
    assert_eq!(result.layout.target_directory, cwd);
    assert_eq!(list_files(&cwd).len(), 8);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);

    let manifest: PackageManifest =
        serde_json::from_str(&fs::read_to_string(cwd.join("package.json")).unwrap()).unwrap();
    assert_eq!(manifest.name, "service");

    let readme = fs::read_to_string(cwd.join("README.md")).unwrap();
    assert!(readme.contains("```bash\ncd .\n"));
    assert_eq!(recorder.calls()[0].cwd, cwd);
}

/// Test that an existing directory aborts without writing
#[test]
fn test_collision_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("demo");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("notes.txt"), "mine").unwrap();

    let recorder = RecordingInstaller::new();
    let spec = ProjectSpec::new("demo", Language::TypeScript, temp_dir.path());
    let err = Materializer::new(&recorder).materialize(&spec).unwrap_err();

    assert!(err.is_collision());
    assert_eq!(list_files(&existing), set(&["notes.txt"]));
    assert!(recorder.calls().is_empty());
}

/// Test that running twice with the same name fails the second time
#[test]
fn test_second_run_collides() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = RecordingInstaller::new();
    let materializer = Materializer::new(&recorder);
    let spec = ProjectSpec::new("demo", Language::JavaScript, temp_dir.path());

    materializer.materialize(&spec).unwrap();
    let before = fs::read_to_string(temp_dir.path().join("demo/package.json")).unwrap();

    assert!(materializer.materialize(&spec).unwrap_err().is_collision());
    let after = fs::read_to_string(temp_dir.path().join("demo/package.json")).unwrap();
    assert_eq!(before, after);
    assert_eq!(recorder.calls().len(), 1);
}

/// Test that generated sources match the rendered templates byte for byte
#[test]
fn test_written_content_matches_render() {
    let temp_dir = TempDir::new().unwrap();
    let recorder = RecordingInstaller::new();
    let spec = ProjectSpec::new("demo", Language::TypeScript, temp_dir.path());
    Materializer::new(&recorder).materialize(&spec).unwrap();

    let rendered = create_express_app_lib::render(Language::TypeScript, "demo", "demo").unwrap();
    for file in rendered.files().unwrap() {
        let written = fs::read_to_string(temp_dir.path().join("demo").join(&file.relative_path))
            .unwrap();
        assert_eq!(written, file.content, "mismatch in {}", file.relative_path);
    }
}
