//! Fixture project and stub tools.

use std::fs;
use std::path::Path;

pub const TSCONFIG: &str = r#"{
  // JSON viewer extension
  "compilerOptions": {
    "target": "es2017",
    "module": "es2015",
    "strict": true,
    "outDir": "ts-out", /* transpiled files */
  },
  "include": ["src"],
}
"#;

/// Marker the stub compiler turns into a type error
pub const TYPE_ERROR_MARKER: &str = "// TYPE_ERROR";

/// Every archive entry a default build of the fixture produces, sorted
pub const EXPECTED_ENTRIES: &[&str] = &[
    "_locales/de/messages.json",
    "_locales/en/messages.json",
    "background.js",
    "content.js",
    "icon128.png",
    "icon16.png",
    "license.txt",
    "manifest.json",
    "viewer.css",
    "viewer.js",
];

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn write_extension(root: &Path) {
    write(root, "tsconfig.json", TSCONFIG);
    write(root, "src/background.ts", "chrome.runtime.onInstalled.addListener(() => {});\n");
    write(root, "src/content.ts", "const doc = document.body;\n");
    write(root, "src/viewer.ts", "export const render = (json: string) => json;\n");
    write(root, "src/viewer.css", ".json { font-family: monospace; }\n");
    write(
        root,
        "src/manifest.json",
        r#"{"manifest_version": 3, "name": "__MSG_name__", "version": "2.1.0"}"#,
    );
    write(root, "license.txt", "MIT License\n");
    write(root, "src/_locales/en/messages.json", r#"{"name": {"message": "JSON Viewer"}}"#);
    write(root, "src/_locales/de/messages.json", r#"{"name": {"message": "JSON-Betrachter"}}"#);
    write(root, "src/icon16.png", "PNG16");
    write(root, "src/icon128.png", "PNG128");
    write(root, "src/promo.png", "not an icon");
}

/// Stub `tsc`: copies `src/*.ts` to `<outDir>/*.js`, or reports a type error
/// for every file containing `TYPE_ERROR_MARKER`
pub const FAKE_TSC: &str = r#"#!/bin/sh
project=""
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    --version) echo "Version 5.4.5"; exit 0 ;;
    --project) project="$2"; shift 2 ;;
    --outDir) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
root=$(dirname "$project")
status=0
for f in "$root"/src/*.ts; do
  if grep -q "TYPE_ERROR" "$f"; then
    echo "src/$(basename "$f")(1,7): error TS2322: Type 'string' is not assignable to type 'number'."
    status=2
  fi
done
if [ "$status" -ne 0 ]; then
  exit "$status"
fi
mkdir -p "$out"
for f in "$root"/src/*.ts; do
  cp "$f" "$out/$(basename "$f" .ts).js"
done
"#;

/// Stub `rollup`: wraps the input in an IIFE assigned to `--name`
pub const FAKE_ROLLUP: &str = r#"#!/bin/sh
input=""
output=""
name=""
while [ $# -gt 0 ]; do
  case "$1" in
    --version) echo "rollup v4.9.6"; exit 0 ;;
    --input) input="$2"; shift 2 ;;
    --file) output="$2"; shift 2 ;;
    --name) name="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$(dirname "$output")"
{ echo "var $name = (function () {"; cat "$input"; echo "})();"; } > "$output"
"#;

/// Install the stub tools into `<root>/node_modules/.bin`
#[cfg(unix)]
pub fn install_fake_tools(root: &Path) {
    use std::os::unix::fs::PermissionsExt;

    let bin = root.join("node_modules/.bin");
    fs::create_dir_all(&bin).unwrap();
    for (name, script) in [("tsc", FAKE_TSC), ("rollup", FAKE_ROLLUP)] {
        let path = bin.join(name);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }
}

/// Sorted entry names of a zip archive
pub fn archive_entries(path: &Path) -> Vec<String> {
    let file = fs::File::open(path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}
