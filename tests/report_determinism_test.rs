//! Two scans of an unchanged tree must produce byte-identical reports.

use indoc::indoc;
use portmap::analyze_library;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn mixed_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "src/main/java/b/Second.java",
        indoc! {"
            import android.view.View;
            import android.content.Intent;
        "},
    );
    write(
        dir.path(),
        "src/main/java/a/First.java",
        indoc! {"
            import android.widget.Button;
            import okhttp3.OkHttpClient;
            import android.util.Log;
        "},
    );
    write(
        dir.path(),
        "src/main/kotlin/Lib.kt",
        "import kotlinx.coroutines.flow.Flow\n",
    );
    write(
        dir.path(),
        "build.gradle",
        indoc! {"
            implementation 'z.example:zlib:1.0'
            implementation 'a.example:alib:1.0'
            implementation 'z.example:zlib:1.0'
        "},
    );
    dir
}

#[test]
fn repeated_scans_serialize_identically() {
    let dir = mixed_tree();
    let first = analyze_library(dir.path(), true).unwrap();
    let second = analyze_library(dir.path(), true).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string_pretty(&first).unwrap(),
        serde_json::to_string_pretty(&second).unwrap()
    );
}

#[test]
fn category_order_follows_lexicographic_file_order() {
    // a/First.java is scanned before b/Second.java, so ui_view is first
    // encountered there and network precedes ipc_intent in the map.
    let dir = mixed_tree();
    let report = analyze_library(dir.path(), true).unwrap();

    let categories: Vec<_> = report.android_apis.iter().map(|(id, _)| id).collect();
    assert_eq!(
        categories,
        vec!["ui_view", "network", "logging", "ipc_intent", "threading"]
    );

    // ui_view samples: Button (First.java) before View (Second.java).
    let samples = &report.android_apis.get("ui_view").unwrap().samples;
    assert!(samples[0].content.contains("Button"));
    assert!(samples[1].content.contains("View"));
}

#[test]
fn json_sections_appear_in_contract_order() {
    let dir = mixed_tree();
    let report = analyze_library(dir.path(), true).unwrap();
    let json = serde_json::to_string(&report).unwrap();

    let positions: Vec<usize> = [
        "\"library_path\"",
        "\"summary\"",
        "\"android_apis\"",
        "\"dependencies\"",
        "\"native_code\"",
        "\"recommendations\"",
    ]
    .iter()
    .map(|key| json.find(key).unwrap())
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
