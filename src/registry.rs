//! Static registry of Android API detection categories.
//!
//! Each category groups related Android APIs that share a migration
//! difficulty and a single OpenHarmony replacement. The table is
//! configuration, not state: it is compiled once, before any file is
//! scanned, and never mutated.

use crate::errors::PortmapError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Qualitative migration cost of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    /// Sort rank for recommendations: hardest work first.
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::High => 0,
            Difficulty::Medium => 1,
            Difficulty::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        }
    }
}

/// One detection category: an id, its compiled patterns, a difficulty
/// tier, and the OpenHarmony alternative to migrate to.
#[derive(Debug)]
pub struct Category {
    pub id: &'static str,
    pub difficulty: Difficulty,
    pub oh_alternative: &'static str,
    patterns: Vec<Regex>,
}

impl Category {
    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }
}

/// Raw pattern table. Patterns are line-oriented regexes applied to raw
/// source text; matching is textual, so false positives in strings or
/// comments are expected and tolerated.
const CATEGORY_TABLE: &[(&str, &[&str], Difficulty, &str)] = &[
    (
        "ui_view",
        &[
            r"import\s+android\.widget\.",
            r"import\s+android\.view\.",
            r"import\s+androidx\.appcompat\.",
            r"import\s+androidx\.recyclerview\.",
            r"import\s+androidx\.viewpager",
            r"import\s+androidx\.cardview\.",
            r"import\s+androidx\.constraintlayout\.",
            r"import\s+com\.google\.android\.material\.",
        ],
        Difficulty::High,
        "ArkUI declarative components",
    ),
    (
        "ui_compose",
        &[r"import\s+androidx\.compose\.", r"@Composable"],
        Difficulty::High,
        "ArkUI declarative UI (@Component + build())",
    ),
    (
        "network",
        &[
            r"import\s+java\.net\.(HttpURLConnection|URL|Socket)",
            r"import\s+android\.net\.",
            r"import\s+okhttp3?\.",
            r"import\s+retrofit2?\.",
            r"import\s+com\.android\.volley\.",
        ],
        Difficulty::Medium,
        "@ohos.net.http / @ohos.net.socket",
    ),
    (
        "storage",
        &[
            r"import\s+android\.content\.SharedPreferences",
            r"import\s+android\.database\.sqlite\.",
            r"import\s+androidx\.room\.",
            r"import\s+androidx\.datastore\.",
            r"import\s+android\.os\.Environment",
        ],
        Difficulty::Medium,
        "@ohos.data.preferences / @ohos.data.relationalStore",
    ),
    (
        "multimedia",
        &[
            r"import\s+android\.media\.",
            r"import\s+android\.graphics\.(Bitmap|Canvas|Paint|ImageDecoder)",
            r"import\s+androidx\.camera\.",
            r"import\s+android\.hardware\.camera2?\.",
        ],
        Difficulty::Medium,
        "@ohos.multimedia.image / @ohos.multimedia.media",
    ),
    (
        "lifecycle",
        &[
            r"import\s+android\.app\.Activity",
            r"import\s+android\.app\.Fragment",
            r"import\s+androidx\.fragment\.",
            r"import\s+androidx\.lifecycle\.",
            r"import\s+android\.app\.Service",
            r"import\s+android\.content\.BroadcastReceiver",
            r"import\s+android\.content\.ContentProvider",
        ],
        Difficulty::High,
        "Ability framework (UIAbility / ExtensionAbility)",
    ),
    (
        "threading",
        &[
            r"import\s+android\.os\.(Handler|Looper|AsyncTask)",
            r"import\s+kotlinx\.coroutines\.",
            r"import\s+io\.reactivex\.",
            r"import\s+rx\.",
        ],
        Difficulty::Medium,
        "TaskPool / Worker (@ohos.taskpool / @ohos.worker)",
    ),
    (
        "permission",
        &[
            r"import\s+android\.Manifest",
            r"import\s+android\.content\.pm\.PackageManager",
            r"import\s+androidx\.core\.app\.ActivityCompat",
            r"requestPermissions",
        ],
        Difficulty::Medium,
        "@ohos.abilityAccessCtrl",
    ),
    (
        "ipc_intent",
        &[
            r"import\s+android\.content\.Intent",
            r"import\s+android\.content\.Context",
            r"import\s+android\.os\.Bundle",
        ],
        Difficulty::High,
        "Want mechanism (@ohos.app.ability.Want)",
    ),
    (
        "notification",
        &[
            r"import\s+android\.app\.Notification",
            r"import\s+androidx\.core\.app\.NotificationCompat",
        ],
        Difficulty::Medium,
        "@ohos.notificationManager",
    ),
    (
        "jni_ndk",
        &[
            r"System\.loadLibrary",
            r"native\s+\w+\s+\w+\(",
            r#"extern\s+"C""#,
            r"#include\s+<jni\.h>",
            r"JNIEnv\s*\*",
            r"JNIEXPORT",
        ],
        Difficulty::High,
        "NAPI (Node-API for native modules)",
    ),
    (
        "pure_java",
        &[
            r"import\s+java\.(util|io|lang|math|text|time|security)\.",
            r"import\s+javax\.(crypto|net\.ssl)\.",
        ],
        Difficulty::Low,
        "Direct reuse or ArkTS equivalent",
    ),
    (
        "json_serialization",
        &[
            r"import\s+com\.google\.gson\.",
            r"import\s+org\.json\.",
            r"import\s+com\.fasterxml\.jackson\.",
            r"import\s+kotlinx\.serialization\.",
            r"import\s+com\.squareup\.moshi\.",
        ],
        Difficulty::Low,
        "JSON.parse/stringify or @ohos.util.json",
    ),
    (
        "logging",
        &[r"import\s+android\.util\.Log", r"Log\.(d|i|w|e|v)\("],
        Difficulty::Low,
        "hilog (@ohos.hilog)",
    ),
];

/// Category id for native-code indicators; the aggregator treats hits here
/// as evidence of native code even when no C/C++ files were discovered.
pub const NATIVE_CATEGORY: &str = "jni_ndk";

static CATEGORIES: Lazy<Vec<Category>> =
    Lazy::new(|| build_categories().unwrap_or_else(|e| panic!("{e}")));

fn build_categories() -> Result<Vec<Category>, PortmapError> {
    CATEGORY_TABLE
        .iter()
        .map(|&(id, patterns, difficulty, oh_alternative)| {
            let patterns = patterns
                .iter()
                .map(|p| {
                    Regex::new(p).map_err(|source| PortmapError::InvalidPattern {
                        category: id.to_string(),
                        pattern: p.to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Category {
                id,
                difficulty,
                oh_alternative,
                patterns,
            })
        })
        .collect()
}

/// The full category table, in registry order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a category by id.
pub fn find(id: &str) -> Option<&'static Category> {
    categories().iter().find(|c| c.id == id)
}

/// Force pattern compilation. Called once at startup so a malformed
/// pattern aborts the run before any file is scanned.
pub fn validate() {
    Lazy::force(&CATEGORIES);
}
