use std::fs;
use std::path::{Path, PathBuf};

fn rs_files(root: &Path) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().and_then(|s| s.to_str()) == Some("rs") {
                out.push(path);
            }
        }
    }
    out.sort();
    out
}

fn rel(path: &Path) -> String {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let rel = path
        .strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string();
    rel.replace('\\', "/")
}

const SAMPLING_CORE: [&str; 8] = [
    "src/system/collector.rs",
    "src/system/cpu.rs",
    "src/system/error.rs",
    "src/system/memory.rs",
    "src/system/process.rs",
    "src/system/snapshot.rs",
    "src/system/source.rs",
    "src/system/uptime.rs",
];

#[test]
fn sampling_core_does_not_touch_the_terminal() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut violations = Vec::new();

    for file in SAMPLING_CORE {
        let content = fs::read_to_string(root.join(file)).unwrap_or_default();
        for forbidden in ["crate::ui", "crate::app", "ratatui", "crossterm", "sysinfo::"] {
            if content.contains(forbidden) {
                violations.push(format!("{file} imports forbidden dependency `{forbidden}`"));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Sampling core layering violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn ui_module_does_not_query_the_system() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/ui");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        for forbidden in [
            "crate::system::platform",
            "crate::system::sysinfo_source",
            "sysinfo::",
            ".refresh(",
        ] {
            if content.contains(forbidden) {
                violations.push(format!("{} reaches `{}` while drawing", rel(&file), forbidden));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "UI/system boundary violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn sysinfo_is_confined_to_its_source() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let rel_path = rel(&file);
        if rel_path == "src/system/sysinfo_source.rs" {
            continue;
        }
        let content = fs::read_to_string(&file).unwrap_or_default();
        if content.contains("sysinfo::") || content.contains("use sysinfo") {
            violations.push(rel_path);
        }
    }

    assert!(
        violations.is_empty(),
        "sysinfo used outside src/system/sysinfo_source.rs:\n{}",
        violations.join("\n")
    );
}

#[test]
fn target_os_cfg_is_scoped_to_system_platform() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut violations = Vec::new();

    for file in rs_files(&root) {
        let content = fs::read_to_string(&file).unwrap_or_default();
        if !content.contains("target_os") {
            continue;
        }

        let rel_path = rel(&file);
        if !rel_path.starts_with("src/system/platform/") {
            violations.push(format!(
                "{} contains `target_os` cfg but is outside allowed boundary",
                rel_path
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Unexpected target_os cfg usage:\n{}",
        violations.join("\n")
    );
}
