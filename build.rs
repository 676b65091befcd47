use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const BUILD_ID_VAR: &str = "ACTIVITIES_BUILD_ID";

fn main() {
    for file in static_files(Path::new("static")) {
        println!("cargo:rerun-if-changed={}", file.display());
    }

    // Pinned ids keep release builds reproducible; dev builds get a timestamp.
    println!("cargo:rerun-if-env-changed={}", BUILD_ID_VAR);
    let build_id = env::var(BUILD_ID_VAR).unwrap_or_else(|_| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs().to_string())
            .unwrap_or_else(|_| "dev".to_string())
    });
    println!("cargo:rustc-env={}={}", BUILD_ID_VAR, build_id);
}

fn static_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for path in entries.flatten().map(|e| e.path()) {
            if path.is_dir() {
                pending.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}
