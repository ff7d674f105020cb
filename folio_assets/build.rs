use std::{
    fmt::Write,
    path::{Path, PathBuf},
};

fn main() {
    println!("cargo::rerun-if-changed=assets");

    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    let out_path = PathBuf::from(std::env::var("OUT_DIR").unwrap()).join("assets.rs");

    let mut out = String::new();
    emit_dir(&mut out, &assets);
    std::fs::write(&out_path, out).unwrap();

    println!("cargo::rustc-env=ASSETS={}", out_path.display());
}

fn emit_dir(out: &mut String, dir: &Path) {
    let mut entries = dir
        .read_dir()
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            !path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'))
        })
        .collect::<Vec<_>>();
    entries.sort();

    for path in entries {
        let name = path.file_name().unwrap().to_str().unwrap();
        let ident = identifier(name);

        if path.is_dir() {
            writeln!(out, "pub mod {ident} {{").unwrap();
            emit_dir(out, &path);
            writeln!(out, "}}").unwrap();
        } else if std::str::from_utf8(&std::fs::read(&path).unwrap()).is_ok() {
            let ident = ident.to_uppercase();
            writeln!(out, "pub const {ident}: &str = ::core::include_str!({path:?});").unwrap();
        } else {
            let ident = ident.to_uppercase();
            writeln!(out, "pub const {ident}: &[u8] = ::core::include_bytes!({path:?});").unwrap();
        }
    }
}

fn identifier(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
