use std::path::Path;

use serum_forge::io::Format;

pub fn input(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "toml" => Some(Format::Toml),
        "txt" | "mol" | "dat" => Some(Format::Text),
        _ => None,
    }
}

pub fn output(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "toml" => Some(Format::Toml),
        "txt" | "log" | "report" => Some(Format::Report),
        _ => None,
    }
}
