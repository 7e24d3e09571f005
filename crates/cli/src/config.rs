// File: crates/cli/src/config.rs
// Summary: YAML persistence and editing of the preset document.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use benchbars_core::Presets;
use tempfile::NamedTempFile;
use tracing::info;

pub const DEFAULT_CONFIG: &str = "config.yaml";

/// Keys accepted by `config set`.
pub const KEYS: [&str; 4] = ["resolutions", "default_colours", "title_presets", "sub_title_presets"];

pub fn load(path: &Path) -> Result<Presets> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let presets: Presets = serde_yaml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(presets)
}

/// Load `path`, writing the built-in presets there first when it does not exist.
pub fn load_or_init(path: &Path) -> Result<Presets> {
    if path.exists() {
        return load(path);
    }
    let presets = Presets::default();
    save(&presets, path)?;
    info!(path = %path.display(), "created default config");
    Ok(presets)
}

pub fn save(presets: &Presets, path: &Path) -> Result<()> {
    let text = serde_yaml::to_string(presets).context("serializing presets")?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| format!("creating temp file in {}", dir.display()))?;
    tmp.write_all(text.as_bytes())?;
    tmp.persist(path).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Comma-separated list with surrounding whitespace and empty items removed.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string).collect()
}

/// Replace the list stored under `key`. Resolutions and colours are validated first.
pub fn set(presets: &mut Presets, key: &str, value: &str) -> Result<()> {
    let items = split_list(value);
    match key {
        "resolutions" => {
            for r in &items {
                r.parse::<benchbars_core::Resolution>()?;
            }
            presets.resolutions = items;
        }
        "default_colours" => {
            for c in &items {
                benchbars_core::hex_to_unit(c)?;
            }
            presets.default_colours = items;
        }
        "title_presets" => presets.title_presets = items,
        "sub_title_presets" => presets.sub_title_presets = items,
        other => bail!("unknown config key '{other}' (expected one of {})", KEYS.join(", ")),
    }
    Ok(())
}
