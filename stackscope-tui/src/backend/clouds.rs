//! Cloud profile discovery
//!
//! Reads the named profiles from the user's `clouds.yaml`. Only the
//! profile names matter here; credentials stay in the file.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CloudsFile {
    #[serde(default)]
    clouds: BTreeMap<String, serde_yaml::Value>,
}

/// Returns the available cloud profile names, never empty.
///
/// Falls back to a single `demo` profile when no config exists or it
/// cannot be parsed.
pub fn discover_clouds() -> Vec<String> {
    let names = clouds_file_path()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .and_then(|raw| parse_cloud_names(&raw));
    match names {
        Some(names) if !names.is_empty() => names,
        _ => vec!["demo".to_owned()],
    }
}

fn clouds_file_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("openstack").join("clouds.yaml"))
}

fn parse_cloud_names(raw: &str) -> Option<Vec<String>> {
    let file: CloudsFile = serde_yaml::from_str(raw).ok()?;
    Some(file.clouds.into_keys().collect())
}
