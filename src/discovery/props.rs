//! Local config reader for GG's `coreProps.json`

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::{CoreProps, GgError, GgResult, HubConfig, MissingKind};

/// File GG writes its control API address to
pub const CORE_PROPS_FILE: &str = "coreProps.json";

/// Vendor and product directories below the shared application data root
pub const HUB_VENDOR_DIR: &str = "SteelSeries";
pub const HUB_PRODUCT_DIR: &str = "GG";

/// Platform shared application data root
///
/// `%ProgramData%` on Windows, `/Library/Application Support` on macOS and
/// `/usr/share` elsewhere.
pub fn shared_app_data_dir() -> PathBuf {
    if cfg!(windows) {
        std::env::var_os("ProgramData")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Library/Application Support")
    } else {
        PathBuf::from("/usr/share")
    }
}

/// Default directory holding `coreProps.json`
pub fn default_props_dir() -> PathBuf {
    shared_app_data_dir().join(HUB_VENDOR_DIR).join(HUB_PRODUCT_DIR)
}

/// Metadata for `path`, `None` when nothing exists there
async fn stat(path: &Path) -> GgResult<Option<std::fs::Metadata>> {
    match tokio::fs::metadata(path).await {
        Ok(meta) => Ok(Some(meta)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(GgError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and validate the hub config from `dir`
pub async fn read_hub_config(dir: &Path) -> GgResult<HubConfig> {
    if !stat(dir).await?.is_some_and(|m| m.is_dir()) {
        return Err(GgError::not_found(MissingKind::Directory, dir));
    }

    let path = dir.join(CORE_PROPS_FILE);
    if !stat(&path).await?.is_some_and(|m| m.is_file()) {
        return Err(GgError::not_found(MissingKind::File, path));
    }

    debug!("Reading hub config from {}", path.display());

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| GgError::Io {
            path: path.clone(),
            source,
        })?;

    let props: CoreProps = serde_json::from_str(&raw).map_err(|source| GgError::Parse {
        path: path.clone(),
        source,
    })?;

    HubConfig::from_props(props, &path)
}
