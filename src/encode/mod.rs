//! Frame sinks for rendered animations.
//!
//! Sinks consume frames in increasing [`FrameIndex`](crate::FrameIndex) order.

pub(crate) mod ffmpeg;
pub(crate) mod png;
pub(crate) mod sink;

use std::path::Path;

use crate::foundation::error::RadarResult;

/// Ensure the parent directory of `path` exists.
pub(crate) fn ensure_parent_dir(path: &Path) -> RadarResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
