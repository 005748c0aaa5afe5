use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Set by the file watcher, cleared by whoever applies the change.
#[derive(Clone, Default)]
pub struct ReloadFlag(Arc<AtomicBool>);

impl ReloadFlag {
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns whether a reload was pending and clears it.
    #[must_use]
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

/// Watches `track` and raises `flag` whenever it is written or recreated.
///
/// The parent directory is watched rather than the file itself so editors
/// that save by rename are still noticed.
///
/// # Errors
///
/// Fails if the path has no file name or the platform watcher cannot start.
pub fn start(track: &Path, flag: ReloadFlag) -> Result<RecommendedWatcher> {
    let file_name = track
        .file_name()
        .context("track path has no file name")?
        .to_owned();
    let dir: PathBuf = match track.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if event.kind.is_modify() || event.kind.is_create() {
                if event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()))
                {
                    info!("Track file changed; reloading at the next episode.");
                    flag.raise();
                }
            }
        }
        Err(e) => tracing::error!("Error watching track file: {e:?}"),
    })?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!("Track watcher started for {:?}.", track);
    Ok(watcher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_the_flag() {
        let flag = ReloadFlag::default();
        assert!(!flag.take());
        flag.clone().raise();
        assert!(flag.take());
        assert!(!flag.take());
    }
}
