//! Debounced rebuilds on source changes, shared by `generate --watch` and `server`

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebounceEventResult};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use crate::{Site, CONFIG_FILE};

/// Quiet period before a batch of changes triggers a rebuild
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Paths whose changes trigger a rebuild
pub fn watched_paths(site: &Site) -> Vec<(PathBuf, RecursiveMode)> {
    vec![
        (site.content_path.clone(), RecursiveMode::NonRecursive),
        (site.base_dir.join(CONFIG_FILE), RecursiveMode::NonRecursive),
        (site.source_dir.clone(), RecursiveMode::Recursive),
        (site.base_dir.join("languages"), RecursiveMode::Recursive),
    ]
}

/// Editor swap files and VCS internals never trigger a rebuild
pub fn is_relevant(path: &Path) -> bool {
    if path.components().any(|c| c.as_os_str() == ".git") {
        return false;
    }

    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    !(name == ".DS_Store"
        || name.ends_with('~')
        || name.ends_with(".swp")
        || name.starts_with(".#"))
}

/// Rebuild the site after every debounced batch of relevant changes.
///
/// The site is reloaded from disk each time so `_config.yml` edits apply.
/// `on_rebuild` gets the number of successful rebuilds so far. Blocks for
/// as long as the watcher runs.
pub fn watch<F>(site: &Site, mut on_rebuild: F) -> Result<()>
where
    F: FnMut(u64),
{
    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    for (path, mode) in watched_paths(site) {
        if path.exists() {
            debouncer.watcher().watch(&path, mode)?;
            tracing::debug!("Watching: {:?}", path);
        }
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut generation = 0;
    for result in rx {
        let events = match result {
            Ok(events) => events,
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
                continue;
            }
        };

        let changed: Vec<&Path> = events
            .iter()
            .map(|event| event.path.as_path())
            .filter(|path| is_relevant(path))
            .collect();
        if changed.is_empty() {
            continue;
        }
        for path in &changed {
            tracing::info!("File changed: {}", path.display());
        }

        match Site::new(&site.base_dir).and_then(|site| site.generate()) {
            Ok(()) => {
                generation += 1;
                tracing::info!("Regenerated successfully");
                on_rebuild(generation);
            }
            Err(e) => tracing::error!("Generation failed: {:#}", e),
        }
    }

    Ok(())
}
