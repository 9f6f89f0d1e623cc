//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::watcher;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let store = site.load_store()?;
    tracing::info!("Loaded {} posts", store.len());

    let generator = Generator::new(site)?;
    generator.generate(&store)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Regenerate on every change until interrupted
pub async fn watch(site: &Site) -> Result<()> {
    let site = site.clone();
    tokio::task::spawn_blocking(move || watcher::watch(&site, |_| {})).await?
}
