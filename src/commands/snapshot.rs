//! Render the page after replaying a sequence of interactions

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::generator::Generator;
use crate::page::PageState;
use crate::Site;

/// An interaction to replay against the page state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Type into the search box, replacing its contents
    Query(String),
    /// Click a post header
    Toggle(String),
}

/// Replay `interactions` from the initial state and render the page
pub fn render(site: &Site, interactions: &[Interaction]) -> Result<String> {
    let store = site.load_store()?;
    let mut state = PageState::new(&store);

    for interaction in interactions {
        match interaction {
            Interaction::Query(query) => state.set_query(query),
            Interaction::Toggle(id) => {
                if store.get(id).is_none() {
                    tracing::warn!("No post with id {:?}", id);
                }
                state.toggle(id);
            }
        }
    }

    tracing::debug!(
        "Snapshot state: query={:?} open={:?}",
        state.query(),
        state.open_id()
    );

    Generator::new(site)?.render_page(&store, &state)
}

/// Render and print the page, or write it to `output`
pub fn run(site: &Site, interactions: &[Interaction], output: Option<&Path>) -> Result<()> {
    let html = render(site, interactions)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, html)?;
            tracing::info!("Wrote snapshot to {:?}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}
