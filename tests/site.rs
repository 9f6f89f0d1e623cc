use std::fs;

use onepager::commands::init::init_site;
use onepager::generator::Generator;
use onepager::page::PageState;
use onepager::search;
use onepager::Site;

fn init() -> (tempfile::TempDir, Site) {
    let dir = tempfile::tempdir().unwrap();
    init_site(dir.path()).unwrap();
    let site = Site::new(dir.path()).unwrap();
    (dir, site)
}

#[test]
fn generate_writes_page_and_search_index() {
    let (_dir, site) = init();
    site.generate().unwrap();

    let html = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(r#"data-post-id="post-1""#));
    assert!(html.contains(r#"data-post-id="post-3""#));
    assert!(html.contains("3 Beiträge"));
    assert!(html.contains("<strong>"));

    let index = fs::read_to_string(site.public_dir.join("search.json")).unwrap();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&index).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["id"], "post-1");
    assert!(entries[0]["corpus"].as_str().unwrap().contains("speed"));
}

#[test]
fn clean_removes_public_dir() {
    let (_dir, site) = init();
    site.generate().unwrap();
    assert!(site.public_dir.exists());

    site.clean().unwrap();
    assert!(!site.public_dir.exists());
}

#[test]
fn initial_state_opens_first_post() {
    let (_dir, site) = init();
    let store = site.load_store().unwrap();
    let state = PageState::new(&store);

    assert_eq!(state.open_id(), Some("post-1"));
    assert_eq!(state.visible(&store).len(), 3);
}

#[test]
fn search_narrows_visible_posts() {
    let (_dir, site) = init();
    let store = site.load_store().unwrap();
    let mut state = PageState::new(&store);

    state.set_query("speed");
    let ids: Vec<_> = state.visible(&store).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["post-1"]);

    state.set_query("  ATHLETIK ");
    let ids: Vec<_> = state.visible(&store).iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["post-2"]);

    assert!(search::filter(store.posts(), "xyz-nothing").is_empty());
}

#[test]
fn clicking_moves_and_closes_expansion() {
    let (_dir, site) = init();
    let store = site.load_store().unwrap();
    let mut state = PageState::new(&store);

    state.toggle("post-2");
    assert_eq!(state.open_id(), Some("post-2"));

    state.toggle("post-2");
    assert_eq!(state.open_id(), None);
}

#[test]
fn empty_result_renders_message() {
    let (_dir, site) = init();
    let store = site.load_store().unwrap();
    let mut state = PageState::new(&store);
    state.set_query("xyz-nothing");

    let html = Generator::new(&site).unwrap().render_page(&store, &state).unwrap();
    assert!(html.contains(r#"<div id="blog-empty" class="card muted">"#));
    assert!(html.contains("0 Beiträge"));
}
