// SPDX-License-Identifier: Apache-2.0

use serde_json::json;
use stmark_api::content::{
    hero_content, navigation_links, news_items, site_info, site_statistics, social_stats,
    social_stats_summary, testimonials, welcome_content,
};
use stmark_api::{endpoint_catalog, ContentSource, SocialStats};
use stmark_model::BlockRegistry;

#[test]
fn navigation_has_eight_links_in_menu_order() {
    let links = navigation_links();
    assert_eq!(links.len(), 8);
    assert_eq!(links[0].path, "/");
    assert_eq!(links[4].name, "Faculty & Staff");
    assert_eq!(links[7].path, "/contact");
}

#[test]
fn social_stats_shapes_are_stable() {
    assert_eq!(
        serde_json::to_value(social_stats()).expect("json"),
        json!({
            "facebook": {"followers": "10K"},
            "twitter": {"followers": "5K"},
            "linkedin": {"followers": "8K"},
            "youtube": {"subscribers": "15K"}
        })
    );
    assert_eq!(SocialStats::PLATFORM_COUNT, 4);
    assert_eq!(
        serde_json::to_value(social_stats_summary()).expect("json"),
        json!({"total_followers": "38K"})
    );
}

#[test]
fn hero_uses_camel_case_button_text() {
    let value = serde_json::to_value(hero_content()).expect("json");
    assert_eq!(value["buttonText"], "Explore Programs");
    assert!(value.get("button_text").is_none());
}

#[test]
fn site_info_and_statistics_match_published_figures() {
    let info = site_info();
    assert_eq!(info.founded, 1985);
    assert_eq!(info.contact.email, "info@stmark.edu");
    let stats = serde_json::to_value(site_statistics()).expect("json");
    assert_eq!(stats["students"], 5420);
    assert_eq!(stats["research_projects"], 128);
    assert_eq!(stats["last_updated"], "2025-11-13");
}

#[test]
fn welcome_payload_comes_from_schema_defaults() {
    let registry = BlockRegistry::standard().expect("registry");
    let welcome = welcome_content(&registry);
    assert_eq!(welcome.welcome_text, "Welcome to St. Mark University");
    assert_eq!(welcome.heading, "Shaping Leaders, Advancing Knowledge");
    assert_eq!(welcome.highlights.len(), 5);
    let value = serde_json::to_value(&welcome).expect("json");
    for key in ["imageSrc", "yearsOfExcellence", "welcomeText", "highlights"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["links"]["learnMore"], "/about");
    assert_eq!(value["links"]["admission"], "/admissions");
}

#[test]
fn list_content_is_non_empty_with_unique_ids() {
    let news = news_items();
    let mut ids: Vec<_> = news.iter().map(|n| n.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), news.len());
    assert!(!testimonials().is_empty());
}

#[test]
fn catalog_serializes_content_source_in_snake_case() {
    let blog_stats = endpoint_catalog()
        .iter()
        .find(|e| e.path == "/api/blog/stats/")
        .expect("blog stats");
    assert_eq!(blog_stats.source, ContentSource::PageStore);
    assert_eq!(
        serde_json::to_value(blog_stats).expect("json"),
        json!({
            "method": "GET",
            "path": "/api/blog/stats/",
            "content_source": "page_store",
            "name": "blog_stats"
        })
    );
}
