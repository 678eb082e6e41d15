// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;
use stmark_model::{BlockType, PageId, PageKind, StructValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerCount {
    pub followers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberCount {
    pub subscribers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialStats {
    pub facebook: FollowerCount,
    pub twitter: FollowerCount,
    pub linkedin: FollowerCount,
    pub youtube: SubscriberCount,
}

impl SocialStats {
    pub const PLATFORM_COUNT: usize = 4;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialStatsSummary {
    pub total_followers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    pub founded: u16,
    pub motto: String,
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteStatistics {
    pub students: u32,
    pub faculty: u32,
    pub programs: u32,
    pub research_projects: u32,
    pub alumni: u32,
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeLinks {
    pub learn_more: String,
    pub admission: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeContent {
    pub image_src: String,
    pub years_of_excellence: String,
    pub welcome_text: String,
    pub heading: String,
    pub description: String,
    pub highlights: Vec<String>,
    pub links: WelcomeLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogStats {
    pub total_posts: usize,
    pub total_indexes: usize,
}

// Echo payloads carry client values verbatim, whatever their JSON type.

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroNavigationEcho {
    pub destination: Value,
    pub timestamp: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickLinkClickEcho {
    pub title: Value,
    pub url: Value,
    pub timestamp: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WelcomeNavigateEcho {
    pub target: Value,
    pub url: &'static str,
    pub timestamp: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightInteractionEcho {
    pub highlight_index: Value,
    pub timestamp: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogClickEcho {
    pub post_url: Value,
    pub post_title: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedBlock {
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub value: StructValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProjection {
    pub id: PageId,
    pub kind: PageKind,
    pub title: String,
    pub url: String,
    pub subtitle: Option<String>,
    pub live: bool,
    pub body: Vec<ProjectedBlock>,
}
