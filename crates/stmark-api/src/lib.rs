// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod catalog;
pub mod content;
mod dto;
mod envelope;
mod error_mapping;
mod errors;
pub mod params;

pub use catalog::{endpoint_catalog, ContentSource, EndpointSpec, ENDPOINTS};
pub use dto::{
    BlogClickEcho, BlogStats, ContactInfo, EventItem, FollowerCount, GalleryImage,
    HeroContent, HeroNavigationEcho, HighlightInteractionEcho, NavigationLink, NewsItem,
    PageProjection, ProjectedBlock, QuickLinkClickEcho, SiteInfo, SiteStatistics, SocialStats,
    SocialStatsSummary, SubscriberCount, Testimonial, WelcomeContent, WelcomeLinks,
    WelcomeNavigateEcho,
};
pub use envelope::{ApiEnvelope, EnvelopeStatus};
pub use error_mapping::{map_error, ApiErrorMapping};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{
    navigation_target_url, parse_json_body, BodyError, JsonBody, SocialStatsFormat,
    WelcomeAction,
};

pub const CRATE_NAME: &str = "stmark-api";
