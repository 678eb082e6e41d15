// SPDX-License-Identifier: Apache-2.0

//! Hand-authored payloads served by the static content endpoints.
//!
//! None of these read from the page store; they change only with a release.

use crate::dto::{
    ContactInfo, EventItem, FollowerCount, GalleryImage, HeroContent, NavigationLink, NewsItem,
    SiteInfo, SiteStatistics, SocialStats, SocialStatsSummary, SubscriberCount, Testimonial,
    WelcomeContent, WelcomeLinks,
};
use serde_json::Value;
use stmark_model::{BlockRegistry, BlockType};

pub const SITE_NAME: &str = "St. Mark University";

pub const HERO_CONTENT_MESSAGE: &str = "Hero content retrieved successfully";
pub const HERO_NAVIGATION_MESSAGE: &str = "Navigation request processed";
pub const SITE_INFO_MESSAGE: &str = "Site information retrieved successfully";
pub const STATISTICS_MESSAGE: &str = "Statistics retrieved successfully";
pub const WELCOME_CONTENT_MESSAGE: &str = "Welcome section content retrieved successfully";
pub const NAVIGATE_MESSAGE: &str = "Navigation processed";
pub const HIGHLIGHT_MESSAGE: &str = "Highlight interaction recorded";
pub const CLICK_TRACKED_MESSAGE: &str = "Click tracked successfully";

fn s(value: &str) -> String {
    value.to_string()
}

#[must_use]
pub fn navigation_links() -> Vec<NavigationLink> {
    [
        ("Home", "/"),
        ("About", "/about"),
        ("Academics", "/academics"),
        ("Admissions", "/admissions"),
        ("Faculty & Staff", "/faculty"),
        ("News & Events", "/news"),
        ("Gallery", "/gallery"),
        ("Contact Us", "/contact"),
    ]
    .into_iter()
    .map(|(name, path)| NavigationLink {
        name: s(name),
        path: s(path),
    })
    .collect()
}

#[must_use]
pub fn social_stats() -> SocialStats {
    SocialStats {
        facebook: FollowerCount {
            followers: s("10K"),
        },
        twitter: FollowerCount {
            followers: s("5K"),
        },
        linkedin: FollowerCount {
            followers: s("8K"),
        },
        youtube: SubscriberCount {
            subscribers: s("15K"),
        },
    }
}

#[must_use]
pub fn social_stats_summary() -> SocialStatsSummary {
    SocialStatsSummary {
        total_followers: s("38K"),
    }
}

#[must_use]
pub fn hero_content() -> HeroContent {
    HeroContent {
        title: s("Empowering Minds,<br>Building the Future"),
        subtitle: s("Join a community of scholars and innovators at St. Mark University, where excellence meets opportunity."),
        button_text: s("Explore Programs"),
    }
}

#[must_use]
pub fn site_info() -> SiteInfo {
    SiteInfo {
        name: s(SITE_NAME),
        description: s("Empowering minds and building the future through excellence in education, research, and community service."),
        founded: 1985,
        motto: s("Excellence in Education"),
        contact: ContactInfo {
            address: s("123 University Avenue, Education City, EC 12345"),
            phone: s("+1 (234) 567-890"),
            email: s("info@stmark.edu"),
        },
    }
}

#[must_use]
pub fn site_statistics() -> SiteStatistics {
    SiteStatistics {
        students: 5420,
        faculty: 320,
        programs: 45,
        research_projects: 128,
        alumni: 15600,
        last_updated: s("2025-11-13"),
    }
}

/// Welcome payload built from the `welcome_section` schema defaults, so the
/// API and a freshly inserted CMS block show the same copy.
#[must_use]
pub fn welcome_content(registry: &BlockRegistry) -> WelcomeContent {
    let schema = registry.schema(BlockType::WelcomeSection);
    let default_of = |name: &str| -> Option<Value> {
        schema
            .and_then(|schema| schema.get_field(name))
            .and_then(|field| field.default.clone())
    };
    let text = |name: &str| {
        default_of(name)
            .and_then(|v| v.as_str().map(ToString::to_string))
            .unwrap_or_default()
    };
    let highlights = default_of("highlights")
        .and_then(|v| {
            v.as_array().map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(ToString::to_string))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_default();
    WelcomeContent {
        image_src: s("/static/images/students.jpg"),
        years_of_excellence: s("40+"),
        welcome_text: text("welcome_text"),
        heading: text("heading"),
        description: text("description"),
        highlights,
        links: WelcomeLinks {
            learn_more: s("/about"),
            admission: s("/admissions"),
        },
    }
}

#[must_use]
pub fn news_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: s("St. Mark Opens New Research Center"),
            date: s("November 10, 2025"),
            excerpt: s("The new Center for Sustainable Innovation brings together faculty and students from engineering, science and policy."),
            image: s("/static/images/news/research-center.jpg"),
        },
        NewsItem {
            id: 2,
            title: s("Record Enrollment for the 2025 Academic Year"),
            date: s("October 28, 2025"),
            excerpt: s("More than 5,400 students are now enrolled across 45 undergraduate and graduate programs."),
            image: s("/static/images/news/enrollment.jpg"),
        },
        NewsItem {
            id: 3,
            title: s("Faculty Awarded National Teaching Honors"),
            date: s("October 15, 2025"),
            excerpt: s("Three St. Mark professors were recognized for excellence in undergraduate teaching and mentorship."),
            image: s("/static/images/news/teaching-awards.jpg"),
        },
    ]
}

#[must_use]
pub fn events() -> Vec<EventItem> {
    vec![
        EventItem {
            id: 1,
            title: s("Fall Open House"),
            date: s("December 5, 2025"),
            time: s("10:00 AM - 3:00 PM"),
            location: s("Main Campus, Welcome Center"),
            description: s("Tour the campus, meet faculty and learn about admissions and financial aid."),
        },
        EventItem {
            id: 2,
            title: s("Research Symposium"),
            date: s("December 12, 2025"),
            time: s("9:00 AM - 5:00 PM"),
            location: s("Science Hall Auditorium"),
            description: s("Graduate and undergraduate researchers present their work across all disciplines."),
        },
        EventItem {
            id: 3,
            title: s("Winter Concert"),
            date: s("December 18, 2025"),
            time: s("7:00 PM - 9:00 PM"),
            location: s("Performing Arts Center"),
            description: s("The university orchestra and choir celebrate the end of the semester."),
        },
    ]
}

#[must_use]
pub fn gallery_images() -> Vec<GalleryImage> {
    [
        ("/static/images/gallery/campus.jpg", "Main campus quadrangle"),
        ("/static/images/gallery/library.jpg", "University library reading room"),
        ("/static/images/gallery/lab.jpg", "Students in the research laboratory"),
        ("/static/images/gallery/graduation.jpg", "Graduation ceremony"),
    ]
    .into_iter()
    .map(|(src, alt)| GalleryImage {
        src: s(src),
        alt: s(alt),
    })
    .collect()
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: s("St. Mark gave me the mentors and the confidence to pursue a career in research."),
            name: s("Amara Okafor"),
            role: s("Class of 2022, Biochemistry"),
        },
        Testimonial {
            quote: s("The faculty here care about every student. Small classes made all the difference."),
            name: s("Daniel Reyes"),
            role: s("Class of 2024, Computer Science"),
        },
        Testimonial {
            quote: s("Our partnership with St. Mark brings us graduates who are ready from day one."),
            name: s("Priya Nair"),
            role: s("Industry Partner"),
        },
    ]
}
