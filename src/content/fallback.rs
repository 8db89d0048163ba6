// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in portfolio content.
//!
//! These tables are compiled into the binary. They are what the viewer shows
//! before remote content arrives and whenever a remote load fails, so every
//! list here must stay non-empty.

use crate::models::{
    content::{BlogPost, Experience, Project},
    profile::{Education, Profile, SocialLink},
};

struct ProjectSeed {
    id: u32,
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    link: Option<&'static str>,
    github: Option<&'static str>,
}

struct ExperienceSeed {
    id: u32,
    company: &'static str,
    role: &'static str,
    duration: &'static str,
    description: &'static str,
}

struct BlogSeed {
    id: u32,
    title: &'static str,
    date: &'static str,
    excerpt: &'static str,
    link: &'static str,
}

const PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        id: 1,
        title: "Vehicle Telemetry Pipeline",
        description: "On-vehicle data collection and upload service for fleet diagnostics",
        technologies: &["Python", "C++", "Embedded Systems"],
        link: None,
        github: Some("https://github.com"),
    },
    ProjectSeed {
        id: 2,
        title: "Lane Detection Demo",
        description: "Real-time lane detection on dashcam footage with classical computer vision",
        technologies: &["Python", "OpenCV", "Computer Vision"],
        link: None,
        github: Some("https://github.com"),
    },
];

const EXPERIENCES: &[ExperienceSeed] = &[
    ExperienceSeed {
        id: 1,
        company: "Electric Vehicle Company",
        role: "Senior Software Development Engineer",
        duration: "2025 - Present",
        description: "Working on vehicle software systems, from firmware tooling to fleet services",
    },
    ExperienceSeed {
        id: 2,
        company: "Various Companies",
        role: "Software Engineer",
        duration: "Before 2025",
        description: "Software development experience in mobile and web applications",
    },
];

const BLOG_POSTS: &[BlogSeed] = &[
    BlogSeed {
        id: 1,
        title: "Preparing for Systems Interviews",
        date: "2025-01-15",
        excerpt: "How I prepared for embedded and systems interviews and what I learned along the way",
        link: "#",
    },
    BlogSeed {
        id: 2,
        title: "Computer Vision Projects",
        date: "2024-12-10",
        excerpt: "Exploring computer vision and embedded systems",
        link: "#",
    },
];

const SKILLS: &[&str] = &[
    "Mobile Development",
    "Software Testing",
    "SaaS",
    "Web Development",
    "iOS",
    "Python",
    "C++",
    "Computer Vision",
    "Embedded Systems",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in project list.
pub fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|seed| Project {
            id: seed.id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            technologies: strings(seed.technologies),
            link: seed.link.map(str::to_string),
            github: seed.github.map(str::to_string),
        })
        .collect()
}

/// Built-in work history.
pub fn experiences() -> Vec<Experience> {
    EXPERIENCES
        .iter()
        .map(|seed| Experience {
            id: seed.id,
            company: seed.company.to_string(),
            role: seed.role.to_string(),
            duration: seed.duration.to_string(),
            description: seed.description.to_string(),
        })
        .collect()
}

/// Built-in blog excerpts.
pub fn blog_posts() -> Vec<BlogPost> {
    BLOG_POSTS
        .iter()
        .map(|seed| BlogPost {
            id: seed.id,
            title: seed.title.to_string(),
            date: seed.date.to_string(),
            excerpt: seed.excerpt.to_string(),
            link: seed.link.to_string(),
        })
        .collect()
}

/// Site owner profile.
pub fn profile() -> Profile {
    Profile {
        name: "Alex Morgan".to_string(),
        headline: "Senior Software Engineer | MSCS Student".to_string(),
        bio: vec![
            "I'm Alex Morgan, a Senior Software Development Engineer working on vehicle software \
             and an incoming MSCS student."
                .to_string(),
            "I graduated with high honors in Computer Science & Engineering. I'm passionate about \
             robotic systems, computer vision and embedded systems."
                .to_string(),
        ],
        email: "alex@example.com".to_string(),
        social: vec![
            SocialLink {
                label: "GitHub".to_string(),
                url: "https://github.com".to_string(),
            },
            SocialLink {
                label: "LinkedIn".to_string(),
                url: "https://linkedin.com".to_string(),
            },
        ],
        education: vec![
            Education {
                school: "Columbia University".to_string(),
                degree: "MSCS".to_string(),
                duration: "2025 - 2026".to_string(),
                note: "Master of Science in Computer Science".to_string(),
            },
            Education {
                school: "UC Davis".to_string(),
                degree: "B.S. Computer Science & Engineering".to_string(),
                duration: "2021 - 2025".to_string(),
                note: "High Honor Graduate".to_string(),
            },
        ],
        skills: strings(SKILLS),
    }
}
