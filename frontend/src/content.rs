use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

const SITE_DATA: &str = include_str!("../data/site_data.json");

pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("site data lists no projects")]
    NoProjects,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteData {
    pub company: Company,
    pub hero: Hero,
    pub process: Vec<Step>,
    pub services: Vec<Service>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub inquiry: InquiryCopy,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub logo: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

impl Company {
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Social {
    pub name: String,
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub title: Vec<String>,
    pub subtitle: String,
    pub highlights: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Step {
    pub step: String,
    pub title: String,
    pub description: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub accent: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub metrics: BTreeMap<String, String>,
    pub duration: String,
    #[serde(default)]
    pub team: Option<String>,
    pub year: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub testimonial: Option<ProjectTestimonial>,
}

impl Project {
    pub fn cover(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Slider media: the gallery, or just the cover when there is none.
    pub fn gallery_or_cover(&self) -> Vec<String> {
        if self.gallery.is_empty() {
            vec![self.cover().to_string()]
        } else {
            self.gallery.clone()
        }
    }

    pub fn team_label(&self) -> &str {
        self.team.as_deref().unwrap_or("6 developers")
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectTestimonial {
    pub quote: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Testimonial {
    pub fn stars(&self) -> usize {
        self.rating.clamp(1, 5) as usize
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct InquiryCopy {
    pub steps: Vec<Step>,
    pub reasons: Vec<String>,
}

impl SiteData {
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SITE_DATA)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let data: SiteData = serde_json::from_str(raw)?;
        if data.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        Ok(data)
    }

    /// Resolves a detail-route id, a 1-based position in `projects`.
    pub fn find_project(&self, raw_id: &str) -> Option<(usize, &Project)> {
        let position = raw_id.trim().parse::<usize>().ok()?;
        let index = position.checked_sub(1)?;
        self.projects.get(index).map(|project| (index, project))
    }

    pub fn project_route_id(index: usize) -> String {
        (index + 1).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteData {
        SiteData::load().expect("bundled site data parses")
    }

    #[test]
    fn bundled_content_loads() {
        let site = site();
        assert_eq!(site.projects.len(), 5);
        assert!(!site.services.is_empty());
        assert!(!site.testimonials.is_empty());
    }

    #[test]
    fn project_lookup_by_position() {
        let site = site();
        let (index, project) = site.find_project("1").expect("first project");
        assert_eq!(index, 0);
        assert_eq!(project.title, site.projects[0].title);
        assert_eq!(site.find_project("5").map(|(i, _)| i), Some(4));
        assert_eq!(SiteData::project_route_id(4), "5");
    }

    #[test]
    fn unknown_project_ids_resolve_to_none() {
        let site = site();
        for raw in ["999", "6", "0", "-1", "abc", "", "2abc"] {
            assert!(site.find_project(raw).is_none(), "{raw:?}");
        }
    }

    #[test]
    fn empty_project_list_is_rejected() {
        let raw = site_json_with_projects("[]");
        assert!(matches!(SiteData::from_json(&raw), Err(ContentError::NoProjects)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(SiteData::from_json("{"), Err(ContentError::Malformed(_))));
    }

    #[test]
    fn gallery_falls_back_to_cover() {
        let raw = site_json_with_projects(
            r#"[{"id": 1, "title": "T", "category": "C", "description": "D",
                 "duration": "1 month", "year": "2024"}]"#,
        );
        let site = SiteData::from_json(&raw).expect("minimal project parses");
        let project = &site.projects[0];
        assert_eq!(project.gallery_or_cover(), vec![PLACEHOLDER_IMAGE.to_string()]);
        assert_eq!(project.team_label(), "6 developers");
        assert!(project.features.is_empty());
        assert!(project.testimonial.is_none());
    }

    #[test]
    fn star_rating_is_clamped() {
        let mut testimonial = site().testimonials[0].clone();
        testimonial.rating = 9;
        assert_eq!(testimonial.stars(), 5);
        testimonial.rating = 0;
        assert_eq!(testimonial.stars(), 1);
    }

    #[test]
    fn phone_href_keeps_digits() {
        let site = site();
        assert_eq!(site.company.phone_href(), "tel:+15551234567");
    }

    fn site_json_with_projects(projects: &str) -> String {
        let mut value: serde_json::Value =
            serde_json::from_str(SITE_DATA).expect("bundled site data is json");
        value["projects"] = serde_json::from_str(projects).expect("projects json");
        value.to_string()
    }
}
