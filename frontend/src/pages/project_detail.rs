use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::RevealOnScroll;
use crate::components::media_slider::MediaSlider;
use crate::config;
use crate::content::{Project, ProjectTestimonial, SiteData};
use crate::motion::{use_mounted, CARD, FROM_LEFT, FROM_RIGHT, HERO_BLOCK, SECTION_HEADING};
use crate::pages::not_found::NotFound;
use crate::Route;

const NO_FEATURES: &str = "No features specified for this project.";
const NO_TECHNOLOGIES: &str = "No technologies specified for this project.";

/// `mailto:` link that shares a project page.
pub fn share_mailto(project: &Project, url: &str) -> String {
    let subject = format!("Check out {}", project.title);
    let body = format!("{}\n\n{}", project.description, url);
    format!(
        "mailto:?subject={}&body={}",
        urlencoding::encode(&subject),
        urlencoding::encode(&body)
    )
}

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub site: Rc<SiteData>,
    pub id: AttrValue,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let found = props.site.find_project(&props.id);
    let title = match found {
        Some((_, project)) => format!("{} | {}", project.title, props.site.company.name),
        None => format!("Project Not Found | {}", props.site.company.name),
    };
    use_title(title);
    let mounted = use_mounted();

    let Some((index, project)) = found else {
        warn!("No project for route id {:?}", props.id.as_str());
        return html! { <NotFound title="Project Not Found" /> };
    };
    debug!("Showing project {} at position {}", project.id, index);

    let route_id = SiteData::project_route_id(index);
    let share = share_mailto(project, &config::project_url(&route_id));

    html! {
        <div class="project-detail">
            <style>
                {r#"
                .project-detail {
                    padding: 7rem 1.5rem 5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .back-link {
                    display: inline-block;
                    color: #65a30d;
                    text-decoration: none;
                    font-weight: 600;
                    margin-bottom: 2rem;
                }
                .detail-header {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }
                .detail-category {
                    display: inline-block;
                    background: #ecfccb;
                    color: #3f6212;
                    padding: 0.3rem 1rem;
                    border-radius: 999px;
                    font-weight: 600;
                    margin-bottom: 1rem;
                }
                .detail-header h1 {
                    font-size: 3rem;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .detail-header p {
                    color: #4b5563;
                    font-size: 1.15rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }
                .detail-facts {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .detail-fact {
                    background: #f9fafb;
                    border-radius: 1rem;
                    padding: 1rem;
                }
                .detail-fact small {
                    display: block;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .detail-fact strong { color: #111827; }
                .detail-section { margin-bottom: 4rem; }
                .detail-section h2 {
                    font-size: 2rem;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .metric-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                }
                .metric-card {
                    background: linear-gradient(135deg, #f7fee7, #fff);
                    border: 1px solid #d9f99d;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                }
                .metric-card strong {
                    display: block;
                    font-size: 2.2rem;
                    color: #65a30d;
                }
                .metric-card span {
                    color: #4b5563;
                    text-transform: capitalize;
                }
                .detail-columns {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }
                .feature-list {
                    list-style: none;
                    padding: 0;
                }
                .feature-list li {
                    padding: 0.6rem 0;
                    color: #374151;
                    border-bottom: 1px solid #f3f4f6;
                }
                .feature-list li::before {
                    content: "✓ ";
                    color: #84cc16;
                    font-weight: 700;
                }
                .tech-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .tech-tag {
                    background: #111827;
                    color: #fff;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-size: 0.9rem;
                }
                .empty-note {
                    color: #9ca3af;
                    font-style: italic;
                }
                .story-card {
                    background: #f9fafb;
                    border-radius: 1.5rem;
                    padding: 2rem;
                }
                .story-card h3 {
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .story-card p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .detail-quote {
                    background: #111827;
                    color: #fff;
                    border-radius: 1.5rem;
                    padding: 3rem;
                    text-align: center;
                }
                .detail-quote blockquote {
                    font-size: 1.4rem;
                    font-style: italic;
                    line-height: 1.6;
                    margin: 0 0 1.5rem;
                }
                .detail-quote img {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    object-fit: cover;
                    margin-bottom: 0.75rem;
                }
                .detail-quote span { color: #a3e635; }
                .detail-cta {
                    text-align: center;
                    background: linear-gradient(135deg, #84cc16, #65a30d);
                    color: #fff;
                    border-radius: 2rem;
                    padding: 4rem 2rem;
                }
                .detail-cta h2 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                }
                .detail-cta-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }
                .detail-cta-actions a {
                    padding: 1rem 2rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                }
                .cta-primary {
                    background: #fff;
                    color: #3f6212;
                }
                .cta-secondary {
                    border: 2px solid #fff;
                    color: #fff;
                }
                @media (max-width: 768px) {
                    .detail-header, .detail-columns { grid-template-columns: 1fr; }
                    .detail-header h1 { font-size: 2.2rem; }
                    .detail-facts { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <Link<Route> to={Route::Home} classes="back-link">{"← Back to Home"}</Link<Route>>

            <div class="detail-header" style={HERO_BLOCK.style(mounted)}>
                <div>
                    <span class="detail-category">{&project.category}</span>
                    <h1>{&project.title}</h1>
                    <p>{&project.description}</p>
                    <div class="detail-facts">
                        <div class="detail-fact"><small>{"Duration"}</small><strong>{&project.duration}</strong></div>
                        <div class="detail-fact"><small>{"Team"}</small><strong>{project.team_label()}</strong></div>
                        <div class="detail-fact"><small>{"Year"}</small><strong>{&project.year}</strong></div>
                    </div>
                </div>
                <MediaSlider key={route_id.clone()} media={project.gallery_or_cover()} title={project.title.clone()} />
            </div>

            if !project.metrics.is_empty() {
                <RevealOnScroll transition={SECTION_HEADING} class="detail-section">
                    <h2>{"Results"}</h2>
                    <div class="metric-grid">
                        { for project.metrics.iter().enumerate().map(|(i, (label, value))| html! {
                            <div class="metric-card" style={CARD.stagger(i, 100).style(mounted)}>
                                <strong>{value}</strong>
                                <span>{label}</span>
                            </div>
                        }) }
                    </div>
                </RevealOnScroll>
            }

            <div class="detail-section detail-columns">
                <RevealOnScroll transition={FROM_LEFT}>
                    <h2>{"Key Features"}</h2>
                    if project.features.is_empty() {
                        <p class="empty-note">{NO_FEATURES}</p>
                    } else {
                        <ul class="feature-list">
                            { for project.features.iter().map(|feature| html! { <li>{feature}</li> }) }
                        </ul>
                    }
                </RevealOnScroll>
                <RevealOnScroll transition={FROM_RIGHT}>
                    <h2>{"Technologies"}</h2>
                    if project.technologies.is_empty() {
                        <p class="empty-note">{NO_TECHNOLOGIES}</p>
                    } else {
                        <div class="tech-tags">
                            { for project.technologies.iter().map(|tech| html! { <span class="tech-tag">{tech}</span> }) }
                        </div>
                    }
                </RevealOnScroll>
            </div>

            if !project.challenge.is_empty() || !project.solution.is_empty() {
                <div class="detail-section detail-columns">
                    <RevealOnScroll transition={FROM_LEFT} class="story-card">
                        <h3>{"The Challenge"}</h3>
                        <p>{&project.challenge}</p>
                    </RevealOnScroll>
                    <RevealOnScroll transition={FROM_RIGHT} class="story-card">
                        <h3>{"Our Solution"}</h3>
                        <p>{&project.solution}</p>
                    </RevealOnScroll>
                </div>
            }

            if let Some(testimonial) = &project.testimonial {
                <RevealOnScroll transition={SECTION_HEADING} class="detail-section">
                    { view_testimonial(testimonial) }
                </RevealOnScroll>
            }

            <RevealOnScroll transition={SECTION_HEADING} class="detail-cta">
                <h2>{"Ready to build something similar?"}</h2>
                <p>{"Let's talk about your idea and turn it into a product your users will love."}</p>
                <div class="detail-cta-actions">
                    <Link<Route> to={Route::StartProject} classes="cta-primary">{"Start Your Project"}</Link<Route>>
                    <a class="cta-secondary" href={share}>{"Share This Project"}</a>
                </div>
            </RevealOnScroll>
        </div>
    }
}

fn view_testimonial(testimonial: &ProjectTestimonial) -> Html {
    html! {
        <div class="detail-quote">
            <blockquote>{format!("\"{}\"", testimonial.quote)}</blockquote>
            if let Some(avatar) = &testimonial.avatar {
                <img src={avatar.clone()} alt={testimonial.author.clone().unwrap_or_default()} />
            }
            if let Some(author) = &testimonial.author {
                <div><strong>{author}</strong></div>
            }
            if let Some(role) = &testimonial.role {
                <span>{role}</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_is_url_encoded() {
        let site = SiteData::load().expect("bundled site data parses");
        let project = &site.projects[0];
        let link = share_mailto(project, "https://shrinav.com/project/1");

        assert!(link.starts_with("mailto:?subject=Check%20out%20"));
        assert!(link.contains("https%3A%2F%2Fshrinav.com%2Fproject%2F1"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
    }
}
