use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::content::{Project, SiteData};
use crate::Route;

/// How far through the pinned section the viewer has scrolled, 0..=1.
pub fn scroll_progress(section_top: f64, section_height: f64, viewport_height: f64) -> f64 {
    let scrollable = section_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (-section_top / scrollable).clamp(0.0, 1.0)
}

/// Leftward shift of the card track for a given progress.
pub fn track_offset(progress: f64, track_width: f64, viewport_width: f64) -> f64 {
    progress.clamp(0.0, 1.0) * (track_width - viewport_width).max(0.0)
}

/// Section height that gives one pixel of vertical scroll per pixel of track travel.
pub fn pinned_height(track_width: f64, viewport_width: f64, viewport_height: f64) -> f64 {
    viewport_height + (track_width - viewport_width).max(0.0)
}

#[derive(Properties, PartialEq)]
pub struct ProjectShowcaseProps {
    pub site: Rc<SiteData>,
}

/// Projects laid out on a horizontal track that slides as the page scrolls.
#[function_component(ProjectShowcase)]
pub fn project_showcase(props: &ProjectShowcaseProps) -> Html {
    let section = use_node_ref();
    let track = use_node_ref();
    // Re-render on every scroll and resize; measurements are read below.
    let _scroll = use_window_scroll();
    let (viewport_width, viewport_height) = use_window_size();

    let track_width = track
        .cast::<Element>()
        .map(|el| el.scroll_width() as f64)
        .unwrap_or(viewport_width);
    let section_top = section
        .cast::<Element>()
        .map(|el| el.get_bounding_client_rect().top())
        .unwrap_or(0.0);

    let height = pinned_height(track_width, viewport_width, viewport_height);
    let progress = scroll_progress(section_top, height, viewport_height);
    let offset = track_offset(progress, track_width, viewport_width);

    html! {
        <div class="showcase" ref={section.clone()} style={format!("height: {}px;", height)}>
            <style>
                {r#"
                .showcase {
                    position: relative;
                    background: linear-gradient(135deg, #f9fafb, #fff);
                }
                .showcase-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                    display: flex;
                    align-items: center;
                }
                .showcase-track {
                    display: flex;
                    gap: 2rem;
                    padding: 0 4rem;
                    will-change: transform;
                }
                .showcase-card {
                    flex: 0 0 26rem;
                    background: #fff;
                    border-radius: 1.5rem;
                    overflow: hidden;
                    box-shadow: 0 20px 40px -12px rgba(0, 0, 0, 0.2);
                    transition: transform 0.5s ease, box-shadow 0.5s ease;
                }
                .showcase-card:hover {
                    transform: translateY(-8px) scale(1.02);
                    box-shadow: 0 30px 60px -12px rgba(0, 0, 0, 0.3);
                }
                .showcase-image {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }
                .showcase-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }
                .showcase-card:hover .showcase-image img { transform: scale(1.1); }
                .showcase-category {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    background: rgba(255, 255, 255, 0.9);
                    color: #1f2937;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .showcase-body { padding: 1.5rem; }
                .showcase-body h3 {
                    font-size: 1.25rem;
                    color: #111827;
                    margin-bottom: 0.75rem;
                }
                .showcase-body p {
                    color: #4b5563;
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin-bottom: 1rem;
                }
                .showcase-metrics {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                }
                .showcase-metric {
                    text-align: center;
                    background: #f9fafb;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                }
                .showcase-metric strong {
                    display: block;
                    color: #65a30d;
                    font-size: 0.9rem;
                }
                .showcase-metric span {
                    color: #4b5563;
                    font-size: 0.75rem;
                    text-transform: capitalize;
                }
                .showcase-link {
                    display: block;
                    text-align: center;
                    background: #84cc16;
                    color: #fff;
                    font-weight: 600;
                    padding: 0.75rem;
                    border-radius: 1rem;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }
                .showcase-link:hover { background: #65a30d; }
                @media (max-width: 768px) {
                    .showcase-card { flex-basis: 80vw; }
                    .showcase-track { padding: 0 1rem; }
                }
                "#}
            </style>
            <div class="showcase-pin">
                <div class="showcase-track" ref={track} style={format!("transform: translateX(-{}px);", offset)}>
                    { for props.site.projects.iter().enumerate().map(|(index, project)| showcase_card(index, project)) }
                </div>
            </div>
        </div>
    }
}

fn showcase_card(index: usize, project: &Project) -> Html {
    html! {
        <div class="showcase-card" key={project.id}>
            <div class="showcase-image">
                <img src={project.cover().to_string()} alt={project.title.clone()} />
                <span class="showcase-category">{&project.category}</span>
            </div>
            <div class="showcase-body">
                <h3>{&project.title}</h3>
                <p>{&project.description}</p>
                <div class="showcase-metrics">
                    { for project.metrics.iter().take(3).map(|(label, value)| html! {
                        <div class="showcase-metric">
                            <strong>{value}</strong>
                            <span>{label}</span>
                        </div>
                    }) }
                </div>
                <Link<Route> to={Route::Project { id: SiteData::project_route_id(index) }} classes="showcase-link">
                    {"View Project →"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped_to_the_pinned_range() {
        assert_eq!(scroll_progress(200.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(0.0, 2000.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-600.0, 2000.0, 800.0), 0.5);
        assert_eq!(scroll_progress(-5000.0, 2000.0, 800.0), 1.0);
    }

    #[test]
    fn short_sections_do_not_scroll() {
        assert_eq!(scroll_progress(-100.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn track_travels_its_overflow() {
        assert_eq!(track_offset(0.5, 3000.0, 1000.0), 1000.0);
        assert_eq!(track_offset(1.0, 3000.0, 1000.0), 2000.0);
        assert_eq!(track_offset(1.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn pinned_height_matches_travel() {
        assert_eq!(pinned_height(3000.0, 1000.0, 800.0), 2800.0);
        assert_eq!(pinned_height(500.0, 1000.0, 800.0), 800.0);
    }
}
