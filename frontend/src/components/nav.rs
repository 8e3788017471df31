use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::content::SiteData;
use crate::motion::{use_mounted, NAV_DROP};
use crate::Route;

/// Vertical scroll after which the bar switches to its solid style.
const SCROLLED_AFTER: f64 = 50.0;

pub const SECTIONS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Services", "services"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

/// Anchor target for a home-page section, usable from any route.
pub fn section_href(anchor: &str, on_home: bool) -> String {
    if on_home {
        format!("#{}", anchor)
    } else {
        format!("/#{}", anchor)
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub site: Rc<SiteData>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let mounted = use_mounted();
    let on_home = use_route::<Route>().map_or(true, |route| route == Route::Home);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let company = &props.site.company;
    html! {
        <nav class={classes!("top-nav", (scroll_y > SCROLLED_AFTER).then(|| "scrolled"))} style={NAV_DROP.style(mounted)}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(16px);
                    border-bottom: 1px solid #f3f4f6;
                    transition: box-shadow 0.3s ease, background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.97);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    text-decoration: none;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #84cc16;
                }
                .nav-logo img {
                    width: 40px;
                    height: 40px;
                    border-radius: 0.5rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #374151;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.3s ease;
                }
                .nav-link:hover { color: #65a30d; }
                .nav-cta {
                    background: #84cc16;
                    color: #fff;
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .nav-cta:hover { background: #65a30d; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1.25rem;
                        padding: 1.5rem;
                        background: #fff;
                        border-bottom: 1px solid #f3f4f6;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={company.logo.clone()} alt={format!("{} Logo", company.name)} />
                    <span>{&company.name}</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-right", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for SECTIONS.iter().map(|(label, anchor)| html! {
                        <a class="nav-link" href={section_href(anchor, on_home)} onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::StartProject} classes="nav-cta">
                            {"Start a Project"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_point_home_from_other_routes() {
        assert_eq!(section_href("services", true), "#services");
        assert_eq!(section_href("services", false), "/#services");
    }
}
