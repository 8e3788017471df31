use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::nav::{section_href, SECTIONS};
use crate::content::SiteData;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub site: Rc<SiteData>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let company = &props.site.company;
    let year = chrono::Local::now().year();
    let on_home = use_route::<Route>().map_or(true, |route| route == Route::Home);

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #84cc16;
                    margin-bottom: 1rem;
                }
                .site-footer h4 {
                    color: #fff;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a {
                    color: #9ca3af;
                    text-decoration: none;
                }
                .site-footer a:hover { color: #84cc16; }
                .footer-socials {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .footer-bottom {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    padding-top: 2rem;
                    border-top: 1px solid #374151;
                    text-align: center;
                    font-size: 0.9rem;
                    color: #6b7280;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{&company.name}</div>
                    <p>{&company.tagline}</p>
                    <div class="footer-socials">
                        { for company.socials.iter().map(|social| html! {
                            <a href={social.url.clone()} target="_blank" rel="noopener noreferrer">{&social.name}</a>
                        }) }
                    </div>
                </div>
                <div>
                    <h4>{"Explore"}</h4>
                    <ul>
                        { for SECTIONS.iter().map(|(label, anchor)| html! {
                            <li><a href={section_href(anchor, on_home)}>{*label}</a></li>
                        }) }
                        <li>
                            <Link<Route> to={Route::StartProject}>{"Start a Project"}</Link<Route>>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        <li><a href={format!("mailto:{}", company.email)}>{&company.email}</a></li>
                        <li><a href={company.phone_href()}>{&company.phone}</a></li>
                        <li>{&company.address}</li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, company.name)}
            </div>
        </footer>
    }
}
