use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{RevealOnScroll, StepCard, CARD_CSS};
use crate::components::inquiry_form::ProjectInquiryForm;
use crate::content::SiteData;
use crate::motion::{use_mounted, FROM_RIGHT, HERO_COPY, HERO_TITLE, STEP};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct StartProjectProps {
    pub site: Rc<SiteData>,
}

#[function_component(StartProject)]
pub fn start_project(props: &StartProjectProps) -> Html {
    let site = &props.site;
    let company = &site.company;
    let mounted = use_mounted();
    use_title(format!("Start Your Project | {}", company.name));

    html! {
        <div class="start-project">
            <style>{CARD_CSS}</style>
            <style>
                {r#"
                .start-project {
                    padding: 7rem 1.5rem 5rem;
                    background: linear-gradient(180deg, #f7fee7, #fff 30%);
                }
                .start-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .start-hero {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .start-hero h1 {
                    font-size: 3.5rem;
                    font-weight: 800;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .start-hero h1 span { color: #84cc16; }
                .start-hero p {
                    font-size: 1.2rem;
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .start-steps {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    margin-bottom: 4rem;
                }
                .start-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                    align-items: start;
                }
                .start-aside {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .aside-card {
                    background: #fff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.1);
                }
                .aside-card h3 {
                    color: #111827;
                    margin-bottom: 1.25rem;
                }
                .aside-card a, .aside-card div.aside-line {
                    display: block;
                    color: #374151;
                    text-decoration: none;
                    margin-bottom: 0.75rem;
                }
                .aside-card a:hover { color: #65a30d; }
                .aside-card small {
                    display: block;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .reason-list {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .reason-list li {
                    padding: 0.5rem 0;
                    color: #374151;
                }
                .reason-list li::before {
                    content: "✓ ";
                    color: #84cc16;
                    font-weight: 700;
                }
                .social-row {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .social-row a {
                    background: #f7fee7;
                    color: #3f6212;
                    padding: 0.5rem 1rem;
                    border-radius: 999px;
                    font-weight: 600;
                    margin: 0;
                }
                .start-back {
                    display: inline-block;
                    margin-top: 3rem;
                    color: #65a30d;
                    font-weight: 600;
                    text-decoration: none;
                }
                @media (max-width: 900px) {
                    .start-steps, .start-layout { grid-template-columns: 1fr; }
                    .start-hero h1 { font-size: 2.4rem; }
                }
                "#}
            </style>
            <div class="start-inner">
                <div class="start-hero">
                    <h1 style={HERO_TITLE.style(mounted)}>{"Let's Build Something "}<span>{"Amazing"}</span></h1>
                    <p style={HERO_COPY.style(mounted)}>
                        {"Tell us about your vision and we'll turn it into a digital experience that drives results. Every great project starts with a conversation."}
                    </p>
                </div>

                <div class="start-steps">
                    { for site.inquiry.steps.iter().enumerate().map(|(index, step)| html! {
                        <StepCard step={step.clone()} {index} />
                    }) }
                </div>

                <div class="start-layout">
                    <div style={STEP.delayed(200).style(mounted)}>
                        <ProjectInquiryForm />
                    </div>
                    <RevealOnScroll transition={FROM_RIGHT} class="start-aside">
                        <div class="aside-card">
                            <h3>{"Get in Touch"}</h3>
                            <a href={format!("mailto:{}", company.email)}>
                                <small>{"Email"}</small>
                                {&company.email}
                            </a>
                            <a href={company.phone_href()}>
                                <small>{"Phone"}</small>
                                {&company.phone}
                            </a>
                            <div class="aside-line">
                                <small>{"Office"}</small>
                                {&company.address}
                            </div>
                        </div>
                        <div class="aside-card">
                            <h3>{format!("Why Choose {}?", company.name)}</h3>
                            <ul class="reason-list">
                                { for site.inquiry.reasons.iter().map(|reason| html! { <li>{reason}</li> }) }
                            </ul>
                        </div>
                        <div class="aside-card">
                            <h3>{"Follow Us"}</h3>
                            <div class="social-row">
                                { for company.socials.iter().map(|social| html! {
                                    <a href={social.url.clone()} target="_blank" rel="noopener noreferrer">{&social.name}</a>
                                }) }
                            </div>
                        </div>
                    </RevealOnScroll>
                </div>

                <Link<Route> to={Route::Home} classes="start-back">{"← Back to Home"}</Link<Route>>
            </div>
        </div>
    }
}
