use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::{RevealOnScroll, ServiceCard, StepCard, TestimonialCard, CARD_CSS};
use crate::components::contact_form::ContactForm;
use crate::components::project_showcase::ProjectShowcase;
use crate::content::SiteData;
use crate::motion::{
    use_mounted, FROM_LEFT, FROM_RIGHT, HERO_ACTIONS, HERO_BLOCK, HERO_COPY, HERO_TITLE,
    HIGHLIGHT, SECTION_HEADING,
};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub site: Rc<SiteData>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let site = &props.site;
    let mounted = use_mounted();
    use_title(format!("{} | {}", site.company.name, site.company.tagline));

    html! {
        <div class="home">
            <style>{CARD_CSS}</style>
            <style>
                {r#"
                .home section {
                    padding: 6rem 1.5rem;
                }
                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 {
                    font-size: 3rem;
                    font-weight: 800;
                    color: #111827;
                    margin-bottom: 1rem;
                }
                .section-heading h2 span { color: #84cc16; }
                .section-heading p {
                    color: #4b5563;
                    font-size: 1.2rem;
                    max-width: 40rem;
                    margin: 0 auto;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: radial-gradient(circle at top right, #ecfccb, #fff 55%);
                    box-sizing: border-box;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 800;
                    line-height: 1.1;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .hero h1 .accent { color: #84cc16; }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: #4b5563;
                    max-width: 44rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-bottom: 3rem;
                }
                .hero-primary, .hero-secondary {
                    padding: 1rem 2.2rem;
                    border-radius: 999px;
                    font-weight: 600;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }
                .hero-primary {
                    background: #84cc16;
                    color: #fff;
                    box-shadow: 0 10px 25px rgba(132, 204, 22, 0.3);
                }
                .hero-primary:hover { background: #65a30d; }
                .hero-secondary {
                    border: 2px solid #84cc16;
                    color: #65a30d;
                }
                .hero-secondary:hover { background: #f7fee7; }
                .hero-highlights {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-highlight {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 999px;
                    padding: 0.5rem 1.2rem;
                    color: #374151;
                    font-size: 0.9rem;
                }
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                    margin-bottom: 4rem;
                }
                .about-copy p {
                    color: #4b5563;
                    font-size: 1.1rem;
                    line-height: 1.7;
                    margin-bottom: 1rem;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .about-stat {
                    background: #f7fee7;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    text-align: center;
                }
                .about-stat strong {
                    display: block;
                    font-size: 2.2rem;
                    color: #65a30d;
                }
                .about-stat span { color: #4b5563; }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 2rem;
                }
                .home .projects-section { padding: 6rem 0 0; }
                .testimonials-section { background: #f9fafb; }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 1.4fr;
                    gap: 4rem;
                }
                .contact-details h3 {
                    font-size: 1.6rem;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .contact-detail {
                    display: block;
                    background: #f9fafb;
                    border-radius: 1rem;
                    padding: 1rem 1.25rem;
                    margin-bottom: 1rem;
                    color: #374151;
                    text-decoration: none;
                }
                .contact-detail small {
                    display: block;
                    color: #6b7280;
                    font-size: 0.8rem;
                }
                .contact-socials {
                    display: flex;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }
                .contact-socials a {
                    color: #65a30d;
                    font-weight: 600;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.8rem; }
                    .section-heading h2 { font-size: 2.2rem; }
                    .about-grid, .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <section id="hero" class="hero">
                <div style={HERO_BLOCK.style(mounted)}>
                    <h1 style={HERO_TITLE.style(mounted)}>
                        { for site.hero.title.iter().enumerate().map(|(i, line)| html! {
                            <span class={classes!((i % 2 == 1).then(|| "accent"))}>{line}<br /></span>
                        }) }
                    </h1>
                    <p class="hero-subtitle" style={HERO_COPY.style(mounted)}>{&site.hero.subtitle}</p>
                    <div class="hero-actions" style={HERO_ACTIONS.style(mounted)}>
                        <Link<Route> to={Route::StartProject} classes="hero-primary">
                            {"Start Your Project"}
                        </Link<Route>>
                        <a href="#projects" class="hero-secondary">{"View Our Work"}</a>
                    </div>
                    <div class="hero-highlights">
                        { for site.hero.highlights.iter().enumerate().map(|(i, highlight)| html! {
                            <span class="hero-highlight" style={HIGHLIGHT.stagger(i, 100).style(mounted)}>
                                {highlight}
                            </span>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about">
                <div class="section-inner">
                    <div class="about-grid">
                        <RevealOnScroll transition={FROM_LEFT} class="about-copy">
                            <div class="section-heading" style="text-align: left; margin-bottom: 2rem;">
                                <h2>{"About "}<span>{&site.company.name}</span></h2>
                            </div>
                            <p>
                                {format!("{} is a digital studio that turns ambitious ideas into products people love to use.", site.company.name)}
                            </p>
                            <p>
                                {"From the first workshop to launch day and beyond, one team owns strategy, design and engineering so nothing gets lost in hand-offs."}
                            </p>
                        </RevealOnScroll>
                        <RevealOnScroll transition={FROM_RIGHT} class="about-stats">
                            <div class="about-stat"><strong>{"150+"}</strong><span>{"Projects delivered"}</span></div>
                            <div class="about-stat"><strong>{"7+"}</strong><span>{"Years of experience"}</span></div>
                            <div class="about-stat"><strong>{"99.9%"}</strong><span>{"Client satisfaction"}</span></div>
                            <div class="about-stat"><strong>{"24/7"}</strong><span>{"Support"}</span></div>
                        </RevealOnScroll>
                    </div>
                    <div class="card-grid">
                        { for site.process.iter().enumerate().map(|(index, step)| html! {
                            <StepCard step={step.clone()} {index} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="services">
                <div class="section-inner">
                    <RevealOnScroll transition={SECTION_HEADING} class="section-heading">
                        <h2>{"Our "}<span>{"Services"}</span></h2>
                        <p>{"Everything you need to launch, grow and scale your digital presence."}</p>
                    </RevealOnScroll>
                    <div class="card-grid">
                        { for site.services.iter().enumerate().map(|(index, service)| html! {
                            <ServiceCard service={service.clone()} {index} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="projects" class="projects-section">
                <RevealOnScroll transition={SECTION_HEADING} class="section-heading">
                    <h2>{"Featured "}<span>{"Projects"}</span></h2>
                    <p>{"A selection of products we have designed, built and launched."}</p>
                </RevealOnScroll>
                <ProjectShowcase site={site.clone()} />
            </section>

            <section id="testimonials" class="testimonials-section">
                <div class="section-inner">
                    <RevealOnScroll transition={SECTION_HEADING} class="section-heading">
                        <h2>{"What Clients "}<span>{"Say"}</span></h2>
                    </RevealOnScroll>
                    <div class="card-grid">
                        { for site.testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                            <TestimonialCard testimonial={testimonial.clone()} {index} />
                        }) }
                    </div>
                </div>
            </section>

            <section id="contact">
                <div class="section-inner">
                    <RevealOnScroll transition={SECTION_HEADING} class="section-heading">
                        <h2>{"Let's "}<span>{"Talk"}</span></h2>
                        <p>{"Have a project in mind? Send us a message and we'll get back to you within 24 hours."}</p>
                    </RevealOnScroll>
                    <div class="contact-grid">
                        <RevealOnScroll transition={FROM_LEFT} class="contact-details">
                            <h3>{"Get in touch"}</h3>
                            <a class="contact-detail" href={format!("mailto:{}", site.company.email)}>
                                <small>{"Email Us"}</small>
                                {&site.company.email}
                            </a>
                            <a class="contact-detail" href={site.company.phone_href()}>
                                <small>{"Call Us"}</small>
                                {&site.company.phone}
                            </a>
                            <div class="contact-detail">
                                <small>{"Visit Us"}</small>
                                {&site.company.address}
                            </div>
                            <div class="contact-socials">
                                { for site.company.socials.iter().map(|social| html! {
                                    <a href={social.url.clone()} target="_blank" rel="noopener noreferrer">{&social.name}</a>
                                }) }
                            </div>
                        </RevealOnScroll>
                        <RevealOnScroll transition={FROM_RIGHT}>
                            <ContactForm />
                        </RevealOnScroll>
                    </div>
                </div>
            </section>
        </div>
    }
}
