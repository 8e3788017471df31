use yew::prelude::*;

use crate::content::{Service, Step, Testimonial};
use crate::motion::{use_in_view, Reveal, Transition, CARD, STEP};

/// Wraps its children in a block that reveals itself once scrolled into view.
#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    pub transition: Transition,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone());
    html! {
        <div ref={node} class={props.class.clone()} style={props.transition.style(seen)}>
            { for props.children.iter() }
        </div>
    }
}

/// Testimonials lean alternately left and right.
pub fn tilt_for(index: usize) -> i32 {
    if index % 2 == 1 {
        2
    } else {
        -2
    }
}

pub fn star_row(count: usize) -> String {
    "★".repeat(count)
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub index: usize,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let hovered = use_state(|| false);
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let service = &props.service;
    html! {
        <RevealOnScroll transition={CARD.stagger(props.index, 100)}>
            <div
                class={classes!("service-card", format!("accent-{}", service.accent), (*hovered).then(|| "hovered"))}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="service-icon">{service.title.chars().take(1).collect::<String>()}</div>
                <h3>{&service.title}</h3>
                <p>{&service.description}</p>
                <ul class="service-features">
                    { for service.features.iter().map(|feature| html! {
                        <li>{feature}</li>
                    }) }
                </ul>
                if *hovered {
                    <span class="service-more">{"Learn more →"}</span>
                }
            </div>
        </RevealOnScroll>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepCardProps {
    pub step: Step,
    pub index: usize,
}

#[function_component(StepCard)]
pub fn step_card(props: &StepCardProps) -> Html {
    html! {
        <RevealOnScroll transition={STEP.stagger(props.index, 200)} class="step-card">
            <div class="step-number">{&props.step.step}</div>
            <h3>{&props.step.title}</h3>
            <p>{&props.step.description}</p>
        </RevealOnScroll>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
    pub index: usize,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let transition = CARD
        .with_reveal(Reveal::Tilt(tilt_for(props.index)))
        .stagger(props.index, 200);
    let stars = star_row(testimonial.stars());

    html! {
        <RevealOnScroll {transition} class="testimonial-card">
            <div class="testimonial-stars">{stars}</div>
            <p class="testimonial-quote">{format!("\"{}\"", testimonial.content)}</p>
            <div class="testimonial-author">
                if let Some(avatar) = &testimonial.avatar {
                    <img src={avatar.clone()} alt={testimonial.name.clone()} />
                } else {
                    <div class="testimonial-initials">{initials(&testimonial.name)}</div>
                }
                <div>
                    <strong>{&testimonial.name}</strong>
                    <span>{format!("{}, {}", testimonial.role, testimonial.company)}</span>
                </div>
            </div>
        </RevealOnScroll>
    }
}

pub const CARD_CSS: &str = r#"
    .service-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 2rem;
        height: 100%;
        box-sizing: border-box;
        border: 1px solid #f3f4f6;
        box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.1);
        transition: transform 0.4s ease, box-shadow 0.4s ease;
    }
    .service-card.hovered {
        transform: translateY(-10px);
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.2);
    }
    .service-icon {
        width: 3.5rem;
        height: 3.5rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.5rem;
        font-weight: 700;
        color: #fff;
        margin-bottom: 1.5rem;
        background: #84cc16;
    }
    .accent-blue .service-icon { background: #3b82f6; }
    .accent-purple .service-icon { background: #8b5cf6; }
    .accent-orange .service-icon { background: #f97316; }
    .service-card h3 {
        font-size: 1.3rem;
        color: #111827;
        margin-bottom: 0.75rem;
    }
    .service-card p {
        color: #4b5563;
        line-height: 1.6;
        margin-bottom: 1rem;
    }
    .service-features {
        list-style: none;
        padding: 0;
        margin: 0 0 1rem;
    }
    .service-features li {
        color: #374151;
        font-size: 0.9rem;
        padding: 0.25rem 0;
    }
    .service-features li::before {
        content: "✓ ";
        color: #84cc16;
    }
    .service-more {
        color: #65a30d;
        font-weight: 600;
    }
    .step-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 2rem;
        box-shadow: 0 10px 30px -10px rgba(0, 0, 0, 0.1);
    }
    .step-number {
        font-size: 2.5rem;
        font-weight: 800;
        color: #84cc16;
        margin-bottom: 1rem;
    }
    .step-card h3 {
        color: #111827;
        margin-bottom: 0.75rem;
    }
    .step-card p {
        color: #4b5563;
        line-height: 1.6;
    }
    .testimonial-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 2rem;
        box-shadow: 0 20px 40px -12px rgba(0, 0, 0, 0.15);
    }
    .testimonial-stars {
        color: #facc15;
        font-size: 1.25rem;
        margin-bottom: 1rem;
    }
    .testimonial-quote {
        color: #374151;
        font-style: italic;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .testimonial-author {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .testimonial-author img, .testimonial-initials {
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        object-fit: cover;
    }
    .testimonial-initials {
        background: #ecfccb;
        color: #65a30d;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .testimonial-author strong {
        display: block;
        color: #111827;
    }
    .testimonial-author span {
        color: #6b7280;
        font-size: 0.9rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_alternates() {
        assert_eq!(tilt_for(0), -2);
        assert_eq!(tilt_for(1), 2);
        assert_eq!(tilt_for(2), -2);
    }

    #[test]
    fn star_row_follows_clamped_rating() {
        let site = crate::content::SiteData::load().expect("bundled site data parses");
        let mut testimonial = site.testimonials[0].clone();
        testimonial.rating = 4;
        assert_eq!(star_row(testimonial.stars()), "★★★★");
        testimonial.rating = 12;
        assert_eq!(star_row(testimonial.stars()).chars().count(), 5);
    }

    #[test]
    fn initials_use_first_two_words() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials(""), "");
    }
}
