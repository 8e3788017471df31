use yew::prelude::*;

use crate::components::form_driver::{
    on_input, on_select, on_submit, on_textarea, FormDriver, FormMsg,
};
use crate::components::form_fields::{
    error_of, is_required, max_len_of, value_of, FloatingInput, PopBadge, SelectField,
    TextAreaField, FORM_FIELD_CSS,
};
use crate::forms::{Field, FormConfig, Phase, BUDGETS, PROJECT_TYPES, TIMELINES};

const NEXT_STEPS: [&str; 3] = [
    "We'll review your project requirements",
    "Schedule a discovery call within 24 hours",
    "Provide a detailed proposal and timeline",
];

/// The long start-a-project form.
pub struct ProjectInquiryForm {
    driver: FormDriver,
}

impl Component for ProjectInquiryForm {
    type Message = FormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            driver: FormDriver::new(FormConfig::project_inquiry()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.driver.update(ctx.link(), msg)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.driver.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let body = match self.driver.form.phase() {
            Phase::Submitted => self.view_received(),
            phase => self.view_form(ctx, phase == Phase::Submitting),
        };

        html! {
            <div class="inquiry-card">
                <style>{FORM_FIELD_CSS}</style>
                <style>
                    {r#"
                    .inquiry-card {
                        background: #fff;
                        border-radius: 1.5rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.2);
                        padding: 2.5rem;
                    }
                    .inquiry-card h3 {
                        font-size: 1.9rem;
                        color: #111827;
                        margin-bottom: 0.75rem;
                    }
                    .inquiry-intro {
                        color: #4b5563;
                        font-size: 1.1rem;
                        margin-bottom: 2rem;
                    }
                    .inquiry-form {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .inquiry-group h4 {
                        font-size: 1.25rem;
                        color: #111827;
                        margin-bottom: 1.25rem;
                    }
                    .inquiry-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .inquiry-received {
                        text-align: center;
                        padding: 1rem;
                    }
                    .inquiry-received h3 { font-size: 2.2rem; }
                    .inquiry-received > p {
                        color: #4b5563;
                        font-size: 1.15rem;
                        line-height: 1.6;
                        margin-bottom: 2rem;
                    }
                    .next-steps {
                        background: #f7fee7;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        text-align: left;
                        margin-bottom: 2rem;
                    }
                    .next-steps h4 { margin-bottom: 1rem; }
                    .next-step {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.75rem;
                        color: #374151;
                    }
                    .next-step-number {
                        width: 24px;
                        height: 24px;
                        border-radius: 50%;
                        background: #84cc16;
                        color: #fff;
                        font-size: 0.8rem;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    @media (max-width: 768px) {
                        .inquiry-card { padding: 1.5rem; }
                        .inquiry-grid { grid-template-columns: 1fr; }
                    }
                    "#}
                </style>
                {body}
            </div>
        }
    }
}

impl ProjectInquiryForm {
    fn view_received(&self) -> Html {
        html! {
            <div class="inquiry-received">
                <PopBadge />
                <h3>{"Project Inquiry Received!"}</h3>
                <p>
                    {"Thank you for your detailed project information. Our team will review your requirements and get back to you within 24 hours with a comprehensive proposal."}
                </p>
                <div class="next-steps">
                    <h4>{"What happens next?"}</h4>
                    { for NEXT_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <div class="next-step">
                            <span class="next-step-number">{i + 1}</span>
                            <span>{*step}</span>
                        </div>
                    }) }
                </div>
                <div class="bounce-dots">
                    <span></span>
                    <span style="animation-delay: 0.1s;"></span>
                    <span style="animation-delay: 0.2s;"></span>
                </div>
            </div>
        }
    }

    fn view_form(&self, ctx: &Context<Self>, submitting: bool) -> Html {
        let form = &self.driver.form;
        let link = ctx.link();
        let input = |label: &'static str, input_type: &'static str, field: Field| {
            html! {
                <FloatingInput
                    {label}
                    {input_type}
                    value={value_of(form, field)}
                    error={error_of(form, field)}
                    required={is_required(form, field)}
                    oninput={on_input(link, field)}
                />
            }
        };
        let text = |placeholder: &'static str, rows: u32, field: Field| {
            html! {
                <TextAreaField
                    {placeholder}
                    {rows}
                    value={value_of(form, field)}
                    max_len={max_len_of(form, field)}
                    error={error_of(form, field)}
                    oninput={on_textarea(link, field)}
                />
            }
        };

        html! {
            <>
                <h3>{"Tell us about your project"}</h3>
                <p class="inquiry-intro">
                    {"The more details you provide, the better we can understand your needs and create the perfect solution."}
                </p>
                <form class="inquiry-form" onsubmit={on_submit(link)} novalidate={true}>
                    <div class="inquiry-group">
                        <h4>{"Personal Information"}</h4>
                        <div class="inquiry-grid">
                            { input("First Name", "text", Field::FirstName) }
                            { input("Last Name", "text", Field::LastName) }
                        </div>
                        <div class="inquiry-grid">
                            { input("Email Address", "email", Field::Email) }
                            { input("Phone Number", "tel", Field::Phone) }
                        </div>
                        { input("Company/Organization", "text", Field::Company) }
                    </div>

                    <div class="inquiry-group">
                        <h4>{"Project Details"}</h4>
                        <div class="inquiry-grid">
                            <SelectField
                                placeholder="Select Project Type *"
                                value={value_of(form, Field::ProjectType)}
                                options={PROJECT_TYPES}
                                error={error_of(form, Field::ProjectType)}
                                onchange={on_select(link, Field::ProjectType)}
                            />
                            <SelectField
                                placeholder="Budget Range"
                                value={value_of(form, Field::Budget)}
                                options={BUDGETS}
                                onchange={on_select(link, Field::Budget)}
                            />
                        </div>
                        <SelectField
                            placeholder="Project Timeline"
                            value={value_of(form, Field::Timeline)}
                            options={TIMELINES}
                            onchange={on_select(link, Field::Timeline)}
                        />
                    </div>

                    <div class="inquiry-group">
                        <h4>{"Project Description"}</h4>
                        { text("Describe your project in detail. What are you looking to build? What problems are you trying to solve? *", 6, Field::Description) }
                        <div style="height: 1.5rem;"></div>
                        { text("What are your main goals and objectives for this project?", 4, Field::Goals) }
                        <div class="inquiry-grid" style="margin-top: 1.5rem;">
                            { text("Who is your target audience?", 3, Field::TargetAudience) }
                            { text("Any websites or apps that inspire you? (URLs or descriptions)", 3, Field::Inspiration) }
                        </div>
                    </div>

                    <button type="submit" class={classes!("send-button", submitting.then(|| "busy"))} disabled={submitting}>
                        if submitting {
                            <span class="spinner"></span>
                            {"Submitting Project Inquiry..."}
                        } else {
                            {"Submit Project Inquiry"}
                            <span class="send-arrow">{"➤"}</span>
                        }
                    </button>
                </form>
            </>
        }
    }
}
