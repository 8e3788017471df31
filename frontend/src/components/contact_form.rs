use yew::prelude::*;

use crate::components::form_driver::{on_input, on_submit, on_textarea, FormDriver, FormMsg};
use crate::components::form_fields::{
    error_of, is_required, max_len_of, value_of, FloatingInput, PopBadge, TextAreaField,
    FORM_FIELD_CSS,
};
use crate::forms::{Field, FormConfig, Phase};

pub struct ContactForm {
    driver: FormDriver,
}

impl Component for ContactForm {
    type Message = FormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            driver: FormDriver::new(FormConfig::contact()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.driver.update(ctx.link(), msg)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.driver.teardown();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let form = &self.driver.form;
        let link = ctx.link();

        let body = if form.phase() == Phase::Submitted {
            html! {
                <div class="contact-confirmation">
                    <PopBadge />
                    <h3>{"Thank You!"}</h3>
                    <p>{"Your message has been sent successfully. We'll get back to you within 24 hours."}</p>
                    <div class="bounce-dots">
                        <span></span>
                        <span style="animation-delay: 0.1s;"></span>
                        <span style="animation-delay: 0.2s;"></span>
                    </div>
                </div>
            }
        } else {
            let submitting = form.phase() == Phase::Submitting;
            html! {
                <form class="contact-form" onsubmit={on_submit(link)} novalidate={true}>
                    <div class="form-row">
                        <FloatingInput
                            label="Your Name"
                            value={value_of(form, Field::Name)}
                            error={error_of(form, Field::Name)}
                            required={is_required(form, Field::Name)}
                            oninput={on_input(link, Field::Name)}
                        />
                        <FloatingInput
                            label="Your Email"
                            input_type="email"
                            value={value_of(form, Field::Email)}
                            error={error_of(form, Field::Email)}
                            required={is_required(form, Field::Email)}
                            oninput={on_input(link, Field::Email)}
                        />
                    </div>
                    <FloatingInput
                        label="Your Mobile Number"
                        input_type="tel"
                        value={value_of(form, Field::Mobile)}
                        error={error_of(form, Field::Mobile)}
                        required={is_required(form, Field::Mobile)}
                        oninput={on_input(link, Field::Mobile)}
                    />
                    <TextAreaField
                        placeholder="Tell us about your project... *"
                        rows={6}
                        value={value_of(form, Field::Message)}
                        max_len={max_len_of(form, Field::Message)}
                        error={error_of(form, Field::Message)}
                        oninput={on_textarea(link, Field::Message)}
                    />
                    <button type="submit" class={classes!("send-button", submitting.then(|| "busy"))} disabled={submitting}>
                        if submitting {
                            <span class="spinner"></span>
                            {"Sending Message..."}
                        } else {
                            {"Send Message"}
                            <span class="send-arrow">{"➤"}</span>
                        }
                    </button>
                </form>
            }
        };

        html! {
            <>
                <style>{FORM_FIELD_CSS}</style>
                <style>
                    {r#"
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    .contact-confirmation {
                        text-align: center;
                        padding: 2rem 0;
                    }
                    .contact-confirmation h3 {
                        font-size: 1.9rem;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .contact-confirmation p {
                        color: #4b5563;
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }
                    @media (max-width: 768px) {
                        .contact-form .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                    "#}
                </style>
                {body}
            </>
        }
    }
}
