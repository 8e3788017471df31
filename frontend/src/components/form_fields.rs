use yew::prelude::*;

use crate::forms::{Field, FieldError, InquiryForm};
use crate::motion::{use_mounted, CONFIRMATION};

#[derive(Properties, PartialEq)]
pub struct FloatingInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    pub oninput: Callback<InputEvent>,
}

#[function_component(FloatingInput)]
pub fn floating_input(props: &FloatingInputProps) -> Html {
    let focused = use_state(|| false);

    let onfocus = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(true))
    };
    let onblur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(false))
    };

    let raised = *focused || !props.value.is_empty();
    html! {
        <div class={classes!("floating-field", raised.then(|| "raised"), props.error.is_some().then(|| "has-error"))}>
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder=" "
                oninput={props.oninput.clone()}
                {onfocus}
                {onblur}
            />
            <label class={classes!((*focused).then(|| "focused"))}>
                {&props.label}
                if props.required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            <ErrorText error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub placeholder: AttrValue,
    pub value: AttrValue,
    pub options: &'static [(&'static str, &'static str)],
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub onchange: Callback<Event>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    html! {
        <div class={classes!("select-field", props.error.is_some().then(|| "has-error"))}>
            <select onchange={props.onchange.clone()}>
                <option value="" selected={props.value.is_empty()}>{&props.placeholder}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={*value} selected={props.value.as_str() == *value}>{*label}</option>
                }) }
            </select>
            <span class="select-chevron">{"⌄"}</span>
            <ErrorText error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaFieldProps {
    pub placeholder: AttrValue,
    pub value: AttrValue,
    #[prop_or(4)]
    pub rows: u32,
    #[prop_or_default]
    pub max_len: Option<usize>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub oninput: Callback<InputEvent>,
}

#[function_component(TextAreaField)]
pub fn text_area_field(props: &TextAreaFieldProps) -> Html {
    let count = props.value.chars().count();
    html! {
        <div class={classes!("textarea-field", props.error.is_some().then(|| "has-error"))}>
            <textarea
                rows={props.rows.to_string()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                maxlength={props.max_len.map(|max| max.to_string())}
                oninput={props.oninput.clone()}
            />
            if let Some(max) = props.max_len {
                <div class="char-counter">{format!("{}/{}", count, max)}</div>
            }
            <ErrorText error={props.error.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ErrorTextProps {
    error: Option<AttrValue>,
}

#[function_component(ErrorText)]
fn error_text(props: &ErrorTextProps) -> Html {
    match &props.error {
        Some(error) => html! { <p class="field-error">{error}</p> },
        None => html! {},
    }
}

#[function_component(PopBadge)]
pub fn pop_badge() -> Html {
    let mounted = use_mounted();
    html! {
        <div class="confirmation-badge" style={CONFIRMATION.style(mounted)}>{"✓"}</div>
    }
}

pub fn value_of(form: &InquiryForm, field: Field) -> AttrValue {
    AttrValue::from(form.value(field).to_string())
}

pub fn error_of(form: &InquiryForm, field: Field) -> Option<AttrValue> {
    form.error(field).map(|error: &FieldError| AttrValue::from(error.to_string()))
}

pub fn is_required(form: &InquiryForm, field: Field) -> bool {
    form.config()
        .spec(field)
        .map(|spec| spec.rule.is_required())
        .unwrap_or(false)
}

pub fn max_len_of(form: &InquiryForm, field: Field) -> Option<usize> {
    form.config().spec(field).and_then(|spec| spec.max_len)
}

pub const FORM_FIELD_CSS: &str = r#"
    .floating-field, .select-field, .textarea-field {
        position: relative;
        width: 100%;
    }
    .floating-field input, .select-field select, .textarea-field textarea {
        width: 100%;
        background: #fff;
        border: 2px solid #e5e7eb;
        border-radius: 1rem;
        padding: 1.1rem 1rem 0.7rem;
        font-size: 1rem;
        color: #1f2937;
        transition: border-color 0.2s ease;
        box-sizing: border-box;
    }
    .floating-field input:focus, .select-field select:focus, .textarea-field textarea:focus {
        outline: none;
        border-color: #84cc16;
    }
    .has-error input, .has-error select, .has-error textarea {
        border-color: #fca5a5;
    }
    .floating-field label {
        position: absolute;
        left: 1rem;
        top: 0.95rem;
        font-size: 0.95rem;
        color: #6b7280;
        pointer-events: none;
        background: #fff;
        padding: 0 0.25rem;
        transition: all 0.2s ease;
    }
    .floating-field.raised label {
        top: -0.6rem;
        font-size: 0.72rem;
    }
    .floating-field label.focused { color: #65a30d; }
    .floating-field.has-error label { color: #ef4444; }
    .required-mark { color: #ef4444; }
    .select-field select {
        appearance: none;
        cursor: pointer;
        padding: 1rem;
    }
    .select-chevron {
        position: absolute;
        right: 1rem;
        top: 0.9rem;
        color: #9ca3af;
        pointer-events: none;
    }
    .textarea-field textarea {
        resize: none;
        padding: 1rem;
        font-family: inherit;
    }
    .char-counter {
        position: absolute;
        right: 1rem;
        bottom: 1rem;
        font-size: 0.8rem;
        color: #9ca3af;
    }
    .has-error .char-counter { bottom: 2.6rem; }
    .field-error {
        color: #ef4444;
        font-size: 0.85rem;
        margin: 0.4rem 0 0 0.25rem;
        animation: errorIn 0.2s ease-out;
    }
    @keyframes errorIn {
        from { opacity: 0; transform: translateY(-10px); }
        to { opacity: 1; transform: translateY(0); }
    }
    .send-button {
        width: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.75rem;
        padding: 1.1rem;
        border: none;
        border-radius: 1rem;
        background: #84cc16;
        color: #fff;
        font-size: 1.05rem;
        font-weight: 600;
        cursor: pointer;
        box-shadow: 0 10px 20px rgba(132, 204, 22, 0.25);
        transition: all 0.3s ease;
    }
    .send-button:hover { background: #65a30d; }
    .send-button.busy {
        background: #9ca3af;
        cursor: not-allowed;
        box-shadow: none;
    }
    .send-button:hover .send-arrow { transform: translateX(4px); }
    .send-arrow { transition: transform 0.3s ease; }
    .spinner {
        width: 20px;
        height: 20px;
        border: 2px solid rgba(255, 255, 255, 0.3);
        border-top-color: #fff;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .confirmation-badge {
        width: 80px;
        height: 80px;
        margin: 0 auto 1.5rem;
        border-radius: 50%;
        background: #ecfccb;
        color: #65a30d;
        font-size: 2.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .bounce-dots {
        display: flex;
        justify-content: center;
        gap: 0.5rem;
    }
    .bounce-dots span {
        width: 8px;
        height: 8px;
        border-radius: 50%;
        background: #84cc16;
        animation: bounce 1s infinite;
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-6px); }
    }
"#;
