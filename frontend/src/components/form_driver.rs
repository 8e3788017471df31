use gloo_timers::callback::Timeout;
use log::debug;
use yew::html::Scope;
use yew::prelude::*;

use crate::forms::{Field, FormConfig, InquiryForm};

pub enum FormMsg {
    Update(Field, String),
    Submit,
    TimerElapsed,
}

/// Holds at most one pending timer. Arming replaces (and so drops) the
/// previous one; clearing drops whatever is pending.
pub struct TimerSlot<T> {
    pending: Option<T>,
}

impl<T> TimerSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn arm(&mut self, timer: T) {
        self.pending = Some(timer);
    }

    /// Drops the pending timer. True if there was one.
    pub fn clear(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

/// Owns a form controller and the one timer that can be pending for it.
/// Dropping the driver drops the `Timeout`, which clears it.
pub struct FormDriver {
    pub form: InquiryForm,
    timer: TimerSlot<Timeout>,
}

impl FormDriver {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: InquiryForm::new(config),
            timer: TimerSlot::new(),
        }
    }

    /// Feeds `msg` to the controller and returns the delay of the timer
    /// that must be armed next, if any.
    pub fn step(&mut self, msg: FormMsg) -> Option<u32> {
        match msg {
            FormMsg::Update(field, value) => {
                self.form.update_field(field, value);
                None
            }
            FormMsg::Submit => {
                if self.form.submit() {
                    self.form.pending_delay()
                } else {
                    None
                }
            }
            FormMsg::TimerElapsed => {
                self.form.advance();
                self.form.pending_delay()
            }
        }
    }

    pub fn update<C>(&mut self, link: &Scope<C>, msg: FormMsg) -> bool
    where
        C: Component<Message = FormMsg>,
    {
        if matches!(msg, FormMsg::TimerElapsed) {
            self.timer.clear();
        }
        if let Some(delay) = self.step(msg) {
            let link = link.clone();
            self.timer.arm(Timeout::new(delay, move || {
                link.send_message(FormMsg::TimerElapsed)
            }));
        }
        true
    }

    pub fn teardown(&mut self) {
        if self.timer.clear() {
            debug!("{} form: cancelled pending timer", self.form.config().name);
        }
    }
}

pub fn on_input<C>(link: &Scope<C>, field: Field) -> Callback<InputEvent>
where
    C: Component<Message = FormMsg>,
{
    link.callback(move |e: InputEvent| {
        let target: web_sys::HtmlInputElement = e.target_unchecked_into();
        FormMsg::Update(field, target.value())
    })
}

pub fn on_textarea<C>(link: &Scope<C>, field: Field) -> Callback<InputEvent>
where
    C: Component<Message = FormMsg>,
{
    link.callback(move |e: InputEvent| {
        let target: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        FormMsg::Update(field, target.value())
    })
}

pub fn on_select<C>(link: &Scope<C>, field: Field) -> Callback<Event>
where
    C: Component<Message = FormMsg>,
{
    link.callback(move |e: Event| {
        let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
        FormMsg::Update(field, target.value())
    })
}

pub fn on_submit<C>(link: &Scope<C>) -> Callback<SubmitEvent>
where
    C: Component<Message = FormMsg>,
{
    link.callback(|e: SubmitEvent| {
        e.prevent_default();
        FormMsg::Submit
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::forms::{Field, Phase};

    struct CountsDrops(Rc<Cell<u32>>);

    impl Drop for CountsDrops {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn filled_contact() -> FormDriver {
        let mut driver = FormDriver::new(FormConfig::contact());
        driver.step(FormMsg::Update(Field::Name, "Ann".into()));
        driver.step(FormMsg::Update(Field::Email, "ann@x.com".into()));
        driver.step(FormMsg::Update(
            Field::Message,
            "Please build me a website for my bakery".into(),
        ));
        driver
    }

    #[test]
    fn submit_then_timers_walk_the_lifecycle() {
        let mut driver = filled_contact();
        assert_eq!(driver.step(FormMsg::Submit), Some(2000));
        assert_eq!(driver.form.phase(), Phase::Submitting);

        assert_eq!(driver.step(FormMsg::TimerElapsed), Some(3000));
        assert_eq!(driver.form.phase(), Phase::Submitted);

        assert_eq!(driver.step(FormMsg::TimerElapsed), None);
        assert_eq!(driver.form.phase(), Phase::Editing);
        assert_eq!(driver.form.value(Field::Name), "");
    }

    #[test]
    fn inquiry_form_holds_confirmation_longer() {
        let mut driver = FormDriver::new(FormConfig::project_inquiry());
        driver.step(FormMsg::Update(Field::FirstName, "Lee".into()));
        driver.step(FormMsg::Update(Field::LastName, "Park".into()));
        driver.step(FormMsg::Update(Field::Email, "lee@park.dev".into()));
        driver.step(FormMsg::Update(Field::ProjectType, "saas".into()));
        driver.step(FormMsg::Update(
            Field::Description,
            "A booking platform for yoga studios".into(),
        ));
        assert_eq!(driver.step(FormMsg::Submit), Some(2000));
        assert_eq!(driver.step(FormMsg::TimerElapsed), Some(5000));
    }

    #[test]
    fn rejected_or_repeated_submit_arms_nothing() {
        let mut driver = FormDriver::new(FormConfig::contact());
        assert_eq!(driver.step(FormMsg::Submit), None);
        assert_eq!(driver.form.phase(), Phase::Editing);

        let mut driver = filled_contact();
        assert_eq!(driver.step(FormMsg::Submit), Some(2000));
        assert_eq!(driver.step(FormMsg::Submit), None);
        assert_eq!(driver.form.phase(), Phase::Submitting);
    }

    #[test]
    fn typing_never_arms_a_timer() {
        let mut driver = FormDriver::new(FormConfig::contact());
        assert_eq!(driver.step(FormMsg::Update(Field::Name, "A".into())), None);
    }

    #[test]
    fn arming_replaces_and_clearing_drops_the_pending_timer() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = TimerSlot::new();
        assert!(!slot.clear());

        slot.arm(CountsDrops(drops.clone()));
        slot.arm(CountsDrops(drops.clone()));
        assert_eq!(drops.get(), 1);
        assert!(slot.is_armed());

        assert!(slot.clear());
        assert_eq!(drops.get(), 2);
        assert!(!slot.is_armed());
        assert!(!slot.clear());
    }

    #[test]
    fn dropping_the_slot_drops_its_timer() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut slot = TimerSlot::new();
            slot.arm(CountsDrops(drops.clone()));
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn teardown_on_idle_form_is_harmless() {
        let mut driver = filled_contact();
        driver.teardown();
        assert_eq!(driver.form.phase(), Phase::Editing);
    }
}
