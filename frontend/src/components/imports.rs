pub use crate::controllers::{DraftField, Outcome, StudentDraft};
pub use crate::router::Route;
pub use crate::services::Services;
pub use crate::session::Session;

pub use std::rc::Rc;

pub use gloo_console as console;
pub use interfacing::{PercentageRange, Student, StudentId};
pub use stylist::css;
pub use stylist::yew::{styled_component, Global};
pub use web_sys::{HtmlInputElement, HtmlSelectElement};
pub use yew::html::Scope;
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub trait ServicesExt {
    fn services(&self) -> Services;
}

impl<COMP: Component> ServicesExt for Scope<COMP> {
    fn services(&self) -> Services {
        // services never change, no need to keep the handle
        let (services, _handle) = self
            .context::<Services>(Callback::from(|_| ()))
            .expect("Services context does not exist");
        services
    }
}

pub fn navigate<COMP: Component>(ctx: &Context<COMP>, route: &Route) {
    match ctx.link().navigator() {
        Some(navigator) => navigator.push(route),
        None => console::error!(format!("no navigator to open {}", route.to_path())),
    }
}

pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}
