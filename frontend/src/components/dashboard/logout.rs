use crate::components::imports::*;
use crate::controllers;

pub struct Logout;

impl Component for Logout {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let services = ctx.link().services();
        let navigator = ctx.link().navigator();

        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();

            let route = controllers::logout(&services.session);

            if let Some(navigator) = &navigator {
                navigator.push(&route);
            }
        });

        html! {
            <button {onclick} type="button">{ "Logout" }</button>
        }
    }
}
