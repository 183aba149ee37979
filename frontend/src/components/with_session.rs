use crate::components::imports::*;
use crate::guard::{require_session, Guard};

/// Draws `view` with the stored session, or sends the admin to login.
///
/// Protected views call this from their own `view`, so a session that expires
/// or gets cleared while they are mounted is noticed on their next render.
pub fn with_session(services: &Services, view: impl FnOnce(Session) -> Html) -> Html {
    match require_session(&services.session) {
        Guard::Allow(session) => view(session),
        Guard::Redirect(route) => {
            console::log!("no session, leaving protected view");

            html! { <Redirect<Route> to={route}/> }
        }
    }
}

/// Router level gate, keeps protected views from being built without a session.
pub struct WithSession {
    services: Services,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

impl Component for WithSession {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            services: ctx.link().services(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        with_session(&self.services, |_| {
            console::log!("drawing WithSession with session");
            html! { <>{ ctx.props().children.clone() }</> }
        })
    }
}
