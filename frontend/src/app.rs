use crate::components::DefaultStyling;
use crate::conf::ApiConf;
use crate::router::Route;
use crate::services::Services;
use crate::switch::switch;

use yew::prelude::*;
use yew_router::prelude::{BrowserRouter, Switch};

#[function_component(App)]
pub fn app() -> Html {
    let services = use_state(|| Services::browser(ApiConf::from_build_env()));

    html! {
        <ContextProvider<Services> context={(*services).clone()}>
            <DefaultStyling>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </DefaultStyling>
        </ContextProvider<Services>>
    }
}
