use crate::router::Route;

use yew::prelude::*;
use yew_router::prelude::Redirect;

pub fn switch(route: Route) -> Html {
    use crate::components::*;

    if let Some(target) = route.redirect() {
        return html! { <Redirect<Route> to={target}/> };
    }

    let view = match route.clone() {
        Route::Login => html! { <Login/> },
        Route::Register => html! { <Register/> },
        Route::Dashboard => html! { <Dashboard/> },
        Route::EditStudent { id } => html! { <EditStudent {id}/> },
        Route::Root | Route::NotFound => html! { <Redirect<Route> to={Route::Login}/> },
    };

    if route.is_protected() {
        html! { <WithSession>{ view }</WithSession> }
    } else {
        view
    }
}
