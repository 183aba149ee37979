use crate::components::imports::*;
use crate::controllers::login;
use interfacing::LoginForm;
use secrecy::SecretString;

#[styled_component]
pub fn Login() -> Html {
    let services = use_context::<Services>().expect("Services context does not exist");
    let navigator = use_navigator().expect("Login is drawn outside of a router");

    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);

    let onsubmit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if *submitting {
                return;
            }

            let (Some(username), Some(password)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let login_form = LoginForm {
                username: username.value(),
                password: SecretString::new(password.value()),
            };

            let services = services.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                console::log!(format!("submitting: {:?}", login_form));

                let outcome = login::submit(&services, &login_form).await;
                submitting.set(false);

                if let Outcome::Done(route) = outcome {
                    navigator.push(&route);
                }
            })
        })
    };

    let card = css! {"
        display: flex;
        flex-direction: column;
        gap: 12px;
        width: 320px;
        margin: 10vh auto;
    "};

    html! {
        <div class={card}>
            <h2>{ "Admin Login" }</h2>
            <form {onsubmit} method="post" class={css!("display: flex; flex-direction: column; gap: 12px;")}>
                <input ref={username_ref} type="text" placeholder="Username" name="username" required=true/>
                <input ref={password_ref} type="password" placeholder="Password" name="password" required=true/>
                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Logging in..." } else { "Login" } }
                </button>
            </form>
            <p>
                { "Don't have an account? " }
                <Link<Route> to={Route::Register}>{ "Register Now" }</Link<Route>>
            </p>
        </div>
    }
}
