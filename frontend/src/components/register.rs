use crate::components::imports::*;
use crate::controllers::register::{self, Hint, RegisterField, RegisterForm};

pub struct Register {
    services: Services,
    form: RegisterForm,
    submitting: bool,
}

pub enum Msg {
    Field(RegisterField),
    TogglePassword,
    ToggleConfirmPassword,
    Submit,
    Submitted(Outcome<Route>),
}

fn hint_view(hint: Option<Hint>) -> Html {
    match hint {
        None => html! {},
        Some(Hint { ok, text }) => {
            let color = if ok { "rgb(46 160 67)" } else { "rgb(248 83 20)" };
            html! {
                <small class={css!("color: ${color};", color = color)}>{ text }</small>
            }
        }
    }
}

impl Register {
    fn password_input(
        &self,
        ctx: &Context<Self>,
        placeholder: &'static str,
        value: &str,
        shown: bool,
        field: fn(String) -> RegisterField,
        toggle: fn() -> Msg,
    ) -> Html {
        let oninput = ctx
            .link()
            .callback(move |event: InputEvent| Msg::Field(field(input_value(&event))));
        let onclick = ctx.link().callback(move |_: MouseEvent| toggle());

        html! {
            <div class={css!("display: flex; gap: 6px;")}>
                <input
                    type={ if shown { "text" } else { "password" } }
                    {placeholder}
                    value={value.to_owned()}
                    {oninput}
                    required=true
                />
                <button type="button" {onclick}>{ if shown { "Hide" } else { "Show" } }</button>
            </div>
        }
    }
}

impl Component for Register {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            services: ctx.link().services(),
            form: RegisterForm::default(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Field(field) => self.form.apply(field),
            Msg::TogglePassword => self.form.toggle_password(),
            Msg::ToggleConfirmPassword => self.form.toggle_confirm_password(),
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                self.submitting = true;

                let services = self.services.clone();
                let form = self.form.clone();
                ctx.link().send_future(async move {
                    Msg::Submitted(register::submit(&services, &form).await)
                });
            }
            Msg::Submitted(outcome) => {
                self.submitting = false;

                if let Outcome::Done(route) = outcome {
                    navigate(ctx, &route);
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        console::log!("drawing Register");

        let form = &self.form;

        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let on_username = ctx
            .link()
            .callback(|event: InputEvent| Msg::Field(RegisterField::Username(input_value(&event))));
        let on_email = ctx
            .link()
            .callback(|event: InputEvent| Msg::Field(RegisterField::Email(input_value(&event))));

        let card = css! {"
            display: flex;
            flex-direction: column;
            gap: 12px;
            width: 360px;
            margin: 10vh auto;
        "};

        html! {
            <div class={card}>
                <h2>{ "Admin Registration" }</h2>
                <form {onsubmit} class={css!("display: flex; flex-direction: column; gap: 12px;")}>
                    <input type="text" placeholder="Username" value={form.username.clone()} oninput={on_username} required=true/>
                    <input type="email" placeholder="Email" value={form.email.clone()} oninput={on_email} required=true/>

                    { self.password_input(ctx, "Password", &form.password, form.show_password, RegisterField::Password, || Msg::TogglePassword) }
                    { hint_view(form.password_hint()) }

                    { self.password_input(ctx, "Confirm Password", &form.confirm_password, form.show_confirm_password, RegisterField::ConfirmPassword, || Msg::ToggleConfirmPassword) }
                    { hint_view(form.match_hint()) }

                    <button type="submit" disabled={self.submitting}>
                        { if self.submitting { "Registering..." } else { "Register" } }
                    </button>
                </form>
                <p>
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                </p>
            </div>
        }
    }
}
