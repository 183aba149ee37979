use crate::components::imports::*;
use crate::components::{with_session, ErrorScreen, StudentFields};
use crate::controllers::edit_student::{self, EditStudentState};
use crate::controllers::load_percentage_ranges;

pub struct EditStudent {
    services: Services,
    state: EditStudentState,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: StudentId,
}

pub enum Msg {
    StudentLoaded(Outcome<StudentDraft>),
    PercentageRangesLoaded(Outcome<Vec<PercentageRange>>),
    Draft(DraftField),
    Save,
    Saved(Outcome<()>),
    Back,
}

impl EditStudent {
    fn view_with(&self, ctx: &Context<Self>) -> Html {
        console::log!(format!("drawing EditStudent {}", ctx.props().id));

        let back = ctx.link().callback(|_: MouseEvent| Msg::Back);

        if self.state.loading {
            return html! { <h2>{ "Loading student details..." }</h2> };
        }

        if let Some(error) = &self.state.error {
            return html! {
                <ErrorScreen message={error.clone()} action="Back to Dashboard" onaction={back}/>
            };
        }

        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Save
        });

        let form = css! {"
            display: flex;
            flex-direction: column;
            gap: 10px;
            width: 360px;
            margin: 6vh auto;
        "};

        html! {
            <form {onsubmit} class={form}>
                <h2>{ "Edit Student" }</h2>
                <StudentFields
                    draft={self.state.draft.clone()}
                    percentage_ranges={self.state.percentage_ranges.clone()}
                    onchange={ctx.link().callback(Msg::Draft)}
                />
                <button type="submit" disabled={self.state.saving}>
                    { if self.state.saving { "Updating..." } else { "Update Student" } }
                </button>
                <button type="button" onclick={back}>{ "Cancel" }</button>
            </form>
        }
    }

    fn follow(ctx: &Context<Self>, route: Option<Route>) {
        if let Some(route) = route {
            navigate(ctx, &route);
        }
    }
}

impl Component for EditStudent {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            services: ctx.link().services(),
            state: EditStudentState::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let services = self.services.clone();
            let id = ctx.props().id;
            ctx.link().send_future(async move {
                Msg::StudentLoaded(edit_student::load_student(&services, id).await)
            });

            let services = self.services.clone();
            ctx.link().send_future(async move {
                Msg::PercentageRangesLoaded(load_percentage_ranges(&services).await)
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StudentLoaded(outcome) => {
                Self::follow(ctx, self.state.student_loaded(outcome));
            }
            Msg::PercentageRangesLoaded(outcome) => {
                Self::follow(ctx, self.state.percentage_ranges_loaded(outcome));
            }
            Msg::Draft(field) => self.state.edit_draft(field),
            Msg::Save => {
                let Some(session) = self.services.session.read() else {
                    navigate(ctx, &Route::Login);
                    return false;
                };

                if !self.state.begin_save() {
                    return false;
                }

                let services = self.services.clone();
                let id = ctx.props().id;
                let draft = self.state.draft.clone();
                let admin_id = session.admin_id;
                ctx.link().send_future(async move {
                    Msg::Saved(edit_student::save_student(&services, id, &draft, &admin_id).await)
                });
            }
            Msg::Saved(outcome) => {
                Self::follow(ctx, self.state.student_saved(outcome));
            }
            Msg::Back => {
                navigate(ctx, &Route::Dashboard);
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        with_session(&self.services, |_| self.view_with(ctx))
    }
}
