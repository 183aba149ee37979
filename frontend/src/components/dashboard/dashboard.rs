use super::{Logout, StudentsTable};
use crate::components::imports::*;
use crate::components::{with_session, ErrorScreen, StudentFields};
use crate::controllers::dashboard::{self, DashboardState};
use crate::controllers::load_percentage_ranges;

pub struct Dashboard {
    services: Services,
    state: DashboardState,
}

pub enum Msg {
    StudentsLoaded(Outcome<Vec<Student>>),
    PercentageRangesLoaded(Outcome<Vec<PercentageRange>>),
    Draft(DraftField),
    Add,
    Added(Outcome<Student>),
    Edit(StudentId),
    Delete(StudentId),
    Deleted(Outcome<StudentId>),
    Retry,
}

impl Dashboard {
    fn view_with(&self, ctx: &Context<Self>, session: &Session) -> Html {
        console::log!("drawing Dashboard");

        if self.state.loading {
            return html! { <h2>{ "Loading students..." }</h2> };
        }

        if let Some(error) = &self.state.error {
            return html! {
                <ErrorScreen
                    message={error.clone()}
                    action="Retry"
                    onaction={ctx.link().callback(|_| Msg::Retry)}
                />
            };
        }

        let header = css! {"
            display: flex;
            justify-content: space-between;
            align-items: center;
        "};

        html! {
            <div class={css!("padding: 24px;")}>
                <header class={header}>
                    <div>
                        <h1>{ "Student Dashboard" }</h1>
                        <p>{ format!("Welcome, {}", session.display_name) }</p>
                    </div>
                    <Logout/>
                </header>

                { self.add_section(ctx) }

                <section>
                    <h3>{ "Students" }</h3>
                    <StudentsTable
                        students={self.state.students.clone()}
                        admin_id={session.admin_id.clone()}
                        onedit={ctx.link().callback(Msg::Edit)}
                        ondelete={ctx.link().callback(Msg::Delete)}
                    />
                </section>
            </div>
        }
    }

    fn follow(ctx: &Context<Self>, route: Option<Route>) {
        if let Some(route) = route {
            navigate(ctx, &route);
        }
    }

    fn add_section(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Add
        });

        let form = css! {"
            display: flex;
            flex-wrap: wrap;
            gap: 8px;
            margin-bottom: 24px;
        "};

        html! {
            <section>
                <h3>{ "Add Student" }</h3>
                <form {onsubmit} class={form}>
                    <StudentFields
                        draft={self.state.draft.clone()}
                        percentage_ranges={self.state.percentage_ranges.clone()}
                        onchange={ctx.link().callback(Msg::Draft)}
                    />
                    <button type="submit" disabled={self.state.adding}>
                        { if self.state.adding { "Adding..." } else { "Add Student" } }
                    </button>
                </form>
            </section>
        }
    }
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            services: ctx.link().services(),
            state: DashboardState::default(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let services = self.services.clone();
            ctx.link().send_future(async move {
                Msg::StudentsLoaded(dashboard::load_students(&services).await)
            });

            let services = self.services.clone();
            ctx.link().send_future(async move {
                Msg::PercentageRangesLoaded(load_percentage_ranges(&services).await)
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StudentsLoaded(outcome) => {
                Self::follow(ctx, self.state.students_loaded(outcome));
            }
            Msg::PercentageRangesLoaded(outcome) => {
                Self::follow(ctx, self.state.percentage_ranges_loaded(outcome));
            }
            Msg::Draft(field) => self.state.edit_draft(field),
            Msg::Add => {
                let Some(session) = self.services.session.read() else {
                    navigate(ctx, &Route::Login);
                    return false;
                };

                if !self.state.begin_add() {
                    return false;
                }

                let services = self.services.clone();
                let draft = self.state.draft.clone();
                let admin_id = session.admin_id;
                ctx.link().send_future(async move {
                    Msg::Added(dashboard::add_student(&services, &draft, &admin_id).await)
                });
            }
            Msg::Added(outcome) => {
                Self::follow(ctx, self.state.student_added(outcome));
            }
            Msg::Edit(id) => {
                navigate(ctx, &Route::EditStudent { id });
                return false;
            }
            Msg::Delete(id) => {
                let services = self.services.clone();
                ctx.link().send_future(async move {
                    Msg::Deleted(dashboard::delete_student(&services, id).await)
                });
                return false;
            }
            Msg::Deleted(outcome) => {
                Self::follow(ctx, self.state.student_deleted(outcome));
            }
            Msg::Retry => {
                if let Some(window) = web_sys::window() {
                    if let Err(e) = window.location().reload() {
                        console::error!(e);
                    }
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        with_session(&self.services, |session| self.view_with(ctx, &session))
    }
}
