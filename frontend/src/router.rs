use interfacing::StudentId;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/edit-student/:id")]
    EditStudent { id: StudentId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that only render with a session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::EditStudent { .. })
    }

    /// Routes that are never rendered and where they lead instead.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Root | Self::NotFound => Some(Self::Login),
            _ => None,
        }
    }
}
