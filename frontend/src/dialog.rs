use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

/// Blocking message the admin has to acknowledge.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub text: String,
}

impl Notice {
    fn new(level: Level, title: &str, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_owned(),
            text: text.into(),
        }
    }

    pub fn success(title: &str, text: impl Into<String>) -> Self {
        Self::new(Level::Success, title, text)
    }

    pub fn warning(title: &str, text: impl Into<String>) -> Self {
        Self::new(Level::Warning, title, text)
    }

    pub fn error(title: &str, text: impl Into<String>) -> Self {
        Self::new(Level::Error, title, text)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\n{}", self.title, self.text)
    }
}

/// Yes/no question, answered before the action continues.
#[derive(Clone, Debug, PartialEq)]
pub struct Prompt {
    pub title: String,
    pub text: String,
}

impl Prompt {
    pub fn new(title: &str, text: &str) -> Self {
        Self {
            title: title.to_owned(),
            text: text.to_owned(),
        }
    }
}

#[async_trait(?Send)]
pub trait Dialogs {
    /// Resolves once the notice is dismissed.
    async fn notify(&self, notice: Notice);

    async fn confirm(&self, prompt: Prompt) -> bool;
}

/// `window.alert` and `window.confirm`.
pub struct BrowserDialogs;

#[async_trait(?Send)]
impl Dialogs for BrowserDialogs {
    async fn notify(&self, notice: Notice) {
        let shown = web_sys::window()
            .map(|window| window.alert_with_message(&notice.to_string()).is_ok())
            .unwrap_or(false);

        if !shown {
            log::warn!("could not show notice {:?}", notice.title);
        }
    }

    async fn confirm(&self, prompt: Prompt) -> bool {
        let message = format!("{}\n\n{}", prompt.title, prompt.text);

        match web_sys::window().map(|window| window.confirm_with_message(&message)) {
            Some(Ok(answer)) => answer,
            _ => {
                log::warn!("could not ask {:?}, treating it as declined", prompt.title);
                false
            }
        }
    }
}
