mod api;
mod app;
mod components;
mod conf;
mod controllers;
mod dialog;
mod guard;
mod router;
mod services;
mod session;
mod switch;

#[cfg(test)]
mod testing;

fn main() {
    // LOG_LEVEL=off leaves the logger uninstalled
    if let Some(level) = conf::log_level().to_level() {
        if let Err(e) = console_log::init_with_level(level) {
            gloo_console::warn!(format!("logger is not installed: {}", e));
        }
    }

    yew::Renderer::<app::App>::new().render();
}
