//! Pin progress demo - a slider driving three pin buttons and a circle
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use pinprogress::app::App;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size((560.0, 380.0))
        .antialiasing(true)
        .run()?;

    Ok(())
}
