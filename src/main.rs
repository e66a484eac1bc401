use iced::Application;
fn main() -> iced::Result {
    // load environment from .env (optional)
    let _ = dotenvy::dotenv();
    env_logger::init();
    ai_summary_gui::client::gui::app::StatusApp::run(iced::Settings::default())
}
