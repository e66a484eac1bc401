use iced::{Application, Command, Element, Theme};

use crate::client::config::ClientConfig;
use crate::client::models::app_state::PanelState;
use crate::client::models::messages::Message;

pub struct StatusApp {
    pub state: PanelState,
    pub config: ClientConfig,
}

impl Application for StatusApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let app = StatusApp {
            state: PanelState::default(),
            config: ClientConfig::from_env(),
        };
        (app, Command::none())
    }

    fn title(&self) -> String {
        "AI Summary App".to_string()
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        self.state.update(message, &self.config)
    }

    fn view(&self) -> Element<Message> {
        crate::client::gui::views::status_panel::view(&self.state)
    }
}
