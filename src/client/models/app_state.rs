use crate::client::config::ClientConfig;
use crate::client::models::messages::Message;
use crate::client::services::health_service::HealthService;
use iced::Command;

pub const STATUS_IDLE: &str = "Frontend running";
pub const STATUS_CHECKING: &str = "Checking backend...";

/// The single piece of UI state: the human-readable status line.
#[derive(Debug, Clone)]
pub struct PanelState {
    pub status: String,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            status: STATUS_IDLE.to_string(),
        }
    }
}

impl PanelState {
    pub fn update(&mut self, message: Message, config: &ClientConfig) -> Command<Message> {
        match message {
            Message::CheckBackend => {
                self.status = STATUS_CHECKING.to_string();
                let backend_url = config.backend_url.clone();
                log::info!("Checking backend health at {}", backend_url);
                // Each press spawns its own request; overlapping checks are
                // not sequenced, the last response to resolve wins.
                Command::perform(
                    async move {
                        HealthService::check(&backend_url)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::HealthResult,
                )
            }
            Message::HealthResult(Ok(message)) => {
                self.status = format!("Backend says: {}", message);
                Command::none()
            }
            Message::HealthResult(Err(e)) => {
                // No user-visible error state: the status line stays at
                // "Checking backend..." and the failure goes to the log.
                log::error!("Backend health check failed: {}", e);
                Command::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClientConfig {
        ClientConfig {
            backend_url: "http://127.0.0.1:3000".to_string(),
        }
    }

    #[test]
    fn initial_status_is_frontend_running() {
        assert_eq!(PanelState::default().status, "Frontend running");
    }

    #[test]
    fn check_backend_sets_checking_status() {
        let mut state = PanelState::default();
        let _cmd = state.update(Message::CheckBackend, &test_config());
        assert_eq!(state.status, "Checking backend...");
    }

    #[test]
    fn successful_result_updates_status() {
        let mut state = PanelState::default();
        let _ = state.update(Message::CheckBackend, &test_config());
        let _ = state.update(Message::HealthResult(Ok("OK".to_string())), &test_config());
        assert_eq!(state.status, "Backend says: OK");
    }

    #[test]
    fn degraded_result_is_rendered_verbatim() {
        let mut state = PanelState::default();
        let _ = state.update(
            Message::HealthResult(Ok("degraded".to_string())),
            &test_config(),
        );
        assert_eq!(state.status, "Backend says: degraded");
    }

    #[test]
    fn failed_result_leaves_status_at_checking() {
        let mut state = PanelState::default();
        let _ = state.update(Message::CheckBackend, &test_config());
        let _ = state.update(
            Message::HealthResult(Err("connection refused".to_string())),
            &test_config(),
        );
        assert_eq!(state.status, "Checking backend...");
    }

    #[test]
    fn last_resolved_response_wins() {
        let mut state = PanelState::default();
        let config = test_config();
        // Two presses before either response lands.
        let _ = state.update(Message::CheckBackend, &config);
        let _ = state.update(Message::CheckBackend, &config);
        // Responses apply in resolution order, not trigger order.
        let _ = state.update(Message::HealthResult(Ok("OK".to_string())), &config);
        let _ = state.update(Message::HealthResult(Ok("degraded".to_string())), &config);
        assert_eq!(state.status, "Backend says: degraded");
    }
}
