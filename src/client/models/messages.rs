/// Messages driving the status panel.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "Check backend" button was pressed.
    CheckBackend,
    /// The health request resolved. The error is carried as a string
    /// because iced messages must be Clone.
    HealthResult(Result<String, String>),
}
