//! The result handed back to the caller of an espionage operation.

use serde::Serialize;

use super::dominion::DominionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    pub success: bool,
    pub message: String,
    pub alert_type: AlertType,
    /// The operation key as the caller supplied it.
    pub operation: String,
    /// Target whose op-center page shows the fresh info-op. Only set after a
    /// successful info-gathering operation.
    pub redirect: Option<DominionId>,
}

impl OperationResult {
    pub fn succeeded(operation: &str, message: String, redirect: DominionId) -> Self {
        Self {
            success: true,
            message,
            alert_type: AlertType::Success,
            operation: operation.to_string(),
            redirect: Some(redirect),
        }
    }

    pub fn failed(operation: &str, message: String) -> Self {
        Self {
            success: false,
            message,
            alert_type: AlertType::Warning,
            operation: operation.to_string(),
            redirect: None,
        }
    }
}
