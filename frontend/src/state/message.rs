use crate::api::ApiError;

/// Outcome banner shared by forms and actions: at most one of the two is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}
