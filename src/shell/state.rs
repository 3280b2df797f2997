use crate::modules::registration::workflow::RegistrationWorkflow;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<RegistrationWorkflow>,
}
