use std::sync::Arc;

use crate::config::Config;
use crate::db::RegistrationStore;
use crate::submission::Validator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: Arc<dyn RegistrationStore>,
    pub config: Config,
    pub validator: Validator,
}
