use std::sync::Arc;

use crate::config::Config;
use crate::repository::ClientRepository;

#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub config: Config,
}
