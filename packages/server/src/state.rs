use std::sync::Arc;

use crate::config::AppConfig;
use crate::repo::MonitorRepo;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn MonitorRepo>,
    pub config: AppConfig,
}
