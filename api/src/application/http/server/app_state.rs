use std::sync::Arc;

use flavorscope_core::application::FlavorscopeService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FlavorscopeService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FlavorscopeService) -> Self {
        Self { args, service }
    }
}
