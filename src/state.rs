use std::{path::PathBuf, sync::Arc};

use crate::config::OpenAiConfig;

#[derive(Clone)]
pub struct AppState {
    pub openai: Arc<OpenAiConfig>,
    pub public_dir: PathBuf,
}

impl AppState {
    #[must_use]
    pub fn new(openai: OpenAiConfig, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            openai: Arc::new(openai),
            public_dir: public_dir.into(),
        }
    }
}
