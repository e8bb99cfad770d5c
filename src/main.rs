use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use pdf_analyzer::{
    assets::{PDF_WORKER_FILE, is_worker_installed},
    config::{OpenAiConfig, ServerConfig},
    http::router,
    logging,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let openai = OpenAiConfig::from_env();
    let server = ServerConfig::from_env();
    debug!("Resolved configuration: {openai:?}, {server:?}");
    info!("Chat completions endpoint: {}", openai.normalized_chat_url());
    if !openai.has_key() {
        warn!("OPENAI_API_KEY is not set");
    }
    if !is_worker_installed(&server.public_dir).await {
        warn!(
            "{} is missing from {}, run copy-pdf-worker first",
            PDF_WORKER_FILE,
            server.public_dir.display()
        );
    }

    let app = router(AppState::new(openai, server.public_dir));

    let listener = TcpListener::bind(&server.listen).await?;
    info!("Server running on {}", server.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
