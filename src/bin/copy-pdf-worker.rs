use anyhow::{Context, Result};

use pdf_analyzer::{assets::WorkerAsset, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    let asset = WorkerAsset::from_env();
    asset
        .install()
        .await
        .context("[copy-pdf-worker] failed to install the PDF worker")?;

    Ok(())
}
