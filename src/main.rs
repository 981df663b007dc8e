use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use course_consultant_backend::catalog::CourseCatalog;
use course_consultant_backend::config::Config;
use course_consultant_backend::consultant::{CompletionClient, GeminiClient};
use course_consultant_backend::{create_router, AppState};

const BANNER: &str = r#"
 ██████╗ ██████╗ ██╗   ██╗██████╗ ███████╗███████╗
██╔════╝██╔═══██╗██║   ██║██╔══██╗██╔════╝██╔════╝
██║     ██║   ██║██║   ██║██████╔╝███████╗█████╗
██║     ██║   ██║██║   ██║██╔══██╗╚════██║██╔══╝
╚██████╗╚██████╔╝╚██████╔╝██║  ██║███████║███████╗
 ╚═════╝ ╚═════╝  ╚═════╝ ╚═╝  ╚═╝╚══════╝╚══════╝
            [Course Consultant Backend]
"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_consultant_backend=info,tower_http=info".into()),
        )
        .init();

    println!("{}", BANNER);

    let config = Config::from_env().context("failed to read configuration")?;

    let catalog = CourseCatalog::load(&config.courses_path)?;

    tracing::info!("🔧 SYSTEM CHECK");

    let completion: Option<Arc<dyn CompletionClient>> = match config.gemini_api_key.as_deref() {
        Some(key) => {
            let client = GeminiClient::new(key)?
                .with_base_url(config.gemini_base_url.as_str())
                .with_model(config.gemini_model.as_str());
            tracing::info!("   ├─ 🧠 Gemini     : ✅ READY ({})", client.model());
            let client: Arc<dyn CompletionClient> = Arc::new(client);
            Some(client)
        }
        None => {
            tracing::error!("   ├─ 🧠 Gemini     : ❌ MISSING (set GEMINI_API_KEY); /ask will fail");
            None
        }
    };

    if catalog.is_empty() {
        tracing::warn!(
            "   └─ 📚 Catalog    : ⚠️  EMPTY ({}), replies carry no course facts",
            config.courses_path.display()
        );
    } else {
        tracing::info!(
            "   └─ 📚 Catalog    : {} courses from {}",
            catalog.len(),
            config.courses_path.display()
        );
    }

    let app = create_router(AppState::new(catalog, completion));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("❌ Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("❌ Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
