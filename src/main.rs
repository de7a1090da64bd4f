use anyhow::Result;
use campaign_api::application::{
    ports::{ImageStyleUrlBuilderPort, TextRendererPort},
    services::ApplicationServices,
};
use campaign_api::config::AppConfig;
use campaign_api::domain::node::{ArticleReadRepository, CampaignReadRepository};
use campaign_api::infrastructure::{
    database,
    image_styles::PublicImageStyleUrlBuilder,
    rendering::FormatTextRenderer,
    repositories::{PostgresArticleReadRepository, PostgresCampaignReadRepository},
};
use campaign_api::presentation::http::{
    response::CachePolicy,
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
    }

    let campaign_repo: Arc<dyn CampaignReadRepository> =
        Arc::new(PostgresCampaignReadRepository::new(pool.clone()));
    let article_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));

    let image_styles: Arc<ImageStyleUrlBuilderPort> = Arc::new(PublicImageStyleUrlBuilder::new(
        config.public_files_url(),
        config.private_files_url(),
        config.image_token_key().map(str::to_string),
    ));
    let renderer: Arc<TextRendererPort> =
        Arc::new(FormatTextRenderer::new(config.teaser_length()));

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&campaign_repo),
        Arc::clone(&article_repo),
        Arc::clone(&image_styles),
        Arc::clone(&renderer),
        config.default_langcode().clone(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        cache_policy: CachePolicy::new(config.cache_max_age()),
    };

    let app = build_router(
        state,
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(
        default_langcode = %config.default_langcode(),
        rate_limit = config.rate_limit_enabled(),
        "listening on {address}"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
