use anyhow::Result;
use postpilot_core::application::{
    ports::{queue::TaskQueue, time::Clock},
    services::{ApplicationServices, Repositories},
};
use postpilot_core::config::AppConfig;
use postpilot_core::infrastructure::{
    database,
    queue::{NoopTaskQueue, RedisTaskQueue},
    repositories::{
        PostgresArticleJobRepository, PostgresArticleReadRepository,
        PostgresArticleWriteRepository, PostgresBusinessProfileRepository,
        PostgresIdeaReadRepository, PostgresIdeaWriteRepository, PostgresPlanRepository,
        PostgresUserRepository,
    },
    time::SystemClock,
};
use postpilot_core::presentation::http::{routes::build_router, state::HttpState};
use sqlx::PgPool;
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
    database::run_migrations(&pool).await?;

    let queue: Arc<dyn TaskQueue> = match config.redis_url() {
        Some(url) => Arc::new(RedisTaskQueue::from_url(url)?),
        None => {
            tracing::warn!("REDIS_URL not set, task messages are logged and dropped");
            Arc::new(NoopTaskQueue)
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        postgres_repositories(&pool),
        queue,
        clock,
        config.queues().clone(),
    ));

    if config.worker_token().is_none() {
        tracing::warn!("WORKER_TOKEN not set, worker callback routes are disabled");
    }
    let state = HttpState {
        services,
        worker_token: config.worker_token().map(Arc::from),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn postgres_repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        plans: Arc::new(PostgresPlanRepository::new(pool.clone())),
        profiles: Arc::new(PostgresBusinessProfileRepository::new(pool.clone())),
        jobs: Arc::new(PostgresArticleJobRepository::new(pool.clone())),
        idea_read: Arc::new(PostgresIdeaReadRepository::new(pool.clone())),
        idea_write: Arc::new(PostgresIdeaWriteRepository::new(pool.clone())),
        article_read: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        article_write: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
    }
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
            tracing::error!(error = %err, "failed to listen for CTRL+C");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
