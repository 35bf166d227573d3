use anyhow::Result;
use momentum_site::application::{
    commands::contact::ContactSettings,
    ports::{
        email::EmailSender, time::Clock, util::SlugGenerator, verification::HumanVerifier,
    },
    services::ApplicationServices,
};
use momentum_site::config::AppConfig;
use momentum_site::infrastructure::{
    email::PostmarkEmailSender, security::TurnstileVerifier, time::SystemClock,
    util::PatternSlugGenerator,
};
use momentum_site::presentation::http::{
    routes::{RouterSettings, build_router},
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

    let email_sender: Arc<dyn EmailSender> = Arc::new(PostmarkEmailSender::new(
        config.postmark_api_url(),
        config.postmark_token(),
        config.postmark_message_stream(),
        config.email_timeout(),
    )?);
    let verifier: Arc<dyn HumanVerifier> = Arc::new(TurnstileVerifier::new(
        config.turnstile_verify_url(),
        config.turnstile_secret().map(ToString::to_string),
        config.email_timeout(),
    )?);
    if !verifier.is_enabled() {
        tracing::warn!("TURNSTILE_SECRET_KEY not set, human verification disabled");
    }
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(PatternSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&email_sender),
        Arc::clone(&verifier),
        Arc::clone(&clock),
        Arc::clone(&slugger),
        ContactSettings {
            from: config.mail_from().to_string(),
            owner_inbox: config.owner_inbox().to_string(),
            identity: config.identity().clone(),
        },
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let router_settings = RouterSettings {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: Some(config.rate_limit()),
    };
    tracing::info!(origins = ?router_settings.allowed_origins, "allowed CORS origins");

    let app = build_router(state, &router_settings);
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info".to_string());

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
