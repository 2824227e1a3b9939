//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::greet;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

#[derive(thiserror::Error)]
pub enum StartupError {
    #[error("Failed to bind {address}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to start the HTTP server")]
    Serve(#[source] std::io::Error),
}

impl std::fmt::Debug for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        tracing::info!("Start server on port {}", self.port);
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, StartupError> {
    let address = config.application.address();
    let tcp_listener = TcpListener::bind(&address).map_err(|source| StartupError::Bind {
        address: address.clone(),
        source,
    })?;
    let port = tcp_listener
        .local_addr()
        .map_err(|source| StartupError::Bind { address, source })?
        .port();

    let server = run(tcp_listener).map_err(StartupError::Serve)?;

    Ok(Application { port, server })
}

pub fn run(listener: TcpListener) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(|| {
        App::new().wrap(TracingLogger::default()).service(
            web::resource("/")
                .route(web::get().to(greet))
                .route(web::head().to(greet)),
        )
    })
    .listen(listener)?
    .run();

    Ok(server)
}
