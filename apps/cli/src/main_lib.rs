use std::sync::Arc;

use auragold_core::invoices::{InvoiceRecordSource, InvoiceService, InvoiceServiceTrait};
use auragold_core::session::{AuthService, AuthServiceTrait, Session, User};
use auragold_invoice_api::InvoiceApiClient;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Services and session state shared by every command.
pub struct AppContext {
    pub config: Config,
    pub session: Session,
    pub record_source: Arc<dyn InvoiceRecordSource>,
    pub invoice_service: Arc<dyn InvoiceServiceTrait>,
    pub auth_service: Arc<dyn AuthServiceTrait>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_context(config: Config) -> anyhow::Result<AppContext> {
    let client = Arc::new(InvoiceApiClient::with_timeout(
        &config.api_base_url,
        config.request_timeout,
    )?);
    tracing::debug!("Invoice API at {}", client.base_url());

    let invoice_service: Arc<dyn InvoiceServiceTrait> =
        Arc::new(InvoiceService::new(client.clone()));
    let auth_service: Arc<dyn AuthServiceTrait> = Arc::new(AuthService::new(client.clone()));

    let session = match &config.user_id {
        Some(id) => Session::with_user(User {
            id: Some(id.clone()),
            ..Default::default()
        }),
        None => Session::new(),
    };

    Ok(AppContext {
        config,
        session,
        record_source: client,
        invoice_service,
        auth_service,
    })
}
