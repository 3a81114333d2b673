//! Core gateway traits backed by the REST client.

use async_trait::async_trait;
use auragold_core::errors::Result;
use auragold_core::invoices::{
    InvoiceGatewayTrait, InvoiceRecord, InvoiceRecordSource, InvoiceUpload, NewManualInvoice,
    RecordScope,
};
use auragold_core::session::{AuthGatewayTrait, Credentials, NewAccount, User};

use crate::client::InvoiceApiClient;

#[async_trait]
impl InvoiceRecordSource for InvoiceApiClient {
    async fn list_invoices(&self, scope: &RecordScope) -> Result<Vec<InvoiceRecord>> {
        Ok(InvoiceApiClient::list_invoices(self, scope).await?)
    }
}

#[async_trait]
impl InvoiceGatewayTrait for InvoiceApiClient {
    async fn create_manual_invoice(&self, invoice: NewManualInvoice) -> Result<InvoiceRecord> {
        Ok(InvoiceApiClient::create_manual_invoice(self, &invoice).await?)
    }

    async fn upload_invoice(&self, upload: InvoiceUpload) -> Result<InvoiceRecord> {
        Ok(InvoiceApiClient::upload_invoice(self, upload).await?)
    }

    async fn delete_invoice(&self, invoice_id: &str) -> Result<()> {
        Ok(InvoiceApiClient::delete_invoice(self, invoice_id).await?)
    }
}

#[async_trait]
impl AuthGatewayTrait for InvoiceApiClient {
    async fn login(&self, credentials: Credentials) -> Result<User> {
        Ok(InvoiceApiClient::login(self, &credentials).await?)
    }

    async fn signup(&self, account: NewAccount) -> Result<User> {
        Ok(InvoiceApiClient::create_user(self, &account).await?)
    }
}
