use async_trait::async_trait;
use prtrigger_ciapi_interface::types::CsrfToken;
use shaku::{Component, Interface};

use crate::{CoreContext, DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AcquireCiCredentialsInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<CsrfToken>;
}

#[derive(Component)]
#[shaku(interface = AcquireCiCredentialsInterface)]
pub(crate) struct AcquireCiCredentials;

#[async_trait]
impl AcquireCiCredentialsInterface for AcquireCiCredentials {
    #[tracing::instrument(skip_all, err)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<CsrfToken> {
        ctx.ci_api_service
            .csrf_token_get()
            .await
            .map_err(|e| DomainError::AuthError { source: e })
    }
}
