//! TeamCity adapter

use async_trait::async_trait;
use prtrigger_ciapi_interface::{
    types::{BuildLocator, CiBuild, CiBuildList, CiBuildQueueRequest, CsrfToken},
    CiApiError, CiApiService, Result,
};
use prtrigger_config::Config;
use reqwest::Client;

use crate::{
    auth::{
        build_teamcity_url, check_status, get_client_builder, read_headers, token_headers,
        write_headers,
    },
    errors::TeamcityError,
};

/// TeamCity API adapter implementation.
#[derive(Clone)]
pub struct TeamcityApiService {
    config: Config,
}

impl TeamcityApiService {
    /// Creates new TeamCity API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, TeamcityError> {
        get_client_builder(&self.config)
            .build()
            .map_err(TeamcityError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_teamcity_url(&self.config, path)
    }

    fn builds_url(&self, locator: &BuildLocator) -> String {
        self.build_url(format!("/app/rest/builds/?locator={locator}"))
    }
}

fn http_error(e: reqwest::Error) -> CiApiError {
    TeamcityError::from(e).into()
}

#[async_trait]
impl CiApiService for TeamcityApiService {
    #[tracing::instrument(skip(self))]
    async fn csrf_token_get(&self) -> Result<CsrfToken> {
        let response = self
            .get_client()?
            .get(self.build_url("/authenticationTest.html?csrf".into()))
            .headers(token_headers(&self.config)?)
            .send()
            .await
            .map_err(http_error)?;

        let token = check_status(response)?.text().await.map_err(http_error)?;
        Ok(CsrfToken::new(token.trim()))
    }

    #[tracing::instrument(skip(self, csrf_token, locator), fields(locator = %locator), ret)]
    async fn builds_list(
        &self,
        csrf_token: &CsrfToken,
        locator: &BuildLocator,
    ) -> Result<Vec<CiBuild>> {
        let response = self
            .get_client()?
            .get(self.builds_url(locator))
            .headers(read_headers(&self.config, csrf_token)?)
            .send()
            .await
            .map_err(http_error)?;

        Ok(check_status(response)?
            .json::<CiBuildList>()
            .await
            .map_err(http_error)?
            .build)
    }

    #[tracing::instrument(skip(self, csrf_token))]
    async fn build_queue_add(
        &self,
        csrf_token: &CsrfToken,
        request: &CiBuildQueueRequest,
    ) -> Result<()> {
        let response = self
            .get_client()?
            .post(self.build_url("/app/rest/buildQueue".into()))
            .headers(write_headers(&self.config, csrf_token)?)
            .json(request)
            .send()
            .await
            .map_err(http_error)?;

        check_status(response)?;
        Ok(())
    }
}
