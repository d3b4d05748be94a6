use prtrigger_ciapi_interface::CiApiService;
use prtrigger_config::Config;
use prtrigger_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub ci_api_service: &'a (dyn CiApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use prtrigger_ciapi_interface::MockCiApiService;
    use prtrigger_config::{
        ApprovalPolicy, Config, BUILD_HISTORY_COUNT, DEFAULT_BUILD_COMMENT, DEFAULT_BUILD_TYPE_IDS,
    };
    use prtrigger_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    /// Environment-based config, with every value the use cases read pinned to its default.
    #[allow(dead_code)]
    pub fn test_config() -> Config {
        let mut config = Config::from_env_no_version().unwrap();
        config.approval_policy = ApprovalPolicy::default();
        config.api.teamcity.build_type_ids = DEFAULT_BUILD_TYPE_IDS
            .iter()
            .map(|id| id.to_string())
            .collect();
        config.api.teamcity.build_comment = DEFAULT_BUILD_COMMENT.into();
        config.api.teamcity.history_count = BUILD_HISTORY_COUNT;
        config
    }

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub ci_api_service: MockCiApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: test_config(),
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
                ci_api_service: MockCiApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                ci_api_service: &self.ci_api_service,
            }
        }
    }

    #[cfg(test)]
    #[test]
    fn test_config_is_pinned() {
        let config = test_config();

        assert_eq!(config.approval_policy, ApprovalPolicy::RequestedReviewers);
        assert_eq!(
            config.api.teamcity.build_type_ids,
            vec!["Tests_Linux", "Tests_Windows", "Tests_MacOS", "Perf_Linux"]
        );
        assert_eq!(config.api.teamcity.build_comment, DEFAULT_BUILD_COMMENT);
        assert_eq!(config.api.teamcity.history_count, 9);
    }
}
