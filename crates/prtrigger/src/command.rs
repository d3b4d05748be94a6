use prtrigger_ciapi_interface::CiApiService;
use prtrigger_config::Config;
use prtrigger_core::{CoreContext, CoreModule};
use prtrigger_ghapi_interface::ApiService;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub ci_api_service: Box<dyn CiApiService>,
    pub core_module: CoreModule,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            ci_api_service: self.ci_api_service.as_ref(),
        }
    }
}
