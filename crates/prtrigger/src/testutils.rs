use clap::Parser;
use prtrigger_ciapi_interface::MockCiApiService;
use prtrigger_config::{ApprovalPolicy, Config, DEFAULT_BUILD_COMMENT, DEFAULT_BUILD_TYPE_IDS};
use prtrigger_core::CoreModule;
use prtrigger_ghapi_interface::MockApiService;

use crate::{
    args::{Args, CommandExecutor},
    command::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub ci_api_service: MockCiApiService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version().unwrap();
        config.api.github.token = "abc".into();
        config.api.teamcity.token = "def".into();
        config.context.repository = String::new();
        config.context.event_path = String::new();
        config.context.pull_number = String::new();
        config.approval_policy = ApprovalPolicy::default();
        config.api.teamcity.build_type_ids = DEFAULT_BUILD_TYPE_IDS
            .iter()
            .map(|id| id.to_string())
            .collect();
        config.api.teamcity.build_comment = DEFAULT_BUILD_COMMENT.into();

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            ci_api_service: MockCiApiService::new(),
        }
    }

    pub fn into_context(self) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            ci_api_service: Box::new(self.ci_api_service),
        }
    }
}

pub(crate) async fn test_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> anyhow::Result<()> {
    let command_args = {
        let mut tmp_args = vec!["prtrigger"];
        tmp_args.extend(command_args);
        tmp_args
    };

    match Args::try_parse_from(command_args) {
        Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context()).await,
        Err(e) => {
            eprintln!("{}", e);
            panic!("Parse error.")
        }
    }
}
