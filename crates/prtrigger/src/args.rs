use clap::Parser;
use prtrigger_ciapi_teamcity::TeamcityApiService;
use prtrigger_config::Config;
use prtrigger_core::{
    use_cases::trigger::{TriggerOutcome, TriggerPullRequestBuildsInterface},
    CoreModule,
};
use prtrigger_ghapi_github::GithubApiService;
use prtrigger_models::RepositoryPath;
use shaku::HasComponent;
use tracing::{info, warn};

use crate::{
    command::CommandContext, config_validator::validate_configuration,
    pull_request::resolve_pull_request_handle,
};

/// Queue CI builds for an approved pull request.
#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    /// Pull request number, instead of the one from the event payload.
    #[arg(long)]
    pull_number: Option<u64>,

    /// Repository path (e.g. `MyOrganization/my-project`), instead of GITHUB_REPOSITORY.
    #[arg(long)]
    repository: Option<RepositoryPath>,
}

impl Args {
    fn apply_overrides(&self, config: &mut Config) {
        if let Some(number) = self.pull_number {
            config.context.pull_number = number.to_string();
        }

        if let Some(repository) = &self.repository {
            config.context.repository = repository.full_name();
        }
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> anyhow::Result<()> {
        let ctx = CommandContext {
            api_service: Box::new(GithubApiService::new(config.clone())),
            ci_api_service: Box::new(TeamcityApiService::new(config.clone())),
            core_module: CoreModule::builder().build(),
            config,
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(Self::parse_args_async(args, ctx))
    }

    pub(crate) async fn parse_args_async(
        args: Args,
        mut ctx: CommandContext,
    ) -> anyhow::Result<()> {
        args.apply_overrides(&mut ctx.config);

        // Nothing can be done without credentials, but this is not a failure
        if let Err(e) = validate_configuration(&ctx.config) {
            warn!("Skipping trigger: {}", e);
            return Ok(());
        }

        let pr_handle = resolve_pull_request_handle(&ctx.config)?;
        info!(
            repository_path = %pr_handle.repository_path(),
            pull_number = pr_handle.number(),
            ci_branch = %pr_handle.ci_branch_name(),
            "Inputs"
        );

        let trigger: &dyn TriggerPullRequestBuildsInterface = ctx.core_module.resolve_ref();
        let outcome = trigger.run(&ctx.as_core_context(), &pr_handle).await?;
        log_outcome(&outcome);

        Ok(())
    }
}

fn log_outcome(outcome: &TriggerOutcome) {
    match outcome {
        TriggerOutcome::NotReady { .. } => info!("Pull request not approved yet, nothing to do"),
        TriggerOutcome::AlreadyBuilt => info!("Pull request already built, nothing to do"),
        // Logged by the pipeline
        TriggerOutcome::Aborted(_) => (),
        TriggerOutcome::Dispatched(results) => {
            let queued = results.iter().filter(|r| r.is_ok()).count();
            info!(queued, failed = results.len() - queued, "Builds dispatched");
        }
    }
}
