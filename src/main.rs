use lambda_runtime::{service_fn, Error, LambdaEvent};
use next_game_skill_lambda_rust::config::SkillConfig;
use next_game_skill_lambda_rust::handler::{self, SkillHandler};
use next_game_skill_lambda_rust::model::alexa::AlexaRequest;
use next_game_skill_lambda_rust::schedule::DynamoSeasonStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging with tracing
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_current_span(false)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init();

    let config = SkillConfig::from_env()?;
    info!(table = %config.table_name, time_zone = %config.time_zone, "Starting next game skill");
    let store = DynamoSeasonStore::from_config(&config).await;
    let skill = SkillHandler::new(config, store);
    let skill = &skill;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<AlexaRequest>| async move {
        handler::handler(skill, event).await
    }))
    .await
}
