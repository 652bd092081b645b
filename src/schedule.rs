use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_dynamo::aws_sdk_dynamodb_1::from_item;
use tracing::{info, instrument, warn};

use crate::config::SkillConfig;
use crate::error::{Result, SkillError};
use crate::model::season::Season;

/// Read-only access to the season schedule.
#[async_trait]
pub trait SeasonStore: Send + Sync {
    /// Fetch the one season marked current, games included.
    async fn fetch_current_season(&self) -> Result<Season>;
}

#[async_trait]
impl<T: SeasonStore + ?Sized> SeasonStore for Arc<T> {
    async fn fetch_current_season(&self) -> Result<Season> {
        (**self).fetch_current_season().await
    }
}

/// Season store backed by a DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoSeasonStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoSeasonStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self { client, table_name: table_name.into() }
    }

    /// Build a client from the ambient AWS configuration, honouring an endpoint override.
    pub async fn from_config(config: &SkillConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &config.dynamodb_endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        info!(table_name = %config.table_name, "DynamoDB season store enabled");
        Self::new(DynamoClient::new(&sdk_config), config.table_name.clone())
    }
}

#[async_trait]
impl SeasonStore for DynamoSeasonStore {
    #[instrument(level = "info", skip(self), fields(table = %self.table_name))]
    async fn fetch_current_season(&self) -> Result<Season> {
        let mut matches: Vec<HashMap<String, AttributeValue>> = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        // A filtered scan can return empty pages, so keep going until something matches.
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression("currentSeason = :current")
                .expression_attribute_values(":current", AttributeValue::Bool(true))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| SkillError::StoreUnavailable(format!("scan of {} failed: {e}", self.table_name)))?;

            matches.extend(page.items().iter().cloned());
            start_key = page.last_evaluated_key().cloned();
            if !matches.is_empty() || start_key.is_none() {
                break;
            }
        }

        if matches.len() > 1 {
            warn!(count = matches.len(), "More than one season marked current; using the first");
        }
        let item = matches
            .into_iter()
            .next()
            .ok_or_else(|| SkillError::NotFound(format!("no current season in {}", self.table_name)))?;

        let season = season_from_item(item)?;
        info!(season_id = %season.season_id, games = season.games.len(), "Fetched current season");
        Ok(season)
    }
}

/// Convert a raw DynamoDB item into a season record.
pub fn season_from_item(item: HashMap<String, AttributeValue>) -> Result<Season> {
    from_item(item).map_err(|e| SkillError::MalformedRecord(e.to_string()))
}
