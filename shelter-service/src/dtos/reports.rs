use serde::Deserialize;

use crate::query::Filter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WelfareFollowupParams {
    #[serde(default)]
    pub species: Filter<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdoptionStatsParams {
    #[serde(default)]
    pub state: Filter<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutcomeStatsParams {
    #[serde(default)]
    pub org_id: Filter<i64>,
    #[serde(default)]
    pub outcome_type: Filter<String>,
}
