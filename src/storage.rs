use crate::models::PlanEntry;
use crate::plan::{PlanError, ReadingPlan};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

const BUNDLED_PLAN_JSON: &str = include_str!("../assets/mcheyne-plan.json");

/// External plan document, if one is configured. Without the override the
/// bundled table is used.
pub fn resolve_plan_path() -> Option<PathBuf> {
    env::var("APP_PLAN_PATH").ok().map(PathBuf::from)
}

pub fn bundled_plan() -> Result<ReadingPlan, PlanError> {
    let entries: Vec<PlanEntry> = match serde_json::from_str(BUNDLED_PLAN_JSON) {
        Ok(entries) => entries,
        Err(err) => {
            error!("failed to parse bundled plan: {err}");
            Vec::new()
        }
    };
    ReadingPlan::new(entries)
}

/// Loads and validates the plan table. A broken or missing external file falls
/// back to the bundled plan instead of leaving the server without a table.
pub async fn load_plan(path: Option<&Path>) -> Result<ReadingPlan, PlanError> {
    let Some(path) = path else {
        return bundled_plan();
    };

    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<PlanEntry>>(&bytes) {
            Ok(entries) => match ReadingPlan::new(entries) {
                Ok(plan) => Ok(plan),
                Err(err) => {
                    error!("plan file {} rejected: {err}", path.display());
                    bundled_plan()
                }
            },
            Err(err) => {
                error!("failed to parse plan file: {err}");
                bundled_plan()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            error!("plan file {} not found", path.display());
            bundled_plan()
        }
        Err(err) => {
            error!("failed to read plan file: {err}");
            bundled_plan()
        }
    }
}
