pub mod json;
pub mod md;

use crate::error::CricketError;
use crate::types::matches::Match;
use crate::types::performance::MotmResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_motm(m: &Match, result: &MotmResult, format: OutputFormat) -> Result<String, CricketError> {
    match format {
        OutputFormat::Json => json::motm_to_json(result).map_err(CricketError::Json),
        OutputFormat::Md => Ok(md::motm_to_markdown(m, result)),
    }
}

pub fn render_scorecard(m: &Match, format: OutputFormat) -> Result<String, CricketError> {
    match format {
        OutputFormat::Json => json::scorecard_to_json(m).map_err(CricketError::Json),
        OutputFormat::Md => Ok(md::scorecard_to_markdown(m)),
    }
}
