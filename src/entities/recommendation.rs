use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::vitals::Vital;

/// A single piece of guidance produced by the recommendation evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Display label, possibly combining two vitals ("BMI & Blood Pressure")
    pub vital: String,

    /// Human-readable guidance
    pub message: String,

    /// The vitals whose readings triggered this rule. Cross-vital
    /// recommendations list every contributor, so callers can group by
    /// category without parsing the label.
    pub sources: Vec<Vital>,
}

impl Recommendation {
    /// Guidance attributed to a single vital.
    pub(crate) fn single(vital: Vital, message: impl Into<String>) -> Self {
        Self {
            vital: vital.label().to_string(),
            message: message.into(),
            sources: vec![vital],
        }
    }

    /// Guidance triggered by a conjunction of vitals and/or answers.
    pub(crate) fn combined(
        label: impl Into<String>,
        sources: &[Vital],
        message: impl Into<String>,
    ) -> Self {
        Self {
            vital: label.into(),
            message: message.into(),
            sources: sources.to_vec(),
        }
    }
}

/// Evaluation output in the shape handed to the external save operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    /// Identifier for the kiosk session that produced the report
    pub session_id: Uuid,

    /// When the evaluation ran
    pub generated_at: DateTime<Utc>,

    /// Recommendations in evaluation order
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    /// Wrap an evaluation result under a fresh session id.
    pub fn new(recommendations: Vec<Recommendation>) -> Self {
        Self::for_session(Uuid::new_v4(), recommendations)
    }

    /// Wrap an evaluation result for an existing kiosk session.
    pub fn for_session(session_id: Uuid, recommendations: Vec<Recommendation>) -> Self {
        Self {
            session_id,
            generated_at: Utc::now(),
            recommendations,
        }
    }
}

/// Errors from the one-shot save guard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SaveGuardError {
    /// The report for this session was already handed to the save boundary
    #[error("Recommendations for session {0} have already been submitted")]
    AlreadyClaimed(Uuid),
}

/// Session-scoped flag ensuring at most one save attempt per generated
/// recommendation set.
///
/// The caller owns the guard and claims it immediately before handing the
/// report to the persistence boundary. Holding the returned [`SaveTicket`]
/// is proof the claim succeeded; every later claim on the same guard fails.
#[derive(Debug)]
pub struct SaveOnceGuard {
    session_id: Uuid,
    claimed: bool,
}

impl SaveOnceGuard {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            claimed: false,
        }
    }

    /// Guard keyed to the session of an already-generated report.
    pub fn for_report(report: &RecommendationReport) -> Self {
        Self::new(report.session_id)
    }

    /// Claim the single save slot for this session.
    pub fn claim(&mut self) -> Result<SaveTicket, SaveGuardError> {
        if self.claimed {
            return Err(SaveGuardError::AlreadyClaimed(self.session_id));
        }
        self.claimed = true;
        Ok(SaveTicket {
            session_id: self.session_id,
        })
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed
    }
}

/// Proof that the save guard for a session was claimed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveTicket {
    session_id: Uuid,
}

impl SaveTicket {
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}
