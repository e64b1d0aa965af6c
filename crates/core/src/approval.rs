//! Approval records, the merge reducer, and the effective-status projection.
//!
//! The storage layer does not guarantee uniqueness of
//! `(project, customer, file)` for approval records: duplicate writes,
//! retried notifications, and concurrent admin actions can all leave several
//! raw records describing the same physical file. Uniqueness is restored at
//! read time by [`reconcile`], which groups records by logical file, folds
//! each group with [`merge`], and projects the winner through
//! [`effective_status`].
//!
//! [`merge`] is a commutative, associative, idempotent reducer, so the
//! result is independent of the order records are read in and duplicate
//! reads cannot change it. Nothing here mutates a record or performs I/O;
//! the effective status is recomputed on every read and never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Stored status of a raw approval record.
///
/// Transitions are monotonic: `pending` may become `approved` or
/// `auto-approved`, and the terminal states never revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    AutoApproved,
}

impl ApprovalStatus {
    /// Wire/database representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::AutoApproved => "auto-approved",
        }
    }

    /// Parse the database `status` column.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "auto-approved" => Ok(Self::AutoApproved),
            other => Err(CoreError::Validation(format!(
                "Unknown approval status '{other}'"
            ))),
        }
    }

    /// Terminal statuses outrank `pending` when records are merged.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Approved | Self::AutoApproved)
    }

    fn rank(self) -> u8 {
        if self.is_terminal() {
            1
        } else {
            0
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One raw approval record, as written by the upload and review flows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovalRecord {
    pub id: DbId,
    pub project_id: DbId,
    pub customer_id: DbId,
    /// Hierarchical file identifier. Upstream writers are inconsistent about
    /// storing full vs. relative paths, so grouping goes through [`file_key`].
    pub file_path: String,
    pub status: ApprovalStatus,
    pub uploaded_at: Option<Timestamp>,
    pub approved_at: Option<Timestamp>,
    pub auto_approve_deadline: Option<Timestamp>,
}

/// Reduce a path to its final segment.
///
/// `"p1/reports/2024/summary.pdf"`, `"reports/summary.pdf"` and
/// `"summary.pdf"` all identify the same physical file.
pub fn file_key(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Total order used to pick a winner between two records for the same file.
///
/// Terminal statuses beat `pending`; within equal rank the later activity
/// timestamp (`approved_at`, falling back to `uploaded_at`) wins; the record
/// id breaks any remaining tie so the order is total and `merge` stays
/// commutative for distinct records.
fn merge_key(record: &ApprovalRecord) -> (u8, Option<Timestamp>, DbId) {
    (
        record.status.rank(),
        record.approved_at.or(record.uploaded_at),
        record.id,
    )
}

/// Pick the winning record of two describing the same logical file.
///
/// Never mutates or blends fields; the winner is returned unchanged. The
/// function is commutative, associative, and idempotent, so a set of records
/// can be folded in any order, incrementally, or repeatedly with the same
/// result.
pub fn merge<'a>(a: &'a ApprovalRecord, b: &'a ApprovalRecord) -> &'a ApprovalRecord {
    if merge_key(b) > merge_key(a) {
        b
    } else {
        a
    }
}

// ---------------------------------------------------------------------------
// Effective status
// ---------------------------------------------------------------------------

/// Display-time status of a logical file, derived from the merge winner and
/// the current time. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum EffectiveStatus {
    Approved { approved_at: Option<Timestamp> },
    AutoApproved { approved_at: Option<Timestamp> },
    Pending { pending_until: Option<Timestamp> },
}

/// Project the merge winner onto its effective status at `now`.
///
/// A `pending` record whose deadline has been reached is shown as
/// auto-approved at the deadline; the underlying record stays untouched.
pub fn effective_status(winner: &ApprovalRecord, now: Timestamp) -> EffectiveStatus {
    match winner.status {
        ApprovalStatus::Approved => EffectiveStatus::Approved {
            approved_at: winner.approved_at,
        },
        ApprovalStatus::AutoApproved => EffectiveStatus::AutoApproved {
            approved_at: winner.approved_at.or(winner.auto_approve_deadline),
        },
        ApprovalStatus::Pending => match winner.auto_approve_deadline {
            Some(deadline) if now >= deadline => EffectiveStatus::AutoApproved {
                approved_at: Some(deadline),
            },
            deadline => EffectiveStatus::Pending {
                pending_until: deadline,
            },
        },
    }
}

/// The reconciled view of one logical file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectiveApproval {
    pub project_id: DbId,
    pub customer_id: DbId,
    /// Normalized file name (the grouping key's final path segment).
    pub file_name: String,
    /// Id of the raw record that won the merge.
    pub record_id: DbId,
    #[serde(flatten)]
    pub status: EffectiveStatus,
}

/// Reconcile a set of raw records into one effective approval per logical
/// file.
///
/// Records are grouped by `(project_id, customer_id, file_key(file_path))`,
/// each group is folded with [`merge`], and the winner is projected through
/// [`effective_status`]. Output order is deterministic (sorted by group key).
pub fn reconcile(records: &[ApprovalRecord], now: Timestamp) -> Vec<EffectiveApproval> {
    let mut winners: BTreeMap<(DbId, DbId, &str), &ApprovalRecord> = BTreeMap::new();

    for record in records {
        let key = (
            record.project_id,
            record.customer_id,
            file_key(&record.file_path),
        );
        winners
            .entry(key)
            .and_modify(|current| *current = merge(*current, record))
            .or_insert(record);
    }

    winners
        .into_iter()
        .map(|((project_id, customer_id, name), winner)| EffectiveApproval {
            project_id,
            customer_id,
            file_name: name.to_string(),
            record_id: winner.id,
            status: effective_status(winner, now),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
