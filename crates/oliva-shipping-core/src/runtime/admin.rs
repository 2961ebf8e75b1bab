// crates/oliva-shipping-core/src/runtime/admin.rs
// ============================================================================
// Module: Shipping Config Admin
// Description: Edit sessions and atomic commits of configuration versions.
// Purpose: Let administrators change tiers, zone costs, and the home rule
//          without ever exposing an invalid configuration to resolution.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! An [`EditSession`] starts from the active snapshot and records every edit
//! as a [`ConfigEdit`] while applying it to a private working copy. At
//! [`ConfigAdmin::commit`] the recorded edits are replayed on the snapshot
//! that is active *at commit time*, the result is validated as a whole, and
//! the store swaps it in with a compare-and-swap on the active version.
//! Concurrent sessions therefore resolve last-writer-wins without losing
//! the earlier writer's changes.
//!
//! Commits are serialized by a mutex held for the whole replay, validate,
//! and activate sequence. Failures leave the stored configuration untouched.
//!
//! Security posture: admin input is untrusted; every edit is checked against
//! the catalog before it is recorded and the full aggregate is validated
//! again before activation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::ConfigId;
use crate::core::ConfigVersion;
use crate::core::HomeZoneRule;
use crate::core::InvariantError;
use crate::core::RateDescriptor;
use crate::core::ShippingConfig;
use crate::core::ShippingConfigDraft;
use crate::core::TierLabel;
use crate::core::TierUpperBound;
use crate::core::Timestamp;
use crate::core::WeightTier;
use crate::core::Zone;
use crate::core::tiers::insert_tier;
use crate::core::tiers::remove_tier;
use crate::interfaces::ShippingAuditEvent;
use crate::interfaces::ShippingAuditSink;
use crate::interfaces::ShippingConfigStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Admin operation failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum AdminError {
    /// The edit or the resulting configuration violates an invariant.
    #[error(transparent)]
    Invariant(#[from] InvariantError),
    /// No configuration has been bootstrapped yet.
    #[error("no active shipping configuration")]
    NoActiveConfig,
    /// The version counter cannot be incremented further.
    #[error("shipping configuration version counter exhausted")]
    VersionExhausted,
    /// The session was already committed or rejected.
    #[error("edit session is closed ({state})")]
    SessionClosed {
        /// Terminal state of the session.
        state: EditState,
    },
    /// The tier catalog changed since the session began and the session
    /// holds edits addressed by tier index.
    #[error("edit session from version {base} is stale: tiers changed by version {active}")]
    StaleSession {
        /// Version the session was loaded from.
        base: ConfigVersion,
        /// Active version at commit time.
        active: ConfigVersion,
    },
    /// The store failed or refused the activation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AdminError {
    /// Returns a stable label for audit records.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Invariant(err) => err.label(),
            Self::NoActiveConfig => "no_active_config",
            Self::VersionExhausted => "version_exhausted",
            Self::SessionClosed {
                ..
            } => "session_closed",
            Self::StaleSession {
                ..
            } => "stale_session",
            Self::Store(StoreError::Conflict {
                ..
            }) => "store_conflict",
            Self::Store(_) => "store_error",
        }
    }
}

// ============================================================================
// SECTION: Edits
// ============================================================================

/// Lifecycle state of an edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditState {
    /// Loaded from the active snapshot; no edits yet.
    Loaded,
    /// At least one edit was applied to the working copy.
    Mutating,
    /// The replayed configuration passed full validation.
    Validated,
    /// The configuration was activated.
    Committed,
    /// The commit failed; nothing was written.
    Rejected,
}

impl EditState {
    /// Returns the state label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "loaded",
            Self::Mutating => "mutating",
            Self::Validated => "validated",
            Self::Committed => "committed",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true for `Committed` and `Rejected`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Committed | Self::Rejected)
    }
}

impl std::fmt::Display for EditState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded admin edit.
///
/// Edits are replayable: applying the same sequence to the same draft always
/// yields the same result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ConfigEdit {
    /// Adds a bounded tier at the end of the bounded range.
    AddTier {
        /// Width of the new tier in grams.
        width_grams: u64,
        /// Display label.
        label: TierLabel,
    },
    /// Removes a tier and its zone costs.
    RemoveTier {
        /// Tier index.
        index: usize,
    },
    /// Sets one zone cost cell.
    UpdateZoneCost {
        /// Target zone.
        zone: Zone,
        /// Target tier index.
        tier_index: usize,
        /// New rate descriptor.
        descriptor: RateDescriptor,
    },
    /// Replaces the home zone rule.
    UpdateHomeZoneRule {
        /// New rule.
        rule: HomeZoneRule,
    },
    /// Changes a tier's upper bound and moves the next tier's minimum.
    SetTierUpperBound {
        /// Tier index.
        index: usize,
        /// New upper bound.
        upper: TierUpperBound,
    },
    /// Changes a tier's display label.
    RelabelTier {
        /// Tier index.
        index: usize,
        /// New label.
        label: TierLabel,
    },
}

impl ConfigEdit {
    /// Returns true when the edit addresses a tier by index.
    ///
    /// Such edits only replay onto a snapshot whose tier catalog matches the
    /// one they were recorded against.
    #[must_use]
    pub const fn is_tier_indexed(&self) -> bool {
        matches!(
            self,
            Self::RemoveTier { .. }
                | Self::UpdateZoneCost { .. }
                | Self::SetTierUpperBound { .. }
                | Self::RelabelTier { .. }
        )
    }

    /// Applies the edit to `draft` in place.
    ///
    /// On error `draft` may be partially modified; callers apply edits to a
    /// scratch copy.
    ///
    /// # Errors
    ///
    /// Returns the [`InvariantError`] the edit would violate immediately.
    pub fn apply(&self, draft: &mut ShippingConfigDraft) -> Result<(), InvariantError> {
        match self {
            Self::AddTier {
                width_grams,
                label,
            } => add_tier(draft, *width_grams, label.clone()).map(|_| ()),
            Self::RemoveTier {
                index,
            } => remove_tier_repaired(draft, *index),
            Self::UpdateZoneCost {
                zone,
                tier_index,
                descriptor,
            } => update_zone_cost(draft, *zone, *tier_index, descriptor.clone()),
            Self::UpdateHomeZoneRule {
                rule,
            } => {
                rule.validate()?;
                draft.home_zone_rule = rule.clone();
                Ok(())
            }
            Self::SetTierUpperBound {
                index,
                upper,
            } => set_tier_upper_bound(draft, *index, *upper),
            Self::RelabelTier {
                index,
                label,
            } => {
                let tier_count = draft.weight_tiers.len();
                let tier = draft.weight_tiers.get_mut(*index).ok_or(
                    InvariantError::UnknownTierIndex {
                        index: *index,
                        tier_count,
                    },
                )?;
                tier.label = label.clone();
                Ok(())
            }
        }
    }
}

/// Adds a bounded tier and returns its index.
///
/// With an unbounded tail the new tier is spliced in before it and the tail
/// minimum shifts up; otherwise it is appended. Placeholder cells are
/// created for every non-home zone at the new index.
fn add_tier(
    draft: &mut ShippingConfigDraft,
    width_grams: u64,
    label: TierLabel,
) -> Result<usize, InvariantError> {
    let tiers = &draft.weight_tiers;
    let tail = tiers.last();
    let index = match tail {
        Some(last) if last.is_unbounded() => tiers.len() - 1,
        _ => tiers.len(),
    };
    if width_grams == 0 {
        return Err(InvariantError::InvertedTier {
            index,
        });
    }
    let next = match tail {
        None => vec![WeightTier::bounded(0, width_grams - 1, label)],
        Some(last) if last.is_unbounded() => {
            let max_grams = last.min_grams.saturating_add(width_grams - 1);
            let mut next: Vec<WeightTier> = tiers.iter().take(index).cloned().collect();
            next.push(WeightTier::bounded(last.min_grams, max_grams, label));
            next.push(WeightTier {
                min_grams: max_grams.saturating_add(1),
                upper: TierUpperBound::Unbounded,
                label: last.label.clone(),
            });
            next
        }
        Some(_) => insert_tier(tiers, index - 1, width_grams, label)?,
    };
    draft.weight_tiers = next;
    draft.zone_costs = draft.zone_costs.reindex_after_tier_insertion(index);
    draft.zone_costs.insert_placeholders(index);
    Ok(index)
}

/// Removes a tier, closes the hole it leaves, and cascades to zone costs.
fn remove_tier_repaired(
    draft: &mut ShippingConfigDraft,
    index: usize,
) -> Result<(), InvariantError> {
    let removed = draft
        .weight_tiers
        .get(index)
        .cloned()
        .ok_or(InvariantError::UnknownTierIndex {
            index,
            tier_count: draft.weight_tiers.len(),
        })?;
    if draft.weight_tiers.len() == 1 {
        return Err(InvariantError::LastTier);
    }
    let mut next = remove_tier(&draft.weight_tiers, index)?;
    if let Some(following) = next.get_mut(index) {
        following.min_grams = removed.min_grams;
    } else if let Some(last) = next.last_mut() {
        last.upper = removed.upper;
    }
    draft.weight_tiers = next;
    draft.zone_costs = draft.zone_costs.reindex_after_tier_removal(index);
    Ok(())
}

/// Sets one zone cost cell after checking index, zone, and price.
fn update_zone_cost(
    draft: &mut ShippingConfigDraft,
    zone: Zone,
    tier_index: usize,
    descriptor: RateDescriptor,
) -> Result<(), InvariantError> {
    if tier_index >= draft.weight_tiers.len() {
        return Err(InvariantError::UnknownTierIndex {
            index: tier_index,
            tier_count: draft.weight_tiers.len(),
        });
    }
    if zone.is_home() {
        return Err(InvariantError::HomeZoneCostEntry);
    }
    if descriptor.display_price.is_negative() {
        return Err(InvariantError::NegativeCost);
    }
    draft.zone_costs.upsert(zone, tier_index, descriptor);
    Ok(())
}

/// Changes a tier's upper bound and moves the following minimum to `max + 1`.
fn set_tier_upper_bound(
    draft: &mut ShippingConfigDraft,
    index: usize,
    upper: TierUpperBound,
) -> Result<(), InvariantError> {
    let tier_count = draft.weight_tiers.len();
    let tier = draft.weight_tiers.get_mut(index).ok_or(InvariantError::UnknownTierIndex {
        index,
        tier_count,
    })?;
    if let TierUpperBound::Bounded {
        max_grams,
    } = upper
        && max_grams < tier.min_grams
    {
        return Err(InvariantError::InvertedTier {
            index,
        });
    }
    tier.upper = upper;
    if let TierUpperBound::Bounded {
        max_grams,
    } = upper
        && let Some(following) = draft.weight_tiers.get_mut(index + 1)
    {
        following.min_grams = max_grams.saturating_add(1);
    }
    Ok(())
}

// ============================================================================
// SECTION: Edit Session
// ============================================================================

/// Working copy of the configuration plus the edits applied to it.
///
/// # Invariants
/// - `working` equals the base snapshot with `edits` applied in order.
/// - Once `Committed` or `Rejected` the session accepts no further edits.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Version the session was loaded from (or last committed).
    base_version: ConfigVersion,
    /// Tier catalog of the base version.
    base_tiers: Vec<WeightTier>,
    /// Working copy with all recorded edits applied.
    working: ShippingConfigDraft,
    /// Recorded edits, in application order.
    edits: Vec<ConfigEdit>,
    /// Lifecycle state.
    state: EditState,
}

impl EditSession {
    /// Starts a session from `active`.
    fn from_active(active: &ShippingConfig) -> Self {
        Self {
            base_version: active.version,
            base_tiers: active.weight_tiers.clone(),
            working: active.draft(),
            edits: Vec::new(),
            state: EditState::Loaded,
        }
    }

    /// Returns the version the session is based on.
    #[must_use]
    pub const fn base_version(&self) -> ConfigVersion {
        self.base_version
    }

    /// Returns the working copy.
    #[must_use]
    pub const fn working(&self) -> &ShippingConfigDraft {
        &self.working
    }

    /// Returns the recorded edits.
    #[must_use]
    pub fn edits(&self) -> &[ConfigEdit] {
        &self.edits
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> EditState {
        self.state
    }

    /// Applies and records an edit. A failed edit leaves the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::SessionClosed`] for a terminal session or
    /// [`AdminError::Invariant`] when the edit is rejected.
    pub fn apply(&mut self, edit: ConfigEdit) -> Result<(), AdminError> {
        if self.state.is_terminal() {
            return Err(AdminError::SessionClosed {
                state: self.state,
            });
        }
        let mut scratch = self.working.clone();
        edit.apply(&mut scratch)?;
        self.working = scratch;
        self.edits.push(edit);
        self.state = EditState::Mutating;
        Ok(())
    }

    /// Adds a bounded tier and returns its index.
    ///
    /// # Errors
    ///
    /// See [`EditSession::apply`].
    pub fn add_tier(&mut self, width_grams: u64, label: TierLabel) -> Result<usize, AdminError> {
        self.apply(ConfigEdit::AddTier {
            width_grams,
            label,
        })?;
        let tiers = &self.working.weight_tiers;
        Ok(match tiers.last() {
            Some(last) if last.is_unbounded() => tiers.len().saturating_sub(2),
            _ => tiers.len().saturating_sub(1),
        })
    }

    /// Removes the tier at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::LastTier`] when only one tier remains.
    pub fn remove_tier(&mut self, index: usize) -> Result<(), AdminError> {
        self.apply(ConfigEdit::RemoveTier {
            index,
        })
    }

    /// Sets the cost of one zone/tier cell.
    ///
    /// # Errors
    ///
    /// See [`EditSession::apply`].
    pub fn update_zone_cost(
        &mut self,
        zone: Zone,
        tier_index: usize,
        descriptor: RateDescriptor,
    ) -> Result<(), AdminError> {
        self.apply(ConfigEdit::UpdateZoneCost {
            zone,
            tier_index,
            descriptor,
        })
    }

    /// Replaces the home zone rule.
    ///
    /// # Errors
    ///
    /// See [`EditSession::apply`].
    pub fn update_home_zone_rule(&mut self, rule: HomeZoneRule) -> Result<(), AdminError> {
        self.apply(ConfigEdit::UpdateHomeZoneRule {
            rule,
        })
    }

    /// Changes a tier's upper bound.
    ///
    /// # Errors
    ///
    /// See [`EditSession::apply`].
    pub fn set_tier_upper_bound(
        &mut self,
        index: usize,
        upper: TierUpperBound,
    ) -> Result<(), AdminError> {
        self.apply(ConfigEdit::SetTierUpperBound {
            index,
            upper,
        })
    }

    /// Changes a tier's label.
    ///
    /// # Errors
    ///
    /// See [`EditSession::apply`].
    pub fn relabel_tier(&mut self, index: usize, label: TierLabel) -> Result<(), AdminError> {
        self.apply(ConfigEdit::RelabelTier {
            index,
            label,
        })
    }

    /// Lists placeholder cells in the working copy.
    #[must_use]
    pub fn placeholder_cells(&self) -> Vec<(Zone, usize)> {
        self.working.zone_costs.placeholder_cells()
    }
}

// ============================================================================
// SECTION: Admin Service
// ============================================================================

/// Configuration admin service.
///
/// # Invariants
/// - Only this service writes configuration versions.
/// - Commits are serialized by `commit_lock`.
pub struct ConfigAdmin<S> {
    /// Configuration store.
    store: S,
    /// Audit sink for commit outcomes.
    audit: Arc<dyn ShippingAuditSink>,
    /// Serializes replay, validation, and activation.
    commit_lock: Mutex<()>,
}

impl<S: ShippingConfigStore> ConfigAdmin<S> {
    /// Creates an admin service over `store`.
    #[must_use]
    pub fn new(store: S, audit: Arc<dyn ShippingAuditSink>) -> Self {
        Self {
            store,
            audit,
            commit_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Starts an edit session from the active snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoActiveConfig`] before bootstrap, or
    /// [`AdminError::Store`] when loading fails.
    pub fn begin(&self) -> Result<EditSession, AdminError> {
        let active = self.store.load_active()?.ok_or(AdminError::NoActiveConfig)?;
        Ok(EditSession::from_active(&active))
    }

    /// Replays the session on the active snapshot, validates, and activates.
    ///
    /// Edits addressed by tier index are only replayed when the active tier
    /// catalog still matches the session's base catalog.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant, [`AdminError::NoActiveConfig`],
    /// [`AdminError::VersionExhausted`], [`AdminError::SessionClosed`],
    /// [`AdminError::StaleSession`], or [`AdminError::Store`]. The session
    /// ends `Rejected` on any error.
    pub fn commit(
        &self,
        session: &mut EditSession,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        if session.state.is_terminal() {
            return Err(AdminError::SessionClosed {
                state: session.state,
            });
        }
        let guard = self.commit_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut active_version = None;
        let result = self.commit_locked(session, at, &mut active_version);
        drop(guard);
        match &result {
            Ok(version) => {
                session.state = EditState::Committed;
                if let Some(previous_version) = active_version {
                    self.audit.record(&ShippingAuditEvent::ConfigCommitted {
                        version: *version,
                        previous_version,
                        edits: session.edits.len(),
                    });
                }
            }
            Err(err) => {
                session.state = EditState::Rejected;
                self.record_rejection(active_version, err);
            }
        }
        result
    }

    /// Commit body; runs with the commit lock held.
    fn commit_locked(
        &self,
        session: &mut EditSession,
        at: Timestamp,
        active_version: &mut Option<ConfigVersion>,
    ) -> Result<ConfigVersion, AdminError> {
        let active = self.store.load_active()?.ok_or(AdminError::NoActiveConfig)?;
        *active_version = Some(active.version);
        if active.version != session.base_version
            && active.weight_tiers != session.base_tiers
            && session.edits.iter().any(ConfigEdit::is_tier_indexed)
        {
            return Err(AdminError::StaleSession {
                base: session.base_version,
                active: active.version,
            });
        }
        let mut draft = active.draft();
        for edit in &session.edits {
            edit.apply(&mut draft)?;
        }
        draft.validate()?;
        session.state = EditState::Validated;
        let candidate = active.successor(draft, at).ok_or(AdminError::VersionExhausted)?;
        self.store.activate(&candidate, Some(active.version))?;
        session.base_version = candidate.version;
        session.base_tiers = candidate.weight_tiers.clone();
        session.working = candidate.draft();
        Ok(candidate.version)
    }

    /// Records a rejected commit.
    fn record_rejection(&self, active_version: Option<ConfigVersion>, err: &AdminError) {
        self.audit.record(&ShippingAuditEvent::CommitRejected {
            active_version,
            reason: err.label().to_string(),
            message: err.to_string(),
        });
    }

    /// Creates version 1 from `draft` when nothing is active yet.
    ///
    /// Returns the existing active version unchanged when a configuration
    /// is already active.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant of `draft` or
    /// [`AdminError::Store`].
    pub fn bootstrap(
        &self,
        draft: ShippingConfigDraft,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        self.bootstrap_as(ConfigId::default(), draft, at)
    }

    /// Creates version 1 under `config_id` when nothing is active yet.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::bootstrap`].
    pub fn bootstrap_as(
        &self,
        config_id: ConfigId,
        draft: ShippingConfigDraft,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        let guard = self.commit_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(active) = self.store.load_active()? {
            return Ok(active.version);
        }
        let result = draft.validate().map_err(AdminError::from).and_then(|()| {
            let config = ShippingConfig::initial(config_id, draft, at);
            self.store.activate(&config, None)?;
            Ok(config.version)
        });
        drop(guard);
        match &result {
            Ok(version) => self.audit.record(&ShippingAuditEvent::ConfigBootstrapped {
                version: *version,
            }),
            Err(err) => self.record_rejection(None, err),
        }
        result
    }

    /// Lists placeholder cells in the active configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::NoActiveConfig`] or [`AdminError::Store`].
    pub fn placeholder_cells(&self) -> Result<Vec<(Zone, usize)>, AdminError> {
        let active = self.store.load_active()?.ok_or(AdminError::NoActiveConfig)?;
        Ok(active.zone_costs.placeholder_cells())
    }

    /// Applies one edit in its own session and commits it.
    ///
    /// # Errors
    ///
    /// Returns any error of [`EditSession::apply`] or [`ConfigAdmin::commit`].
    pub fn apply_edit(&self, edit: ConfigEdit, at: Timestamp) -> Result<ConfigVersion, AdminError> {
        let mut session = self.begin()?;
        if let Err(err) = session.apply(edit) {
            self.record_rejection(Some(session.base_version), &err);
            return Err(err);
        }
        self.commit(&mut session, at)
    }

    /// Adds a tier and commits.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::apply_edit`].
    pub fn add_tier(
        &self,
        width_grams: u64,
        label: TierLabel,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        self.apply_edit(
            ConfigEdit::AddTier {
                width_grams,
                label,
            },
            at,
        )
    }

    /// Removes a tier and commits.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::apply_edit`].
    pub fn remove_tier(&self, index: usize, at: Timestamp) -> Result<ConfigVersion, AdminError> {
        self.apply_edit(
            ConfigEdit::RemoveTier {
                index,
            },
            at,
        )
    }

    /// Sets one zone cost cell and commits.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::apply_edit`].
    pub fn update_zone_cost(
        &self,
        zone: Zone,
        tier_index: usize,
        descriptor: RateDescriptor,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        self.apply_edit(
            ConfigEdit::UpdateZoneCost {
                zone,
                tier_index,
                descriptor,
            },
            at,
        )
    }

    /// Replaces the home zone rule and commits.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::apply_edit`].
    pub fn update_home_zone_rule(
        &self,
        rule: HomeZoneRule,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        self.apply_edit(
            ConfigEdit::UpdateHomeZoneRule {
                rule,
            },
            at,
        )
    }

    /// Changes a tier's upper bound and commits.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::apply_edit`].
    pub fn set_tier_upper_bound(
        &self,
        index: usize,
        upper: TierUpperBound,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        self.apply_edit(
            ConfigEdit::SetTierUpperBound {
                index,
                upper,
            },
            at,
        )
    }

    /// Relabels a tier and commits.
    ///
    /// # Errors
    ///
    /// See [`ConfigAdmin::apply_edit`].
    pub fn relabel_tier(
        &self,
        index: usize,
        label: TierLabel,
        at: Timestamp,
    ) -> Result<ConfigVersion, AdminError> {
        self.apply_edit(
            ConfigEdit::RelabelTier {
                index,
                label,
            },
            at,
        )
    }
}
