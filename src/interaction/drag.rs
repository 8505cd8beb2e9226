use serde::{Deserialize, Serialize};

use crate::core::{ItemId, ItemKind, ResourceId, ScheduleItem};
use crate::error::{BoardError, BoardResult};

/// Whether an item may be picked up and reassigned.
///
/// Pure function of item state. Hosts evaluate it once per render to set
/// the draggable affordance; [`DragSession::begin`] guards on it again so
/// an ineligible item never enters `Dragging`.
#[must_use]
pub fn drag_eligible(item: &ScheduleItem) -> bool {
    if item.locked || item.status.is_terminal() {
        return false;
    }
    match item.kind {
        ItemKind::Booking | ItemKind::PendingBooking | ItemKind::InternalBlock => true,
        ItemKind::Maintenance | ItemKind::TempHold | ItemKind::OpsLock => false,
    }
}

/// Named drag states, visible to hosts for affordance rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging,
    PendingConfirm,
}

/// Cross-resource move awaiting host confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveProposal {
    pub item: ItemId,
    pub source: Option<ResourceId>,
    pub target: ResourceId,
    /// Target is a pooled buffer.
    pub enters_pool: bool,
    /// Source is a pooled buffer.
    pub leaves_pool: bool,
    /// Item has distinct origin and destination labels.
    pub one_way: bool,
}

/// Result of releasing a dragged item over a resource row.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// Same-resource reposition; commits without confirmation.
    Committed { item: ItemId, target: ResourceId },
    /// Cross-resource move; awaits [`DragSession::resolve`].
    NeedsConfirm(MoveProposal),
}

/// Drag/reassign gesture: `Idle -> Dragging -> {Idle | PendingConfirm -> Idle}`.
///
/// The session carries only the gesture payload (item and source
/// identity); it never touches the item collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DragSession {
    state: DragState,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        item: ItemId,
        source: Option<ResourceId>,
        source_pooled: bool,
        one_way: bool,
    },
    PendingConfirm {
        proposal: MoveProposal,
    },
}

impl DragSession {
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        match self.state {
            DragState::Idle => DragPhase::Idle,
            DragState::Dragging { .. } => DragPhase::Dragging,
            DragState::PendingConfirm { .. } => DragPhase::PendingConfirm,
        }
    }

    /// Pooled buffer rows stay visible while a drag is in flight.
    #[must_use]
    pub fn forces_pooled_visible(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Identity of the item currently in flight.
    #[must_use]
    pub fn dragged_item(&self) -> Option<&ItemId> {
        match &self.state {
            DragState::Dragging { item, .. } => Some(item),
            _ => None,
        }
    }

    /// Picks up an item. `source_pooled` states whether the item's
    /// current resource, if any, is a pooled buffer.
    pub fn begin(&mut self, item: &ScheduleItem, source_pooled: bool) -> BoardResult<()> {
        if !matches!(self.state, DragState::Idle) {
            return Err(BoardError::GestureRejected(
                "a drag gesture is already in flight",
            ));
        }
        if !drag_eligible(item) {
            return Err(BoardError::GestureRejected("item is not drag-eligible"));
        }

        self.state = DragState::Dragging {
            item: item.id.clone(),
            source: item.resource.clone(),
            source_pooled,
            one_way: item.is_one_way(),
        };
        Ok(())
    }

    /// Releases the dragged item over `target`.
    ///
    /// Same-resource drops commit immediately; cross-resource drops move
    /// to `PendingConfirm` and surface a proposal for the host.
    pub fn drop_on(&mut self, target: &ResourceId, target_pooled: bool) -> BoardResult<DropOutcome> {
        let DragState::Dragging {
            item,
            source,
            source_pooled,
            one_way,
        } = self.state.clone()
        else {
            return Err(BoardError::GestureRejected("no drag gesture in flight"));
        };

        if source.as_ref() == Some(target) {
            self.state = DragState::Idle;
            return Ok(DropOutcome::Committed {
                item,
                target: target.clone(),
            });
        }

        let proposal = MoveProposal {
            item,
            source,
            target: target.clone(),
            enters_pool: target_pooled,
            leaves_pool: source_pooled,
            one_way,
        };
        self.state = DragState::PendingConfirm {
            proposal: proposal.clone(),
        };
        Ok(DropOutcome::NeedsConfirm(proposal))
    }

    /// Resolves a pending confirmation, returning to idle either way.
    ///
    /// Returns the confirmed proposal, or `None` when declined or when
    /// nothing is pending.
    pub fn resolve(&mut self, confirm: bool) -> Option<MoveProposal> {
        if !matches!(self.state, DragState::PendingConfirm { .. }) {
            return None;
        }
        let DragState::PendingConfirm { proposal } = std::mem::take(&mut self.state) else {
            return None;
        };
        confirm.then_some(proposal)
    }

    /// Abandons the gesture with no intent (release outside any target).
    pub fn abort(&mut self) {
        self.state = DragState::Idle;
    }
}
