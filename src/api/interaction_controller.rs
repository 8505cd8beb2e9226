use tracing::warn;

use crate::core::{CapacityClass, ItemId, Resource, ResourceId};
use crate::error::{BoardError, BoardResult};
use crate::interaction::{BoardIntent, DragPhase, DropOutcome};

use super::BoardEngine;

impl BoardEngine {
    // --- range selection (create) ---

    /// Starts range selection on a resource's row body.
    ///
    /// The caller is responsible for the press preconditions: primary
    /// button, not over an existing bar, pan modifier not held. The
    /// offset is relative to the grid origin and clamped at 0.
    pub fn begin_selection(&mut self, resource: ResourceId, offset_px: f64) {
        self.selection.begin(resource, offset_px);
    }

    pub fn update_selection(&mut self, offset_px: f64) {
        self.selection.update(offset_px);
    }

    /// Live rubber-band `(left, width)`, for rendering.
    #[must_use]
    pub fn selection_span(&self) -> Option<(f64, f64)> {
        self.selection.live_span()
    }

    /// Ends range selection.
    ///
    /// Emits `RangeSelected` when the pointer travelled beyond the
    /// creation threshold; a shorter release emits nothing.
    pub fn finish_selection(&mut self) -> BoardResult<Option<BoardIntent>> {
        let grid = self.config.grid()?;
        let selected = self
            .selection
            .finish(&grid, self.config.gesture_tuning.creation_threshold_px)?;
        Ok(selected.map(|range| BoardIntent::RangeSelected {
            resource: range.resource,
            start: range.start,
            end: range.end,
        }))
    }

    // --- canvas panning ---

    pub fn begin_pan(&mut self, pointer_x: f64, scroll_offset: f64) {
        self.pan.begin(pointer_x, scroll_offset);
    }

    /// New scroll offset for the pointer position; `None` while idle.
    #[must_use]
    pub fn update_pan(&self, pointer_x: f64) -> Option<f64> {
        self.pan.update(pointer_x, self.config.gesture_tuning.pan_gain)
    }

    pub fn end_pan(&mut self) {
        self.pan.end();
    }

    // --- item drag / reassign ---

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    /// Picks up an item by id.
    ///
    /// Fails when the item is unknown or not drag-eligible; eligibility
    /// is the same predicate hosts use for the draggable affordance.
    pub fn begin_drag(&mut self, item: &ItemId) -> BoardResult<()> {
        let Some(found) = self
            .snapshot
            .items
            .iter()
            .find(|candidate| &candidate.id == item)
        else {
            return Err(BoardError::UnknownReference {
                kind: "item",
                id: item.as_str().to_owned(),
            });
        };

        let source_pooled = found
            .resource
            .as_ref()
            .is_some_and(|resource| resource_is_pooled(&self.snapshot.resources, resource));

        if let Err(error) = self.drag.begin(found, source_pooled) {
            warn!(item = found.id.as_str(), %error, "drag refused");
            return Err(error);
        }
        Ok(())
    }

    /// Drops the dragged item onto a resource row.
    ///
    /// Same-resource drops commit immediately (`MoveCommitted`);
    /// cross-resource drops emit `MoveRequested` and await
    /// [`Self::resolve_move`].
    pub fn drop_on_resource(&mut self, target: &ResourceId) -> BoardResult<BoardIntent> {
        if !self
            .snapshot
            .resources
            .iter()
            .any(|resource| &resource.id == target)
        {
            return Err(BoardError::UnknownReference {
                kind: "resource",
                id: target.as_str().to_owned(),
            });
        }

        let target_pooled = resource_is_pooled(&self.snapshot.resources, target);
        match self.drag.drop_on(target, target_pooled)? {
            DropOutcome::Committed { item, target } => Ok(BoardIntent::MoveCommitted {
                item,
                target,
                new_start: None,
                new_end: None,
            }),
            DropOutcome::NeedsConfirm(proposal) => Ok(BoardIntent::MoveRequested(proposal)),
        }
    }

    /// Resolves a pending cross-resource move.
    ///
    /// Returns `MoveCommitted` on confirmation, `None` on decline or when
    /// nothing is pending. The drag machine is idle afterwards either
    /// way.
    pub fn resolve_move(&mut self, confirm: bool) -> Option<BoardIntent> {
        self.drag
            .resolve(confirm)
            .map(|proposal| BoardIntent::MoveCommitted {
                item: proposal.item,
                target: proposal.target,
                new_start: None,
                new_end: None,
            })
    }

    /// Abandons the drag with no intent (release outside any target).
    pub fn abort_drag(&mut self) {
        self.drag.abort();
    }
}

fn resource_is_pooled(resources: &[Resource], id: &ResourceId) -> bool {
    resources
        .iter()
        .any(|resource| &resource.id == id && resource.capacity == CapacityClass::Pooled)
}
