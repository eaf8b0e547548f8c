//! Leptos DragDrop Utilities
//!
//! List reordering for Leptos using native HTML5 drag events.
//! The source position travels in the DataTransfer payload; signals mirror
//! it so row styling can react while a drag is in flight.

use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Position the current drag started from
    pub source_read: ReadSignal<Option<usize>>,
    pub source_write: WriteSignal<Option<usize>>,
    /// Position currently hovered as a drop target
    pub over_read: ReadSignal<Option<usize>>,
    pub over_write: WriteSignal<Option<usize>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (source_read, source_write) = signal(None::<usize>);
    let (over_read, over_write) = signal(None::<usize>);
    DndSignals {
        source_read,
        source_write,
        over_read,
        over_write,
    }
}

/// Clear all drag state
pub fn end_drag(dnd: &DndSignals) {
    dnd.source_write.set(None);
    dnd.over_write.set(None);
}

/// Create dragstart handler: record the source position and write it into
/// the payload so the drop handler can read it back
pub fn make_on_dragstart(dnd: DndSignals, position: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data("text/plain", &position.to_string());
        }
        dnd.source_write.set(Some(position));
    }
}

/// Create dragover handler: suppress the platform's default drop rejection
/// and mark the prospective target
pub fn make_on_dragover(dnd: DndSignals, position: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.over_write.set(Some(position));
    }
}

/// Create dragleave handler: unmark the target if it is still this row
pub fn make_on_dragleave(dnd: DndSignals, position: usize) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.over_read.get_untracked() == Some(position) {
            dnd.over_write.set(None);
        }
    }
}

/// Create dragend handler: clears state when the gesture is cancelled
/// (drop handlers clear it themselves on a completed drag)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// Create drop handler: resolve the source position (payload first, signal
/// as fallback) and hand (source, target) to the callback. A drop with no
/// resolvable source is ignored.
pub fn make_on_drop<F>(dnd: DndSignals, position: usize, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(usize, usize) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = ev
            .data_transfer()
            .and_then(|transfer| transfer.get_data("text/plain").ok());
        let source = payload
            .and_then(|s| s.parse::<usize>().ok())
            .or_else(|| dnd.source_read.get_untracked());
        end_drag(&dnd);
        if let Some(from) = source {
            on_drop(from, position);
        }
    }
}
