//! Single-step undo and redo
//!
//! Only the most recent append can be reversed, and only once. This is a
//! one-slot register, not a history stack.

use tracing::debug;

use crate::types::{LedgerError, LedgerResult, Record};

use super::LabLedger;

/// Undo bookkeeping: was the last action an append, and what was undone
#[derive(Debug, Default, Clone)]
pub struct UndoRegister {
    last_was_append: bool,
    redo_slot: Option<Record>,
}

impl UndoRegister {
    /// Note a new append; any pending redo is discarded
    pub(crate) fn record_append(&mut self) {
        self.last_was_append = true;
        if self.redo_slot.take().is_some() {
            debug!("redo slot cleared by new append");
        }
    }

    pub fn can_undo(&self) -> bool {
        self.last_was_append
    }

    pub fn can_redo(&self) -> bool {
        self.redo_slot.is_some()
    }
}

/// Remove the most recent append and keep it for redo
pub fn undo(ledger: &mut LabLedger) -> LedgerResult<Record> {
    if !ledger.undo.last_was_append {
        return Err(LedgerError::EmptyUndo);
    }

    let record = ledger.store.remove_last()?;
    ledger.undo.last_was_append = false;
    ledger.undo.redo_slot = Some(record.clone());

    debug!(identity = %record.identity, "append undone");
    Ok(record)
}

/// Put back the record removed by the last undo
pub fn redo(ledger: &mut LabLedger) -> LedgerResult<Record> {
    let record = ledger.undo.redo_slot.take().ok_or(LedgerError::EmptyRedo)?;

    ledger.store.reappend(record.clone());
    ledger.undo.last_was_append = true;

    debug!(identity = %record.identity, "append redone");
    Ok(record)
}
