//! Position Assignment
//!
//! Writes a resolved path back onto the batch as final positions. This is
//! the only writer of `final_position`.

use crate::domain::entities::Transaction;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::TxId;

/// Assign `final_position = index in path` to every transaction.
///
/// The batch is re-sorted by ID so the dense ID universe doubles as the
/// lookup index. Total and idempotent: committing the same path twice
/// yields identical positions.
pub fn assign_positions(
    transactions: &mut [Transaction],
    path: &[TxId],
) -> Result<(), OrderingError> {
    if path.len() != transactions.len() {
        return Err(OrderingError::PathLengthMismatch {
            path: path.len(),
            batch: transactions.len(),
        });
    }

    transactions.sort_by_key(|tx| tx.id);
    for (position, &id) in path.iter().enumerate() {
        let slot = transactions
            .get_mut(id as usize)
            .filter(|tx| tx.id == id)
            .ok_or(OrderingError::UnknownTransaction { id })?;
        slot.final_position = Some(position);
    }
    Ok(())
}
