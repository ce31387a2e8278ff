//! Pairwise delivery-vote distances and order correctness

use crate::SimError;
use fairdag_ordering::{Transaction, TxId};
use std::collections::HashMap;

/// Net vote of the replicas on "a delivered no later than b": +1 per
/// replica observing `a` at or before `b`, -1 per replica observing the
/// opposite. Positive means the replica set as a whole saw `a` first.
pub fn delivery_vote_distance(a: &Transaction, b: &Transaction) -> i64 {
    a.delivery_times
        .iter()
        .zip(&b.delivery_times)
        .map(|(ta, tb)| if ta <= tb { 1 } else { -1 })
        .sum()
}

/// Distance for every ordered pair of distinct transactions.
pub fn pairwise_distances(transactions: &[Transaction]) -> HashMap<(TxId, TxId), i64> {
    let mut distances = HashMap::new();
    for a in transactions {
        for b in transactions {
            if a.id != b.id {
                distances.insert((a.id, b.id), delivery_vote_distance(a, b));
            }
        }
    }
    distances
}

/// Whether the committed order of a pair agrees with the replica majority.
fn correct_pair(a: &Transaction, b: &Transaction, distances: &HashMap<(TxId, TxId), i64>) -> bool {
    let (Some(pos_a), Some(pos_b)) = (a.final_position, b.final_position) else {
        return false;
    };
    let Some(&distance) = distances.get(&(a.id, b.id)) else {
        return false;
    };
    (pos_a < pos_b && distance > 0) || (pos_a > pos_b && distance < 0)
}

/// Fraction of unordered pairs whose committed order matches the replica
/// majority's delivery view.
pub fn correct_pair_ratio(
    transactions: &[Transaction],
    distances: &HashMap<(TxId, TxId), i64>,
) -> Result<f64, SimError> {
    if transactions.len() < 2 {
        return Err(SimError::InsufficientData {
            count: transactions.len(),
        });
    }
    if transactions.iter().any(|tx| tx.final_position.is_none()) {
        return Err(SimError::UncommittedBatch);
    }

    let mut total = 0u64;
    let mut correct = 0u64;
    for (i, a) in transactions.iter().enumerate() {
        for b in &transactions[i + 1..] {
            total += 1;
            if correct_pair(a, b, distances) {
                correct += 1;
            }
        }
    }
    Ok(correct as f64 / total as f64)
}
