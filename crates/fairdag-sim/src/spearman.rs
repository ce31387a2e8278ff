//! Spearman rank correlation between a committed order and a reference

use crate::SimError;
use fairdag_ordering::Transaction;

/// Which reference order to compare a committed order against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference {
    /// Fair order by average delivery time (delivery ranks).
    DeliveryRank,
    /// Raw submission order (ascending IDs).
    SendOrder,
}

/// Spearman's rank correlation coefficient between two equally long
/// sequences, assuming distinct values within each sequence.
pub fn spearman_rank_correlation(x: &[u64], y: &[u64]) -> Result<f64, SimError> {
    if x.len() != y.len() {
        return Err(SimError::LengthMismatch {
            left: x.len(),
            right: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(SimError::InsufficientData { count: x.len() });
    }

    let rank_x = ranks(x);
    let rank_y = ranks(y);

    let n = x.len() as f64;
    let d_squared: f64 = rank_x
        .iter()
        .zip(&rank_y)
        .map(|(&rx, &ry)| {
            let d = rx as f64 - ry as f64;
            d * d
        })
        .sum();

    Ok(1.0 - (6.0 * d_squared) / (n * (n * n - 1.0)))
}

/// 1-based rank of each element within its sequence.
fn ranks(values: &[u64]) -> Vec<u64> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by_key(|&i| values[i]);

    let mut out = vec![0u64; values.len()];
    for (rank, &index) in indices.iter().enumerate() {
        out[index] = rank as u64 + 1;
    }
    out
}

/// Correlate a batch's committed order against a reference order.
///
/// Both orders are expressed as ID sequences; the coefficient is 1.0 when
/// the committed order reproduces the reference exactly and -1.0 when it
/// reverses it.
pub fn correlation(transactions: &[Transaction], reference: Reference) -> Result<f64, SimError> {
    let mut by_reference: Vec<&Transaction> = transactions.iter().collect();
    match reference {
        Reference::DeliveryRank => {
            if transactions.iter().any(|tx| tx.delivery_rank.is_none()) {
                return Err(SimError::UnrankedBatch);
            }
            by_reference.sort_by_key(|tx| tx.delivery_rank);
        }
        Reference::SendOrder => by_reference.sort_by_key(|tx| tx.id),
    }
    let reference_ids: Vec<u64> = by_reference.iter().map(|tx| tx.id).collect();

    let mut by_position: Vec<&Transaction> = transactions.iter().collect();
    if transactions.iter().any(|tx| tx.final_position.is_none()) {
        return Err(SimError::UncommittedBatch);
    }
    by_position.sort_by_key(|tx| tx.final_position);
    let committed_ids: Vec<u64> = by_position.iter().map(|tx| tx.id).collect();

    spearman_rank_correlation(&reference_ids, &committed_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_sequences_correlate_fully() {
        let rho = spearman_rank_correlation(&[1, 2, 3, 4], &[1, 2, 3, 4]).unwrap();
        assert!((rho - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_reversed_sequences_anticorrelate() {
        let rho = spearman_rank_correlation(&[1, 2, 3, 4], &[4, 3, 2, 1]).unwrap();
        assert!((rho + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_partial_correlation() {
        // One adjacent swap over 4 elements: rho = 1 - 6*2 / (4*15) = 0.8
        let rho = spearman_rank_correlation(&[1, 2, 3, 4], &[2, 1, 3, 4]).unwrap();
        assert!((rho - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_mismatch_and_degenerate() {
        assert!(matches!(
            spearman_rank_correlation(&[1, 2], &[1]),
            Err(SimError::LengthMismatch { left: 2, right: 1 })
        ));
        assert!(matches!(
            spearman_rank_correlation(&[1], &[1]),
            Err(SimError::InsufficientData { count: 1 })
        ));
    }

    #[test]
    fn test_correlation_over_committed_batch() {
        let mut batch: Vec<Transaction> = (0..4)
            .map(|id| Transaction::new(id, 0.0, vec![id as f64; 2]))
            .collect();
        fairdag_ordering::rank_by_average_delivery(&mut batch);
        // Commit the exact fair order
        for tx in batch.iter_mut() {
            tx.final_position = Some(tx.delivery_rank.unwrap() as usize - 1);
        }

        let rho = correlation(&batch, Reference::DeliveryRank).unwrap();
        assert!((rho - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_correlation_requires_commitment() {
        let batch: Vec<Transaction> = (0..4)
            .map(|id| Transaction::new(id, 0.0, vec![id as f64; 2]))
            .collect();

        assert!(matches!(
            correlation(&batch, Reference::SendOrder),
            Err(SimError::UncommittedBatch)
        ));
    }
}
