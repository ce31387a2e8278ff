//! Synthetic workload generation and fault injection
//!
//! Transactions are sent at a fixed cadence; each replica observes a
//! delivery delayed by an independent exponential sample. A biased leader
//! coalition is modeled by overwriting the first `f` replicas' observations
//! with delays that invert the fair order.

use crate::SimError;
use fairdag_ordering::{Transaction, TxId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of one synthetic workload.
#[derive(Clone, Debug)]
pub struct WorkloadParams {
    /// Number of transactions (`t`).
    pub transactions: usize,
    /// Send-time spacing between consecutive transactions (`s`).
    pub send_spacing: f64,
    /// Mean of the exponential delivery delay (`d`).
    pub mean_delay: f64,
    /// Number of replicas (`n`).
    pub replicas: usize,
    /// Workload RNG seed.
    pub seed: u64,
}

impl Default for WorkloadParams {
    fn default() -> Self {
        Self {
            transactions: 100,
            send_spacing: 1.0,
            mean_delay: 10.0,
            replicas: 4,
            seed: 7,
        }
    }
}

/// Exponential sample with the given mean, by inverse transform.
fn exponential(rng: &mut StdRng, mean: f64) -> f64 {
    let u: f64 = rng.gen_range(0.0..1.0);
    -mean * (1.0 - u).ln()
}

/// Generate `t` transactions with per-replica exponential delivery delays.
pub fn generate_transactions(params: &WorkloadParams) -> Vec<Transaction> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    (0..params.transactions)
        .map(|id| {
            let send_time = params.send_spacing * id as f64;
            let delivery_times = (0..params.replicas)
                .map(|_| send_time + exponential(&mut rng, params.mean_delay))
                .collect();
            Transaction::new(id as TxId, send_time, delivery_times)
        })
        .collect()
}

/// Overwrite the first `faulty` replicas' observations so they report late
/// transactions as early and vice versa:
/// `d + s * (t - delivery_rank)`.
///
/// Requires delivery ranks, i.e. call
/// [`fairdag_ordering::rank_by_average_delivery`] first.
pub fn inject_leader_bias(
    batch: &mut [Transaction],
    faulty: usize,
    params: &WorkloadParams,
) -> Result<(), SimError> {
    let t = params.transactions as f64;
    for tx in batch.iter_mut() {
        let rank = tx.delivery_rank.ok_or(SimError::UnrankedBatch)? as f64;
        let biased = params.mean_delay + params.send_spacing * (t - rank);
        for replica in 0..faulty.min(tx.replica_count()) {
            tx.inject_delivery_time(replica, biased);
        }
    }
    Ok(())
}
