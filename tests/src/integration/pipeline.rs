//! End-to-end ordering runs over both protocol variants.

#[cfg(test)]
use fairdag_ordering::domain::invariants::invariant_positions_permutation;
#[cfg(test)]
use fairdag_ordering::{
    rank_by_average_delivery, FairOrderingApi, FairOrderingService, OrderingConfig, Protocol,
    Transaction,
};
#[cfg(test)]
use fairdag_sim::{generate_transactions, WorkloadParams};

#[cfg(test)]
fn config(protocol: Protocol, replicas: usize) -> OrderingConfig {
    OrderingConfig {
        replicas,
        rounds: 5,
        seed: 42,
        protocol,
    }
}

/// Workload where all replicas observe nearly identical delivery times, so
/// the fair order is unambiguous.
#[cfg(test)]
fn quiet_workload(transactions: usize, replicas: usize) -> Vec<Transaction> {
    let params = WorkloadParams {
        transactions,
        send_spacing: 10.0,
        mean_delay: 0.1,
        replicas,
        seed: 7,
    };
    let mut batch = generate_transactions(&params);
    rank_by_average_delivery(&mut batch);
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_both_protocols_commit_a_permutation() {
        for protocol in [Protocol::Baseline, Protocol::FairDag] {
            let mut batch = quiet_workload(40, 4);
            let service = FairOrderingService::with_config(config(protocol, 4));

            let order = service.order_batch(&mut batch).await.unwrap();

            assert_eq!(order.path.len(), 40);
            assert!(invariant_positions_permutation(&batch));
        }
    }

    #[tokio::test]
    async fn test_unanimous_workload_commits_the_fair_order() {
        for protocol in [Protocol::Baseline, Protocol::FairDag] {
            let mut batch = quiet_workload(40, 4);
            let service = FairOrderingService::with_config(config(protocol, 4));

            service.order_batch(&mut batch).await.unwrap();

            // Quiet workload: delivery rank, send order, and committed
            // position all agree.
            batch.sort_by_key(|tx| tx.id);
            for tx in &batch {
                assert_eq!(tx.final_position, Some(tx.id as usize), "{protocol:?}");
                assert_eq!(tx.delivery_rank, Some(tx.id + 1), "{protocol:?}");
            }
        }
    }

    #[tokio::test]
    async fn test_remainder_transactions_still_get_positions() {
        // 43 transactions over 5 rounds: slot size 8, three dropped from
        // every replica's partition. They still appear in the committed
        // order via the aggregate vote and canonical tournament placement.
        let mut batch = quiet_workload(43, 4);
        let service = FairOrderingService::with_config(config(Protocol::FairDag, 4));

        let order = service.order_batch(&mut batch).await.unwrap();

        assert_eq!(order.path.len(), 43);
        assert!(invariant_positions_permutation(&batch));
    }

    #[tokio::test]
    async fn test_seven_replica_run() {
        let mut batch = quiet_workload(35, 7);
        let service = FairOrderingService::with_config(config(Protocol::FairDag, 7));

        let order = service.order_batch(&mut batch).await.unwrap();

        assert_eq!(order.path.len(), 35);
        assert!(invariant_positions_permutation(&batch));
    }

    #[tokio::test]
    async fn test_repeat_runs_commit_identical_orders() {
        let service = FairOrderingService::with_config(config(Protocol::FairDag, 4));

        let mut first = quiet_workload(30, 4);
        let mut second = quiet_workload(30, 4);
        let order_a = service.order_batch(&mut first).await.unwrap();
        let order_b = service.order_batch(&mut second).await.unwrap();

        assert_eq!(order_a.path, order_b.path);
    }

    #[tokio::test]
    async fn test_noisy_disagreement_still_resolves_cleanly() {
        // Heavy exponential noise: replicas genuinely disagree, the voted
        // graph may be partial or cyclic, but the run must still commit a
        // full permutation.
        let params = WorkloadParams {
            transactions: 50,
            send_spacing: 1.0,
            mean_delay: 100.0,
            replicas: 4,
            seed: 13,
        };
        let mut batch = generate_transactions(&params);
        rank_by_average_delivery(&mut batch);

        for protocol in [Protocol::Baseline, Protocol::FairDag] {
            let service = FairOrderingService::with_config(config(protocol, 4));
            let mut run = batch.clone();
            let order = service.order_batch(&mut run).await.unwrap();

            assert_eq!(order.path.len(), 50);
            assert!(invariant_positions_permutation(&run));
        }
    }
}
