//! Biased-leader scenarios: a faulty coalition inverts its reported
//! delivery times and the majority vote must hold the fair order anyway.

#[cfg(test)]
use fairdag_ordering::{
    rank_by_average_delivery, FairOrderingApi, FairOrderingService, OrderingConfig, Protocol,
    Transaction,
};
#[cfg(test)]
use fairdag_sim::{
    correct_pair_ratio, correlation, generate_transactions, inject_leader_bias,
    pairwise_distances, Reference, WorkloadParams,
};

#[cfg(test)]
fn quiet_params(transactions: usize, replicas: usize) -> WorkloadParams {
    WorkloadParams {
        transactions,
        send_spacing: 10.0,
        mean_delay: 0.1,
        replicas,
        seed: 7,
    }
}

/// Quiet ranked workload with the first `faulty` replicas' observations
/// inverted.
#[cfg(test)]
fn biased_workload(params: &WorkloadParams, faulty: usize) -> Vec<Transaction> {
    let mut batch = generate_transactions(params);
    rank_by_average_delivery(&mut batch);
    inject_leader_bias(&mut batch, faulty, params).unwrap();
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_majority_overrules_one_biased_replica() {
        let params = quiet_params(60, 4);

        for protocol in [Protocol::Baseline, Protocol::FairDag] {
            let mut batch = biased_workload(&params, 1);
            let service = FairOrderingService::with_config(OrderingConfig {
                replicas: 4,
                rounds: 5,
                seed: 42,
                protocol,
            });

            service.order_batch(&mut batch).await.unwrap();

            // Three honest replicas agree on the fair ascending order; one
            // inverted voice cannot flip any pair.
            let rho = correlation(&batch, Reference::DeliveryRank).unwrap();
            assert!((rho - 1.0).abs() < 1e-12, "{protocol:?}: rho = {rho}");
        }
    }

    #[tokio::test]
    async fn test_correct_pair_ratio_under_bias() {
        let params = quiet_params(60, 4);
        let mut batch = biased_workload(&params, 1);
        let service = FairOrderingService::with_config(OrderingConfig {
            replicas: 4,
            rounds: 5,
            seed: 42,
            protocol: Protocol::FairDag,
        });

        service.order_batch(&mut batch).await.unwrap();

        // Every pair's delivery-vote distance is 3 honest votes against 1
        // biased vote, so the committed ascending order is correct for
        // every pair.
        let distances = pairwise_distances(&batch);
        let ratio = correct_pair_ratio(&batch, &distances).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_bias_alone_would_invert_the_order() {
        // Sanity check on the adversary model: ordering by the biased
        // replica's own observations anti-correlates with the fair order.
        let params = quiet_params(30, 4);
        let mut batch = biased_workload(&params, 1);

        // Commit the biased replica's local order directly.
        let mut by_biased: Vec<u64> = batch.iter().map(|tx| tx.id).collect();
        by_biased.sort_by(|&a, &b| {
            let ta = batch.iter().find(|tx| tx.id == a).unwrap().delivery_times[0];
            let tb = batch.iter().find(|tx| tx.id == b).unwrap().delivery_times[0];
            ta.partial_cmp(&tb).unwrap()
        });
        for (pos, id) in by_biased.iter().enumerate() {
            batch.iter_mut().find(|tx| tx.id == *id).unwrap().final_position = Some(pos);
        }

        let rho = correlation(&batch, Reference::DeliveryRank).unwrap();
        assert!(rho < -0.99, "rho = {rho}");
    }

    #[tokio::test]
    async fn test_larger_committee_with_full_coalition() {
        // 7 replicas, f = 2 biased: five honest voices still dominate.
        let params = quiet_params(35, 7);
        let faulty = Protocol::FairDag.fault_bound(7);
        let mut batch = biased_workload(&params, faulty);
        let service = FairOrderingService::with_config(OrderingConfig {
            replicas: 7,
            rounds: 5,
            seed: 42,
            protocol: Protocol::FairDag,
        });

        service.order_batch(&mut batch).await.unwrap();

        let rho = correlation(&batch, Reference::DeliveryRank).unwrap();
        assert!(rho > 0.9, "rho = {rho}");
    }
}
