//! FairDAG simulation driver
//!
//! Generates one synthetic workload, commits it under both protocol
//! variants (with and without a biased leader coalition), and reports how
//! well each committed order tracks the fair delivery order.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fairdag_ordering::{
    rank_by_average_delivery, FairOrderingApi, FairOrderingService, OrderingConfig, Protocol,
    Transaction,
};
use fairdag_sim::{
    correct_pair_ratio, correlation, generate_transactions, inject_leader_bias,
    pairwise_distances, Reference, WorkloadParams,
};

async fn run_variant(
    label: &str,
    protocol: Protocol,
    batch: &[Transaction],
    params: &WorkloadParams,
) -> Result<()> {
    let config = OrderingConfig {
        replicas: params.replicas,
        rounds: 5,
        seed: 42,
        protocol,
    };
    let service = FairOrderingService::with_config(config);

    let mut committed = batch.to_vec();
    let order = service.order_batch(&mut committed).await?;

    let rho = correlation(&committed, Reference::DeliveryRank)?;
    let distances = pairwise_distances(&committed);
    let ratio = correct_pair_ratio(&committed, &distances)?;

    info!(
        run = label,
        protocol = ?protocol,
        voted_edges = order.voted_edges,
        spearman = format!("{rho:.4}"),
        correct_pairs = format!("{ratio:.4}"),
        "Run complete"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(Level::INFO.to_string()));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let params = WorkloadParams {
        transactions: 200,
        send_spacing: 1.0,
        mean_delay: 100.0,
        replicas: 4,
        seed: 7,
    };
    info!(
        transactions = params.transactions,
        replicas = params.replicas,
        mean_delay = params.mean_delay,
        "Generating workload"
    );

    let mut honest = generate_transactions(&params);
    rank_by_average_delivery(&mut honest);

    run_variant("honest", Protocol::Baseline, &honest, &params).await?;
    run_variant("honest", Protocol::FairDag, &honest, &params).await?;

    let mut biased = honest.clone();
    let faulty = Protocol::FairDag.fault_bound(params.replicas);
    inject_leader_bias(&mut biased, faulty, &params)?;
    info!(faulty, "Injected biased leader coalition");

    run_variant("biased", Protocol::Baseline, &biased, &params).await?;
    run_variant("biased", Protocol::FairDag, &biased, &params).await?;

    Ok(())
}
