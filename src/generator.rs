use crate::{
    config::Config,
    deriver::{derive_claim_pairs, ClaimPair},
    error::AirdropError,
    utils::{load_target_addresses, write_claim_pairs},
    validator::report_problematic_pairs,
};

/// Load, sort, derive, validate and write. Stops at the first error.
pub async fn generate_claim_pairs(
    config: &Config,
    salt: &[u8],
) -> Result<Vec<ClaimPair>, AirdropError> {
    let mut addresses =
        load_target_addresses(&config.targets_file_path, config.skip_blank_lines).await?;
    addresses.sort();

    let pairs = derive_claim_pairs(salt, &addresses)?;
    tracing::info!("Generated info for {} addresses", pairs.len());

    let problematic = report_problematic_pairs(&pairs);
    if problematic > 0 {
        tracing::warn!("{problematic} problematic pairs need manual review");
    }

    write_claim_pairs(&config.output_file_path, &pairs).await?;
    tracing::info!("Written to {}", config.output_file_path.display());

    Ok(pairs)
}
