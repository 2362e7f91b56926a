use clap::Args;
use serde_json::Value;

use loanscope_core::catalog;

/// Arguments for listing the demo offer catalog
#[derive(Args)]
pub struct OffersArgs {
    /// Only list offers flagged as featured
    #[arg(long)]
    pub featured: bool,
}

pub fn run_offers(args: OffersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut offers = catalog::sample_offers();
    if args.featured {
        offers.retain(|o| o.featured.unwrap_or(false));
    }
    Ok(serde_json::to_value(offers)?)
}
