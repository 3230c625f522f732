use dotenv::dotenv;
use std::env;

use chainview_display_core::{DisplayRequest, DisplayResolver, NetworkRegistry};

fn main() {
    dotenv().ok();
    chainview_display_core::init();

    let default_chain = env::var("CHAINVIEW_DEFAULT_CHAIN").unwrap_or_else(|_| "eip155:1".to_string());
    let sample_address = env::var("CHAINVIEW_SAMPLE_ADDRESS")
        .unwrap_or_else(|_| "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6".to_string());

    let registry = NetworkRegistry::builtin();

    println!("ChainView Display Core Network Configuration:\n");
    println!("  Default Chain: {}", default_chain);
    println!("  Registered Networks: {}\n", registry.len());

    let mut records: Vec<_> = registry.iter().cloned().collect();
    records.sort_by(|a, b| a.chain_id.as_str().cmp(b.chain_id.as_str()));
    for record in &records {
        println!(
            "  {} ({}) - {} - explorer: {}",
            record.name,
            record.chain_id,
            record.native_currency,
            record.primary_explorer().unwrap_or("(none)")
        );
    }

    let resolver = DisplayResolver::new(registry);
    let display = resolver.display(&DisplayRequest {
        address: &sample_address,
        chain_id: &default_chain,
        account: None,
    });

    println!("\nSample display for {} on {}:", sample_address, default_chain);
    println!("  Account: {}", display.account_name);
    println!("  Network: {}", display.network_name);
    println!(
        "  Address: {} {} {}",
        display.segments.prefix, display.segments.middle, display.segments.suffix
    );
    println!("  Explorer Label: {}", display.explorer.label);
    println!(
        "  Explorer URL: {}",
        display.explorer.url.as_deref().unwrap_or("(disabled)")
    );
}
