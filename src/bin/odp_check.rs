//! Binary to exercise the ODP API with a real key: runs a status-code
//! search and, optionally, fetches one application's file wrapper.
//!
//! # Usage
//!
//! ```sh
//! export USPTO_API_KEY="your-api-key"
//! export USPTO_SERIAL="16123456"   # optional
//! cargo run --bin odp_check --features cli
//! ```

use std::env;

use uspto_odp::client::UsptoClient;
use uspto_odp::types::search::SearchParams;

#[tokio::main]
async fn main() -> uspto_odp::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let api_key = env::var("USPTO_API_KEY").expect("set USPTO_API_KEY env var before running");
    let client = UsptoClient::new(api_key);

    println!("Searching status codes for 'Preexam'…");
    let codes = client
        .search_status_codes_get(&SearchParams {
            q: Some("applicationStatusDescriptionText:Preexam".into()),
            limit: Some(10),
            ..Default::default()
        })
        .await?;
    println!("{} status codes matched:", codes.count);
    for code in &codes.status_code_data_bag {
        println!(
            "  {:>4}  {}",
            code.application_status_code.unwrap_or_default(),
            code.application_status_description_text.as_deref().unwrap_or("-")
        );
    }

    if let Ok(serial) = env::var("USPTO_SERIAL") {
        println!("\nFetching file wrapper for {serial}…");
        let wrapper = client.get_patent_wrapper(&serial).await?;
        match wrapper.first().and_then(|w| w.application_meta_data.as_ref()) {
            Some(meta) => println!(
                "  {}: {} (status: {})",
                serial,
                meta.invention_title.as_deref().unwrap_or("<no title>"),
                meta.application_status_description_text.as_deref().unwrap_or("-")
            ),
            None => println!("  no metadata returned"),
        }
    }

    println!("Done.");
    Ok(())
}
