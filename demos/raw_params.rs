use invoicegen::client::Client;
use serde_json::{Map, json};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::from_env()?;

    // Parameters are sent as-is; nothing is validated locally.
    let mut params = Map::new();
    params.insert("invoiceNumber".into(), json!("INV-RAW-7"));
    params.insert("from_name".into(), json!("ACME Inc."));
    params.insert("to_name".into(), json!("Globex Corp"));
    params.insert(
        "items".into(),
        json!([{ "qty": 2, "description": "Widget", "unit_price": 12.5 }]),
    );

    let resp = client.execute_raw(&params).await?;
    println!("{} -> {}", resp.data.pdf_name, resp.data.download_url);
    Ok(())
}
