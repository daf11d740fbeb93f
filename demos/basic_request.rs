use invoicegen::client::Client;
use invoicegen::core::*;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Reads APIVERVE_API_KEY; an unset key is reported by execute().
    let client = Client::from_env()?;

    let request = RequestBuilder::new("INV-2024-001")
        .date("2024-06-15")
        .due_date("2024-07-15")
        .from(Address::new("ACME Inc.", "1 Main St", "Springfield", "IL", "62701"))
        .to(Address::new("Globex Corp", "42 Elm Ave", "Shelbyville", "IL", "62565"))
        .payment_terms("Net 30")
        .currency("USD")
        .sales_tax(dec!(6.25))
        .add_item(LineItem::new(dec!(10), "Consulting (hours)", dec!(150)))
        .build()?;

    match client.execute(&request).await {
        Ok(resp) => {
            println!("status:   {}", resp.status);
            println!("pdf:      {}", resp.data.pdf_name);
            println!("expires:  {}", resp.data.expires);
            println!("download: {}", resp.data.download_url);
        }
        Err(InvoiceGenError::Configuration(msg)) => eprintln!("{msg}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
