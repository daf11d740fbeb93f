use invoicegen::core::*;
use rust_decimal_macros::dec;

fn main() {
    println!("=== Valid request ===\n");

    let request = RequestBuilder::new("INV-2024-001")
        .date("2024-06-15")
        .from(Address::new("ACME Inc.", "1 Main St", "Springfield", "IL", "62701"))
        .to(Address::new("Globex Corp", "42 Elm Ave", "Shelbyville", "IL", "62565"))
        .add_item(LineItem::new(dec!(10), "Consulting", dec!(150)))
        .add_item(LineItem::new(dec!(1), "Travel", dec!(89.50)))
        .build_unchecked();

    match validate(&request) {
        Ok(()) => println!("  OK, subtotal {}", request.subtotal()),
        Err(e) => println!("  {e}"),
    }

    println!("\n=== Invalid request ===\n");

    let mut broken = request.clone();
    broken.from_state = "Illinois".into();
    broken.to_zip = "625".into();
    broken.date = "15.06.2024".into();
    broken.sales_tax = dec!(120);
    broken.items.clear();

    if let Err(e) = validate(&broken) {
        for msg in &e.errors {
            println!("  - {msg}");
        }
    }

    println!("\n=== Format registry ===\n");

    let samples = [
        (Format::Date, "2024-02-30"),
        (Format::Email, "billing@acme.com"),
        (Format::Url, "ftp://example.com"),
        (Format::Ip, "192.168.1.256"),
        (Format::HexColor, "#1e90ff"),
    ];
    for (format, value) in samples {
        println!("  {format:<8} {value:<20} {}", format.matches(value));
    }
}
