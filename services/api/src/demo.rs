use crate::infra::InMemoryReceiptRepository;
use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{Item, Receipt, ReceiptService, ScoringConfig};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print only the total per receipt, without the rule-by-rule breakdown
    #[arg(long)]
    pub(crate) totals_only: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryReceiptRepository::default());
    let service = ReceiptService::new(repository, ScoringConfig::default());

    println!("Receipt points demo");
    for receipt in sample_receipts() {
        let retailer = receipt.retailer.clone();
        let stored = match service.submit(receipt) {
            Ok(stored) => stored,
            Err(err) => {
                println!("  {retailer}: rejected ({err})");
                continue;
            }
        };

        match service.score(&stored.id) {
            Ok(outcome) => {
                println!("\n{retailer} ({})", stored.id.0);
                if !args.totals_only {
                    for component in &outcome.components {
                        println!(
                            "  {:>4}  {:<22}  {}",
                            component.points,
                            component.rule.label(),
                            component.notes
                        );
                    }
                }
                println!("  total: {} point(s)", outcome.total_points);
            }
            Err(err) => println!("  {retailer}: scoring failed ({err})"),
        }
    }

    Ok(())
}

fn item(short_description: &str, price: f64) -> Item {
    Item {
        short_description: short_description.to_string(),
        price,
    }
}

fn sample_receipts() -> Vec<Receipt> {
    vec![
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", 6.49),
                item("Emils Cheese Pizza", 12.25),
                item("Knorr Creamy Chicken", 1.26),
                item("Doritos Nacho Cheese", 3.35),
                item("   Klarbrunn 12-PK 12 FL OZ  ", 12.00),
            ],
            total: "35.35".to_string(),
        },
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![
                item("Gatorade", 2.25),
                item("Gatorade", 2.25),
                item("Gatorade", 2.25),
                item("Gatorade", 2.25),
            ],
            total: "9.00".to_string(),
        },
    ]
}
