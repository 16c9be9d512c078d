//! Append GS1 check digits to 7-digit (EAN-8) or 12-digit (EAN-13)
//! payloads, e.g. when registering items whose labels carry only the
//! payload portion.

use clap::Parser;
use ean_scan::ean;

#[derive(Debug, Parser)]
#[command(name = "complete-code")]
#[command(about = "Append the EAN check digit to 7- or 12-digit payloads")]
struct Args {
    /// Payloads to complete
    payloads: Vec<String>,
}

fn main() {
    let args = Args::parse();

    if args.payloads.is_empty() {
        eprintln!("❌ No payloads given");
        std::process::exit(1);
    }

    let mut failed = false;
    for payload in &args.payloads {
        match ean::complete(payload) {
            Ok(code) => println!("{} -> {}", payload, code),
            Err(e) => {
                failed = true;
                eprintln!("❌ {}: {}", payload, e);
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
