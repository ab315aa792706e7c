#![allow(dead_code)]

use rand::Rng;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

pub fn generate_cart_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["price", "quantity"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let cents: u32 = rng.gen_range(1..=50_000);
        let quantity: u32 = rng.gen_range(1..=15);
        wtr.write_record([
            format!("{}.{:02}", cents / 100, cents % 100),
            quantity.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_order_json(path: &Path, json: &str) -> Result<(), Error> {
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}
