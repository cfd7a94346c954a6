use sboxstat::{CorrelationOptions, CorrelationTable, DifferenceDistributionTable, SBox};
use tracing_subscriber::EnvFilter;

/// PRESENT 4-bit S-box.
const PRESENT: [u8; 16] = [
    0xC, 0x5, 0x6, 0xB, 0x9, 0x0, 0xA, 0xD, 0x3, 0xE, 0xF, 0x8, 0x4, 0x7, 0x1, 0x2,
];

fn main() -> Result<(), sboxstat::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sbox = SBox::from_bytes(&PRESENT)?;

    println!("Difference distribution table");
    let ddt = DifferenceDistributionTable::build(&sbox);
    for row in ddt.rows() {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>2}")).collect();
        println!("  {}", cells.join(" "));
    }

    println!("\nCorrelation table");
    let table = CorrelationTable::from_sbox(&sbox, CorrelationOptions::default().with_labels())?;
    for row in table.rows() {
        let cells: Vec<String> = row.spectrum().iter().map(|c| format!("{c:>3}")).collect();
        println!("  {} {}", cells.join(" "), row.label().unwrap_or_default());
    }
    Ok(())
}
