use serde::Serialize;
use sboxstat::{CorrelationOptions, CorrelationTable, DifferenceDistributionTable, SBox};

const TEST_VECTOR_OUTPUT_FILE: &str = "table_vectors.json";

/// PRESENT 4-bit S-box.
const PRESENT: [u8; 16] = [
    0xC, 0x5, 0x6, 0xB, 0x9, 0x0, 0xA, 0xD, 0x3, 0xE, 0xF, 0x8, 0x4, 0x7, 0x1, 0x2,
];

#[derive(Serialize)]
struct TableVector {
    sbox: SBox,
    ddt: DifferenceDistributionTable,
    correlation: CorrelationTable,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating table vectors...");
    let sboxes = [SBox::new(vec![0, 1, 2, 3])?, SBox::from_bytes(&PRESENT)?];
    let vectors = sboxes
        .into_iter()
        .map(|sbox| {
            Ok(TableVector {
                ddt: DifferenceDistributionTable::build(&sbox),
                correlation: CorrelationTable::from_sbox(
                    &sbox,
                    CorrelationOptions::default().with_labels(),
                )?,
                sbox,
            })
        })
        .collect::<sboxstat::Result<Vec<_>>>()?;

    let json = serde_json::to_string_pretty(&vectors)?;
    println!("{}", json);
    std::fs::write(TEST_VECTOR_OUTPUT_FILE, json)?;
    println!("Table vectors written to {}", TEST_VECTOR_OUTPUT_FILE);
    Ok(())
}
