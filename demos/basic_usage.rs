//! Basic usage example for varnum
//!
//! Run with: cargo run --example basic_usage

use varnum::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<()> {
    println!("varnum Basic Usage Example");
    println!("==========================");

    // Example 1: Narrowest mode per value
    println!("\n1. Mode Selection:");
    {
        let values = [
            Number::Int(0),
            Number::Int(-1),
            Number::Int(300),
            Number::Int(-70_000),
            Number::Int(3_000_000_000),
            Number::Int(u64::MAX as i128),
            Number::Float(1.5),
            Number::Float(0.1),
        ];

        for value in values {
            let encoded = encode(value)?;
            println!(
                "  {:>22} -> {:?} ({} bytes): {}",
                value.to_string(),
                encoded.mode(),
                encoded.len(),
                hex(encoded.raw_bytes())
            );
        }
    }

    // Example 2: Decoding out of a larger buffer
    println!("\n2. Decoding With Trailing Bytes:");
    {
        let bytes = [6, 0x2C, 0x01, 0xDE, 0xAD, 0xBE, 0xEF];
        let payload_len = get_length(bytes[0])?;
        let decoded = decode(&bytes)?;
        println!(
            "  Signature {} announces {} payload bytes",
            bytes[0], payload_len
        );
        println!(
            "  Decoded {} from {}, {} trailing bytes untouched",
            decoded.value(),
            hex(decoded.raw_bytes()),
            bytes.len() - decoded.len()
        );
    }

    // Example 3: Sequences with the buffer API
    println!("\n3. Encoding a Sequence:");
    {
        let mut buf = [0u8; 64];
        let mut encoder = NumberEncoder::new(&mut buf);
        encoder.put(7u8)?;
        encoder.put(-129i32)?;
        encoder.put(2.5f32)?;
        encoder.put(1u64 << 40)?;

        let size = encoder.position();
        println!("  Encoded 4 numbers in {} bytes", size);

        for item in NumberCursor::new(&buf[..size]) {
            let number = item?;
            println!("  {:?} -> {}", number.mode(), number.value());
        }
    }

    // Example 4: Error handling
    println!("\n4. Error Handling:");
    {
        println!("  encode(2^64)   -> {:?}", encode(1i128 << 64).err());
        println!("  encode(NaN)    -> {:?}", encode(f64::NAN).err());
        println!("  decode([])     -> {:?}", decode(&[]).err());
        println!("  decode([5])    -> {:?}", decode(&[5]).err());
        println!("  decode([0x20]) -> {:?}", decode(&[0x20]).err());
        println!("  try_decode([5]) -> {:?}", try_decode(&[5]));
    }

    // Example 5: Version binary layout
    println!("\n5. Version Layout:");
    {
        let version: Version = "1.4.2-3+17".parse()?;
        let bytes = version.to_binary();
        println!("  {} -> {}", version, hex(&bytes));
        println!("  Parsed back: {}", Version::from_binary(&bytes)?);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
