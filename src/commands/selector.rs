use crate::selector::hasher::selector_of;
use anyhow::Result;
use std::io::Write;

/// Print the 4-byte selector for each signature, one per line, in the form
/// `0x<8hex> -> <signature>`. Handy for spot-checking database entries.
pub fn print_selectors(signatures: &[String]) -> Result<()> {
    write_selectors(&mut std::io::stdout(), signatures)
}

fn write_selectors<W: Write>(writer: &mut W, signatures: &[String]) -> Result<()> {
    for signature in signatures {
        let selector = selector_of(signature);
        writeln!(writer, "0x{} -> {}", hex::encode(selector), signature)?;
    }
    Ok(())
}
