// Walk a simulated Mifare Classic 1K tag through format, write, read and
// factory reset.
//
// Run with `RUST_LOG=debug cargo run --example mock_tag` to see the
// driver's block-level logging.

use anyhow::Context;
use libndef::prelude::*;
use libndef::transport::mock::MockTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let uid = Uid::from([0xDE, 0xAD, 0xBE, 0xEF]);
    let mut adapter = AdapterBuilder::new()
        .with_transport(Box::new(MockTransport::classic_1k(uid)))
        .build()?;

    if !adapter.tag_present()? {
        anyhow::bail!("no supported tag in the field");
    }
    println!("Found {} tag", adapter.guess_tag_type()?);

    adapter.format().context("formatting for NDEF")?;

    let mut message = NdefMessage::new();
    message.add_uri_record("https://example.com");
    message.add_text_record("Hello, NDEF!", "en");
    adapter.write(&message).context("writing message")?;

    let tag = adapter.read()?;
    tag.log_summary();
    if let Some(message) = tag.ndef_message() {
        let raw = message.encode()?;
        println!("UID {} holds {} record(s)", tag.uid(), message.record_count());
        println!("raw message: {}", hex::encode(&raw));
        println!("{}", hex_dump(&raw, 16));
    }

    adapter.clean().context("restoring factory layout")?;
    println!("formatted after clean: {}", adapter.read()?.is_formatted());

    adapter.halt_tag()?;
    Ok(())
}
