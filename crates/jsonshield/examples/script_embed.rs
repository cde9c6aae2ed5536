//! Streams a JSON payload straight into an HTML page.
//!
//! A server-rendered page often ships its initial state as JSON inside a
//! `<script>` element. If any string in that state contains `</script>`, the
//! browser ends the element early and whatever follows is parsed as markup.
//! Running the serialized JSON through [`HtmlSafeEncoder`] on its way to the
//! page removes every `<`, `>`, `&` and `'` from string values, so the
//! element can only end where the page says it does.
//!
//! The JSON here arrives in small irregular chunks, as it would from an
//! upstream service, and is written to stdout as it comes in.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonshield --example script_embed
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use std::io::{self, Write};

use jsonshield::{HtmlSafeEncoder, IoSink};

fn main() -> io::Result<()> {
    // A comment body chosen to break out of the script element, cut into
    // chunks that split both the closing tag and an escape sequence.
    let simulated_stream: [&str; 6] = [
        r#"{"user":"mallory","comment":"nice post</scr"#,
        r#"ipt><script>alert('pwned')</script"#,
        r#">","sig":"\u003"#,
        r#"cb\u003e— M"#,
        r#"","score":42}"#,
        "\n",
    ];

    let stdout = io::stdout();
    let mut page = stdout.lock();
    page.write_all(b"<script type=\"application/json\" id=\"state\">\n")?;

    let mut encoder = HtmlSafeEncoder::new(IoSink(&mut page));
    for chunk in simulated_stream {
        encoder.write_all(chunk.as_bytes())?;
    }
    encoder.finish().map_err(jsonshield::EncodeError::into_sink_error)?;

    page.write_all(b"</script>\n")?;
    Ok(())
}
