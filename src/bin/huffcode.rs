use std::io::{self, BufRead, Write};

use huffcode::Codec;

fn main() -> io::Result<()> {
    println!("Prefix-code text codec.");
    print!("Enter a line of text: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let text = line.trim_end_matches(['\r', '\n']);

    let codec = Codec::new(text);
    let encoded = codec.encode(text);

    println!("\nEncoded: {encoded}");
    println!("Decoded: {}", codec.decode(&encoded));
    Ok(())
}
