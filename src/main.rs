mod base32;

use std::env;
use std::process;

use crate::base32::base32_decode;

fn main() {
    let args = env::args().collect::<Vec<_>>();

    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("base32tohex");
        eprintln!("usage: {} BASE32STRING", program);
        process::exit(1);
    }

    // Secrets arrive mixed-case and with copy-paste whitespace; the decoder
    // wants uppercase.
    let secret = args[1].trim().to_uppercase();

    match base32_decode(&secret) {
        Ok(raw) => println!("{}", hex::encode(raw)),
        Err(e) => {
            eprintln!("decode error: {}", e);
            process::exit(2);
        }
    }
}
