use pi_crypto::{derive_account, AccountKeys, Mnemonic, MuxedAccount};
use std::io::{self, BufRead, Write};

// usage: derive_keys [--new] [--json] [--mux <label>] [mnemonic words...]
fn main() -> anyhow::Result<()> {
    let mut json = false;
    let mut new = false;
    let mut mux_label = None;
    let mut words = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--new" => new = true,
            "--mux" => {
                mux_label = Some(
                    args.next()
                        .ok_or_else(|| anyhow::anyhow!("--mux needs a label"))?,
                )
            }
            _ => words.push(arg),
        }
    }

    let phrase = if new {
        let mnemonic = Mnemonic::generate_24()?;
        println!("mnemonic = {}", mnemonic);
        mnemonic.to_string()
    } else if words.is_empty() {
        read_phrase()?
    } else {
        words.join(" ")
    };

    let keys = derive_account(&phrase, "")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&keys)?);
    } else {
        print_keys(&keys);
    }

    if let Some(label) = mux_label {
        let muxed = MuxedAccount::from_text_id(keys.address()?, &label)?;
        println!("muxed address = {}", muxed);
        println!("muxed id = {}", muxed.id());
    }

    Ok(())
}

fn read_phrase() -> anyhow::Result<String> {
    print!("Enter passphrase: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

fn print_keys(keys: &AccountKeys) {
    println!("path = {}", keys.path);
    println!("public key = {}", keys.public_key);
    println!("secret key = {}", keys.secret_seed);
}
