//! Short binary name (`mn`) that forwards to the `minimal_notes` library.
//! Keeping the alias as a real binary avoids shell alias requirements.

fn main() {
    if let Err(err) = minimal_notes::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
