fn main() {
    if let Err(err) = minimal_notes::entry() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
