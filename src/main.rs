fn main() {
    if let Err(err) = chatmark::cli::main() {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}
