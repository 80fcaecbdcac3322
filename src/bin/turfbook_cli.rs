fn main() {
    turfbook::init();
    if let Err(err) = turfbook::cli::run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
