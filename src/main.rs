fn main() {
    if let Err(e) = gacha_savior_lib::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
