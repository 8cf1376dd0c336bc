fn main() {
    std::process::exit(lwfa_cli::run_from_env());
}
