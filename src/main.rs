fn main() {
    gto_advisor::cli::run();
}
