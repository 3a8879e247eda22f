fn main() {
    hutres::cli::run();
}
