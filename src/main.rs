fn main() {
    larapress::app::cli::run();
}
