fn main() -> Result<(), Box<dyn std::error::Error>> {
    hoper::cli::main()
}
