fn main() -> anyhow::Result<()> {
    uni_bijoy::cli::run()
}
