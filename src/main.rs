fn main() -> anyhow::Result<()> {
    memento::cli::run()
}
