use anyhow::Result;

fn main() -> Result<()> {
    catalog_timeline::cli::run()
}
