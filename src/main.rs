use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = seq_rename::cli::parse();
    app::run(args)
}
