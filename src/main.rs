#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

mod align;
mod cli;
mod clusters;
mod egsa;
mod log_utils;
mod output;
mod process;
mod reads;
mod stats;
mod variants;

fn main() -> anyhow::Result<()> {
    let cfg = cli::handle_cli()?;
    process::process_data(&cfg)
}
