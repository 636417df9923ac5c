mod cli_model;
mod config;

pub use config::Config;

use crate::log_utils::init_log;

pub fn handle_cli() -> anyhow::Result<Config> {
    let m = cli_model::cli_model().get_matches();
    init_log(&m);
    Config::from_matches(&m)
}

#[cfg(test)]
pub(crate) fn config_from<I, T>(iter: I) -> anyhow::Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let m = cli_model::cli_model().try_get_matches_from(iter)?;
    Config::from_matches(&m)
}
