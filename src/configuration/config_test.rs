use anyhow::Result;

use super::Config;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["docent", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_bad_config() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["docent", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
