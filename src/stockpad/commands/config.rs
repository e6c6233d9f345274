use crate::commands::{notify, CmdMessage, CmdResult, StockPaths};
use crate::config::StockConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &StockPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = StockConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = StockConfig::load(dir)?;
            match config.get(&key) {
                Ok(val) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                Err(e) => notify(e),
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = StockConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return notify(e);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> StockPaths {
        StockPaths {
            data_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show() {
        let dir = TempDir::new().unwrap();
        let paths = paths(&dir);

        run(&paths, ConfigAction::Set("recent-limit".into(), "8".into())).unwrap();
        let result = run(&paths, ConfigAction::ShowKey("recent-limit".into())).unwrap();
        assert_eq!(result.messages[0].content, "8");

        let all = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(all.config.unwrap().recent_limit, 8);
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.has_errors());
    }
}
