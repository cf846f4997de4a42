//! 对局配置
//!
//! 提供配置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};

use othello_ai::{AiError, AiProfile, Decider, Roster};
use othello_core::{Board, Color, Layout, OthelloError, BOARD_SIZE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::human::HumanPlayer;

/// 可用的日志级别
const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Ai(#[from] AiError),

    #[error(transparent)]
    Board(#[from] OthelloError),
}

/// 配置的加载情况
#[derive(Debug)]
pub enum ConfigSource {
    /// 无法获取配置目录
    NoConfigDir,
    /// 配置文件不存在
    Missing(PathBuf),
    /// 已从文件加载
    File(PathBuf),
    /// 配置文件无效
    Invalid(PathBuf, ConfigError),
}

impl ConfigSource {
    /// 是否使用了默认配置
    pub fn is_default(&self) -> bool {
        !matches!(self, ConfigSource::File(_))
    }

    /// 输出加载情况
    pub fn report(&self) {
        match self {
            ConfigSource::NoConfigDir => tracing::warn!("无法获取配置目录，使用默认配置"),
            ConfigSource::Missing(path) => {
                tracing::info!("配置文件不存在: {:?}，使用默认配置", path)
            }
            ConfigSource::File(path) => tracing::info!("已加载配置: {:?}", path),
            ConfigSource::Invalid(path, e) => {
                tracing::warn!("配置文件无效: {:?} {}，使用默认配置", path, e)
            }
        }
    }
}

/// 玩家配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PlayerConfig {
    /// 预设角色
    Avatar { avatar: String },
    /// 终端输入的人类玩家
    Human { name: String },
    /// 自定义 AI
    Ai(AiProfile),
}

impl PlayerConfig {
    pub fn avatar(name: impl Into<String>) -> Self {
        PlayerConfig::Avatar {
            avatar: name.into(),
        }
    }

    /// 构建选点器
    pub fn build(&self) -> Result<Box<dyn Decider>, ConfigError> {
        let decider: Box<dyn Decider> = match self {
            PlayerConfig::Avatar { avatar } => Roster::avatar(avatar)?.build()?,
            PlayerConfig::Human { name } => Box::new(HumanPlayer::stdio(name.clone())),
            PlayerConfig::Ai(profile) => profile.build()?,
        };
        Ok(decider)
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 对局轮数
    pub rounds: u32,
    /// 每轮交换先手玩家
    pub swap_order: bool,
    /// 棋盘边长（设置了 setup 时以布局为准）
    pub board_size: usize,
    /// 自定义开局布局
    pub setup: Option<String>,
    /// 先手颜色
    pub first_mover: Color,
    /// 两名玩家，第一名执先手颜色
    pub players: [PlayerConfig; 2],
    /// 日志级别
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            swap_order: false,
            board_size: BOARD_SIZE,
            setup: None,
            first_mover: Color::Black,
            players: [
                PlayerConfig::avatar("shallow"),
                PlayerConfig::avatar("hybrid-curves"),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("othello");
            path.push("config.json");
            path
        })
    }

    /// 读取并校验配置文件
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 加载配置，失败时使用默认配置
    ///
    /// 不直接写日志，调用方在日志系统就绪后通过 [`ConfigSource::report`] 输出加载情况。
    pub fn load(path: Option<&Path>) -> (Self, ConfigSource) {
        let Some(path) = path else {
            return (Self::default(), ConfigSource::NoConfigDir);
        };

        if !path.exists() {
            return (Self::default(), ConfigSource::Missing(path.to_path_buf()));
        }

        match Self::load_from(path) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(e) => (Self::default(), ConfigSource::Invalid(path.to_path_buf(), e)),
        }
    }

    /// 保存配置到文件
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        tracing::info!("配置已保存: {:?}", path);
        Ok(())
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Invalid("rounds must be at least 1".to_string()));
        }
        if !self.first_mover.is_piece() {
            return Err(ConfigError::Invalid("first mover must be B or W".to_string()));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        Board::check_size(self.board_size)?;
        for player in &self.players {
            match player {
                PlayerConfig::Avatar { avatar } => {
                    Roster::avatar(avatar)?;
                }
                PlayerConfig::Ai(profile) => profile.validate()?,
                PlayerConfig::Human { .. } => {}
            }
        }
        Ok(())
    }

    /// 开局棋盘
    pub fn start_board(&self) -> Result<Board, ConfigError> {
        let board = match &self.setup {
            Some(layout) => Layout::parse(layout)?,
            None => Board::with_size(self.board_size)?,
        };
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_ai::{Heuristic, PolicyConfig, SearchConfig};

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.start_board().unwrap(), Board::initial());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("othello").join("config.json");

        let config = AppConfig {
            rounds: 4,
            swap_order: true,
            players: [
                PlayerConfig::Ai(AiProfile::new(
                    "Custom",
                    PolicyConfig::Search(SearchConfig::with_depth(2)),
                    vec![Heuristic::piece_table(100), Heuristic::parity(20)],
                )),
                PlayerConfig::avatar("random"),
            ],
            ..AppConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AppConfig::load_from(&path).unwrap(), config);

        let (loaded, source) = AppConfig::load(Some(&path));
        assert_eq!(loaded, config);
        assert!(matches!(source, ConfigSource::File(ref p) if p == &path));
        assert!(!source.is_default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{
                "rounds": 2,
                "first_mover": "White",
                "players": [
                    { "kind": "avatar", "avatar": "pieces" },
                    { "kind": "ai", "name": "Quick", "policy": { "type": "greedy" },
                      "heuristics": [{ "kind": "max-pieces", "weight": 1 }] }
                ]
            }"#,
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.rounds, 2);
        assert_eq!(config.first_mover, Color::White);
        assert_eq!(config.board_size, BOARD_SIZE);
        assert_eq!(config.log_level, "info");
        assert!(matches!(&config.players[1], PlayerConfig::Ai(profile) if profile.name == "Quick"));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let (config, source) = AppConfig::load(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Missing(_)));

        let (config, source) = AppConfig::load(None);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::NoConfigDir));
        assert!(source.is_default());
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Json(_))));
        let (config, source) = AppConfig::load(Some(&path));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Invalid(_, ConfigError::Json(_))));

        std::fs::write(&path, r#"{ "rounds": 0 }"#).unwrap();
        assert!(matches!(AppConfig::load_from(&path), Err(ConfigError::Invalid(_))));
        let (_, source) = AppConfig::load(Some(&path));
        assert!(matches!(source, ConfigSource::Invalid(_, ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_size = AppConfig {
            board_size: 7,
            ..AppConfig::default()
        };
        assert!(matches!(bad_size.validate(), Err(ConfigError::Board(_))));

        let bad_level = AppConfig {
            log_level: "verbose".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(bad_level.validate(), Err(ConfigError::Invalid(_))));

        let bad_avatar = AppConfig {
            players: [PlayerConfig::avatar("nobody"), PlayerConfig::avatar("pieces")],
            ..AppConfig::default()
        };
        assert!(matches!(bad_avatar.validate(), Err(ConfigError::Ai(_))));

        let empty_mover = AppConfig {
            first_mover: Color::Empty,
            ..AppConfig::default()
        };
        assert!(matches!(empty_mover.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_setup_layout_overrides_size() {
        let config = AppConfig {
            setup: Some("----/-WB-/-BW-/----".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.start_board().unwrap(), Board::with_size(4).unwrap());
    }

    #[test]
    fn test_two_human_players_build() {
        let players = [
            PlayerConfig::Human { name: "one".to_string() },
            PlayerConfig::Human { name: "two".to_string() },
        ];
        let built: Vec<_> = players.iter().map(|p| p.build().unwrap()).collect();
        assert_eq!(built[0].name(), "one");
        assert_eq!(built[1].name(), "two");
    }

    #[test]
    fn test_build_players() {
        for player in AppConfig::default().players {
            let mut decider = player.build().unwrap();
            assert!(decider.decide(&Board::initial(), Color::Black).is_some());
        }
    }
}
