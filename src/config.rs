use crate::life::{Pattern, DEFAULT_SPEED, DEFAULT_SPEED_DELTA};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    #[default]
    Minesweeper,
    Life,
}

impl GameKind {
    pub fn name(&self) -> &str {
        match self {
            GameKind::Minesweeper => "Minesweeper",
            GameKind::Life => "Life",
        }
    }
}

/// Size of a board cell on screen, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub cell_width: u16,
    pub cell_height: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinesweeperConfig {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    /// Fixed seed for reproducible mine layouts
    pub seed: Option<u64>,
    /// Explicit (row, col) mine positions; overrides `mines` and `seed`
    pub layout: Option<Vec<(usize, usize)>>,
    pub view: ViewConfig,
}

impl Default for MinesweeperConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            mines: 10,
            seed: None,
            layout: None,
            view: ViewConfig {
                cell_width: 3,
                cell_height: 1,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Ticks per generation
    pub speed: i32,
    pub speed_delta: i32,
    /// Pattern stamped onto the empty board at startup
    pub start_pattern: Option<Pattern>,
    pub view: ViewConfig,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            speed: DEFAULT_SPEED,
            speed_delta: DEFAULT_SPEED_DELTA,
            start_pattern: None,
            view: ViewConfig {
                cell_width: 2,
                cell_height: 1,
            },
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version field for future compatibility
    pub version: u32,
    pub game: GameKind,
    pub minesweeper: MinesweeperConfig,
    pub life: LifeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            game: GameKind::default(),
            minesweeper: MinesweeperConfig::default(),
            life: LifeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Default config location (`<config dir>/cellgrid/config.json`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cellgrid").join("config.json"))
    }

    /// Export config to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Import config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicitly requested file, or the default location if it exists.
    /// A missing default file is not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject board shapes the games cannot be played on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ms = &self.minesweeper;
        if ms.width == 0 || ms.height == 0 {
            return Err(ConfigError::Invalid("minesweeper board must be at least 1x1"));
        }
        if self.life.width == 0 || self.life.height == 0 {
            return Err(ConfigError::Invalid("life board must be at least 1x1"));
        }
        for view in [ms.view, self.life.view] {
            if view.cell_width == 0 || view.cell_height == 0 {
                return Err(ConfigError::Invalid("cell size must be non-zero"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_reference_boards() {
        let config = AppConfig::default();
        assert_eq!(config.minesweeper.width, 10);
        assert_eq!(config.minesweeper.height, 10);
        assert_eq!(config.minesweeper.mines, 10);
        assert_eq!(config.life.width, 30);
        assert_eq!(config.life.speed, 10);
        assert_eq!(config.life.speed_delta, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_save_and_load() {
        let mut config = AppConfig::default();
        config.game = GameKind::Life;
        config.minesweeper.seed = Some(99);
        config.minesweeper.layout = Some(vec![(0, 0), (3, 4)]);
        config.life.start_pattern = Some(Pattern::Beacon);
        config.life.speed = 4;

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to_file(temp_file.path()).unwrap();
        let loaded = AppConfig::load_from_file(temp_file.path()).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), r#"{"game": "life", "life": {"width": 12}}"#).unwrap();

        let loaded = AppConfig::load(Some(temp_file.path())).unwrap();
        assert_eq!(loaded.game, GameKind::Life);
        assert_eq!(loaded.life.width, 12);
        assert_eq!(loaded.life.height, 30);
        assert_eq!(loaded.minesweeper, MinesweeperConfig::default());
    }

    #[test]
    fn test_invalid_config_file() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "not valid json").unwrap();

        let result = AppConfig::load_from_file(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_explicit_config_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/path/config.json")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_validate_rejects_empty_boards() {
        let mut config = AppConfig::default();
        config.minesweeper.width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = AppConfig::default();
        config.life.view.cell_height = 0;
        assert!(config.validate().is_err());
    }
}
