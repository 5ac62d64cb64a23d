use crate::sources::DataSource;
use std::path::PathBuf;

/// 客户端配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | .dining | 工作目录 (存储文件所在) |
/// | STORE_FILE | dining.redb | 存储文件名 |
/// | MENU_SOURCE | data/menu-data.json | 菜单数据 (路径或 URL) |
/// | LOCATIONS_SOURCE | data/dining-locations.json | 餐厅位置数据 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
/// | ENVIRONMENT | development | 运行环境 |
/// | IN_MEMORY_STORE | false | 使用内存存储 (不落盘) |
///
/// # 示例
///
/// ```ignore
/// MENU_SOURCE=https://dining.example.edu/menu-data.json cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// 存储文件名 (相对 work_dir)
    pub store_file: String,
    pub menu_source: String,
    pub locations_source: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 不打开数据库文件，会话结束即丢弃
    pub in_memory_store: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| ".dining".into()),
            store_file: std::env::var("STORE_FILE").unwrap_or_else(|_| "dining.redb".into()),
            menu_source: std::env::var("MENU_SOURCE")
                .unwrap_or_else(|_| "data/menu-data.json".into()),
            locations_source: std::env::var("LOCATIONS_SOURCE")
                .unwrap_or_else(|_| "data/dining-locations.json".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            in_memory_store: std::env::var("IN_MEMORY_STORE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(
        work_dir: impl Into<String>,
        menu_source: impl Into<String>,
        locations_source: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.menu_source = menu_source.into();
        config.locations_source = locations_source.into();
        config
    }

    /// Full path of the store file
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.store_file)
    }

    pub fn menu_source(&self) -> DataSource {
        DataSource::parse(&self.menu_source)
    }

    pub fn locations_source(&self) -> DataSource {
        DataSource::parse(&self.locations_source)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_drive_paths_and_sources() {
        let config = Config::with_overrides(
            "/tmp/dining-test",
            "https://dining.example.edu/menu-data.json",
            "fixtures/locations.json",
        );

        assert_eq!(
            config.store_path(),
            PathBuf::from("/tmp/dining-test").join(&config.store_file)
        );
        assert!(matches!(config.menu_source(), DataSource::Url(_)));
        assert_eq!(
            config.locations_source(),
            DataSource::File(PathBuf::from("fixtures/locations.json"))
        );
    }

    #[test]
    fn test_environment_flags() {
        let mut config = Config::with_overrides(".dining", "m.json", "l.json");
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
