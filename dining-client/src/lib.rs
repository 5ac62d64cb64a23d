//! Campus Dining Client - 校园餐饮客户端
//!
//! # 架构概述
//!
//! - **购物车** (`cart`): pure cart engine + decimal money helpers
//! - **结账** (`checkout`): dine-in / pickup state machine, ticket codes
//! - **菜单** (`menu`): once-loaded catalog + four-criterion filter
//! - **餐厅位置** (`locations`): directory, campus filter, map model, reviews
//! - **存储** (`storage`): JSON blob store on redb (or in memory)
//! - **会话** (`core`): the `Session` state object, events, config
//! - **视图** (`views`): view models derived from the session
//!
//! # 模块结构
//!
//! ```text
//! dining-client/src/
//! ├── core/          # 配置、会话、事件
//! ├── cart/          # 购物车
//! ├── checkout/      # 结账流程
//! ├── menu/          # 菜单过滤
//! ├── locations/     # 餐厅位置、地图、评论
//! ├── storage/       # 本地存储
//! ├── sources.rs     # 数据源 (文件 / HTTP)
//! ├── views/         # 视图模型
//! ├── cli/           # 终端前端
//! └── utils/         # 错误、日志
//! ```

pub mod cart;
pub mod checkout;
pub mod cli;
pub mod core;
pub mod locations;
pub mod menu;
pub mod sources;
pub mod storage;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use crate::core::{Config, Session, SessionEvent, SessionObserver, open_session};
pub use sources::DataSource;
pub use storage::{BlobStore, MemoryStore, RedbStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置环境: dotenv + 日志
pub fn setup_environment() -> Config {
    // .env is optional
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}

pub fn print_banner() {
    println!(
        r#"
   ___  _       _
  / _ \(_)_ __ (_)_ __   __ _
 / / \ | | '_ \| | '_ \ / _` |
/ /_/ /| | | | | | | | | (_| |
\____/ |_|_| |_|_|_| |_|\__, |
                        |___/
  type `help` for commands
    "#
    );
}
