use anyhow::Context;
use dining_client::cli::{self, TerminalView};
use dining_client::{open_session, print_banner, setup_environment};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志)
    let config = setup_environment();

    print_banner();
    tracing::info!(environment = %config.environment, "Campus dining client starting...");

    // 2. 打开会话 (购物车、评论从存储恢复)
    let mut session = open_session(&config)
        .with_context(|| format!("failed to open store {}", config.store_path().display()))?;
    session.subscribe(Box::new(TerminalView::new(std::io::stdout())));

    // 3. 加载数据源; failures are shown inline by the view
    if let Err(e) = session.load_menu(&config.menu_source()).await {
        tracing::warn!(error = %e, "Menu unavailable for this session");
    }
    if let Err(e) = session.load_locations(&config.locations_source()).await {
        tracing::warn!(error = %e, "Dining locations unavailable for this session");
    }

    // 4. 交互式命令循环
    let input = BufReader::new(tokio::io::stdin());
    cli::run_shell(&mut session, input, &mut std::io::stdout()).await?;

    Ok(())
}
