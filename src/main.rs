//! 程序入口：初始化日志，修复 26 号博文的 content 字段并回写原文件

use std::path::Path;
use std::time::Instant;

use tracing_subscriber::fmt::SubscriberBuilder;

use bowen_xiufu::model::fix_content::POST_26_CONTENT;
use bowen_xiufu::PostStore;

// === 固定配置（消除魔法值） ===
/// 博文数据文件（相对运行目录）
const POSTS_FILE: &str = "allposts.json";
/// 需要修复的博文 id
const TARGET_POST_ID: &str = "26";

fn main() -> anyhow::Result<()> {
    // 初始化日志输出
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let start_time = Instant::now();
    let mut store = PostStore::default();
    store.load_file(Path::new(POSTS_FILE))?;
    tracing::info!(
        "博文文件加载成功: {} 条记录，耗时: {:.2}ms",
        store.post_count(),
        start_time.elapsed().as_millis()
    );

    let fixed_title = store.patch_content(TARGET_POST_ID, POST_26_CONTENT)?;
    store.save_to_original_file()?;

    if let Some(title) = fixed_title {
        println!("✅ 已修复 {} 号博文: {}", TARGET_POST_ID, title);
    }
    println!("\n🎉 博文修复完成!");
    Ok(())
}
