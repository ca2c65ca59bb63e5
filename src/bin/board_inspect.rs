use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use trello_sticker_notifier::config;
use trello_sticker_notifier::filter;
use trello_sticker_notifier::trello::TrelloClient;

/// List every card on the configured board with its stickers, to help pick
/// `trello.target_sticker`.
#[derive(Parser, Debug)]
struct Args {
    /// Path to YAML config
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    /// Board to inspect instead of `trello.board_id`
    #[arg(long)]
    board_id: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;
    let client = TrelloClient::from_config(&cfg);
    let board_id = args.board_id.as_deref().unwrap_or(&cfg.trello.board_id);
    let target = &cfg.trello.target_sticker;

    let cards = client.list_cards(board_id).await?;
    println!("Board ID: {}", board_id);
    println!("Target sticker: {}", target);
    println!("Cards:");
    for card in cards {
        println!("  {} {} ({})", card.id, card.name, card.short_url);
        match client.list_stickers(&card.id).await {
            Ok(stickers) => {
                for s in stickers {
                    let mark = if filter::matches(&s, target) { "*" } else { " " };
                    println!(
                        "   {} sticker {{ id: {}, image: {}, url: {} }}",
                        mark,
                        s.id,
                        s.image,
                        s.image_url.as_deref().unwrap_or("-")
                    );
                }
            }
            Err(err) => println!("    stickers unavailable: {}", err),
        }
    }
    Ok(())
}
