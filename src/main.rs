use anyhow::Result;
use clap::Parser;
use tracing::info;

use trello_sticker_notifier::cli::Args;
use trello_sticker_notifier::config;
use trello_sticker_notifier::runner::{self, Job};
use trello_sticker_notifier::slack::SlackWebhook;
use trello_sticker_notifier::trello::TrelloClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(Some(&args.config))?;

    let board = TrelloClient::from_config(&cfg);
    let notifier = SlackWebhook::from_config(&cfg)?;
    let job = Job {
        board: &board,
        notifier: &notifier,
        board_id: &cfg.trello.board_id,
        target: &cfg.trello.target_sticker,
    };

    info!(mode = ?args.mode(), "starting sticker scan");
    runner::execute(args.mode(), job, &mut std::io::stdout()).await
}
