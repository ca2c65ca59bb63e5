use tracing::{debug, info, instrument, warn};

use crate::comment::latest_comment;
use crate::filter::qualifies;
use crate::model::{MarkerKey, OutputRecord, Records, RunOutcome};
use crate::trello::BoardService;

/// One pass over `board_id`: keep cards carrying `target` and join each with
/// its latest comment.
///
/// A failed card listing ends the run with [`RunOutcome::NoCards`]. Any other
/// failure only drops the card it concerns.
#[instrument(skip_all, fields(board_id = %board_id, sticker = %target))]
pub async fn run(board: &dyn BoardService, board_id: &str, target: &MarkerKey) -> RunOutcome {
    let cards = match board.list_cards(board_id).await {
        Ok(cards) => cards,
        Err(err) => {
            warn!(error = %err, "failed to list cards");
            Vec::new()
        }
    };
    if cards.is_empty() {
        info!("no cards on board");
        return RunOutcome::NoCards;
    }

    let mut records = Records::new();
    for card in &cards {
        let stickers = match board.list_stickers(&card.id).await {
            Ok(stickers) => stickers,
            Err(err) => {
                warn!(card_id = %card.id, error = %err, "failed to list stickers; skipping card");
                continue;
            }
        };
        if !qualifies(&stickers, target) {
            continue;
        }

        let actions = match board.list_actions(&card.id).await {
            Ok(actions) => actions,
            Err(err) => {
                warn!(card_id = %card.id, error = %err, "failed to list actions; skipping card");
                continue;
            }
        };
        let Some(comment) = latest_comment(&actions) else {
            debug!(card_id = %card.id, "card has the sticker but no comment");
            continue;
        };

        records.insert(
            card.id.clone(),
            OutputRecord {
                name: card.name.clone(),
                short_url: card.short_url.clone(),
                latest_comment: comment.to_string(),
            },
        );
    }

    info!(cards = cards.len(), matched = records.len(), "board scanned");
    RunOutcome::Collected(records)
}
