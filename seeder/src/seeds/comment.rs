use tracing::{debug, info, warn};

use crate::batch::{BatchWriter, FlushPolicy};
use crate::config::CommentRange;
use crate::error::SeedError;
use crate::factories::make_comment;
use crate::generator::ContentGenerator;
use crate::store::{Store, Table};

const PENDING_LIMIT: usize = 500;

/// Gives every attraction without comments a random number of them.
///
/// Attractions that already have at least one comment are left alone.
pub async fn seed_comments<S, G>(
    store: &S,
    generator: &mut G,
    range: CommentRange,
    current_year: i32,
) -> Result<u64, SeedError>
where
    S: Store + ?Sized,
    G: ContentGenerator,
{
    let commented = store.commented_attraction_ids().await?;
    let bare: Vec<i64> = store
        .ids(Table::Attractions)
        .await?
        .into_iter()
        .filter(|id| !commented.contains(id))
        .collect();
    if bare.is_empty() || range.max() == 0 {
        debug!(bare = bare.len(), max = range.max(), "no comments to add");
        return Ok(0);
    }

    let users = store.ids(Table::Users).await?;
    if users.is_empty() {
        warn!(attractions = bare.len(), "comments need at least one user; skipping");
        return Ok(0);
    }

    let mut writer = BatchWriter::new(store, FlushPolicy::PendingAbove(PENDING_LIMIT));
    for attraction_id in bare {
        let n = generator.next_int_inclusive(range.min().into(), range.max().into());
        for _ in 0..n {
            let Some(&author) = generator.pick(&users) else {
                break;
            };
            writer
                .push(make_comment(generator, attraction_id, author, current_year))
                .await?;
        }
        writer.checkpoint().await?;
    }

    let created = writer.finish().await?;
    info!(created, "comments seeded");
    Ok(created)
}
