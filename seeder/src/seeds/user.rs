use std::collections::HashSet;

use tracing::{debug, info};

use crate::batch::{BatchWriter, FlushPolicy};
use crate::error::SeedError;
use crate::factories::{make_user, with_numeral};
use crate::generator::ContentGenerator;
use crate::seeds::deficit;
use crate::store::{Store, Table, email_key};

const FLUSH_EVERY: u64 = 250;

/// Returns `email`, or the first `email` with a numeral from 2 upward inserted
/// before the `@` that is not yet in `taken`. The result is recorded in `taken`.
pub fn unique_email(email: &str, taken: &mut HashSet<String>) -> String {
    if taken.insert(email_key(email)) {
        return email.to_string();
    }

    let mut n = 2;
    loop {
        let candidate = with_numeral(email, n);
        if taken.insert(email_key(&candidate)) {
            return candidate;
        }
        n += 1;
    }
}

pub async fn seed_users<S, G>(store: &S, generator: &mut G, target: u64) -> Result<u64, SeedError>
where
    S: Store + ?Sized,
    G: ContentGenerator,
{
    let needed = deficit(target, store.count(Table::Users).await?);
    if needed == 0 {
        debug!(target, "users already at target");
        return Ok(0);
    }

    let mut taken = store.existing_keys(Table::Users).await?;
    let mut writer = BatchWriter::new(store, FlushPolicy::EveryRows(FLUSH_EVERY));

    for _ in 0..needed {
        let mut user = make_user(generator);
        user.email = unique_email(&user.email, &mut taken);
        writer.push(user).await?;
    }

    let created = writer.finish().await?;
    info!(created, "users seeded");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::FakeGenerator;
    use db::models::user_account;
    use db::test_utils::setup_test_db;
    use sea_orm::EntityTrait;

    #[test]
    fn collisions_get_an_incrementing_numeral() {
        let mut taken = HashSet::new();
        assert_eq!(unique_email("ada.lovelace@mail.com", &mut taken), "ada.lovelace@mail.com");
        assert_eq!(unique_email("Ada.Lovelace@mail.com", &mut taken), "Ada.Lovelace2@mail.com");
        assert_eq!(unique_email("ada.lovelace@mail.com", &mut taken), "ada.lovelace3@mail.com");
        assert_eq!(taken.len(), 3);
    }

    #[test]
    fn skips_numerals_already_taken() {
        let mut taken: HashSet<String> = ["a@x.io", "a2@x.io"].iter().map(|s| s.to_string()).collect();
        assert_eq!(unique_email("A@X.io", &mut taken), "A3@X.io");
    }

    #[tokio::test]
    async fn avoids_emails_already_in_the_store() {
        let db = setup_test_db().await;
        let mut g = FakeGenerator::seeded(31);

        // Replay the generator to learn the first email it will produce.
        let first = make_user(&mut FakeGenerator::seeded(31));
        user_account::Model::create(&db, "Existing", &first.email.to_uppercase())
            .await
            .unwrap();

        let created = seed_users(&db, &mut g, 300).await.unwrap();
        assert_eq!(created, 299);

        let emails: Vec<String> = user_account::Entity::find()
            .all(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email.to_lowercase())
            .collect();
        let distinct: HashSet<&String> = emails.iter().collect();
        assert_eq!(emails.len(), 300);
        assert_eq!(distinct.len(), 300);
    }
}
