//! User Seeding
//!
//! Fixed in-memory list of user records for one-time bulk loading into the
//! `users` tree, plus the import loop used by the `import_users` binary.
//! Each record is written with a `set` at `users/{id}`; every insert and
//! every failure is logged, and the loop keeps going on failure. There is
//! no retry and no rollback.

use crate::records::UserRecord;
use crate::store::client::RealtimeDb;
use crate::store::paths;

fn user(id: u64, first: &str, last: &str, email: &str, is_dark: bool) -> UserRecord {
    UserRecord {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        profile_picture: None,
        is_dark,
    }
}

/// The seed list written by the import binary
pub fn sample_users() -> Vec<UserRecord> {
    vec![
        user(1, "Amelia", "Chen", "amelia.chen@example.com", false),
        user(2, "Ravi", "Patel", "ravi.patel@example.com", true),
        user(3, "Mei", "Tan", "mei.tan@example.com", false),
        user(4, "Jonas", "Virtanen", "jonas.virtanen@example.com", true),
        user(5, "Sofia", "Alvarez", "sofia.alvarez@example.com", false),
        user(6, "Kwame", "Mensah", "kwame.mensah@example.com", false),
    ]
}

/// Outcome of one import run
#[derive(Debug, Default, Clone, Copy)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

impl ImportSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Write each user to `users/{id}`, logging per-record outcomes
pub async fn import_users(db: &RealtimeDb, users: &[UserRecord]) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for user in users {
        match db.set(&paths::user(user.id), user).await {
            Ok(()) => {
                tracing::info!(
                    "User {} {} imported successfully",
                    user.first_name,
                    user.last_name
                );
                summary.imported += 1;
            }
            Err(e) => {
                tracing::error!("Error importing user {}: {}", user.id, e);
                summary.failed += 1;
            }
        }
    }

    summary
}
