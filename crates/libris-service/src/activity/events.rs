//! Call-site shorthands for the activities the library records.
//!
//! Each one fixes the module and derives the action, details, and status
//! from a narrower set of inputs before delegating to
//! [`ActivityRecorder::record`]. Like `record`, they never fail.

use libris_entity::activity::{ActivityModule, ActivityStatus};

use super::recorder::ActivityRecorder;
use crate::context::RequestContext;

impl ActivityRecorder {
    /// Records a login attempt.
    ///
    /// `user_id` is usually `None` for a failed attempt since the account
    /// could not be resolved.
    pub async fn log_login(
        &self,
        user_id: Option<i64>,
        username: &str,
        success: bool,
        ctx: &RequestContext,
    ) -> bool {
        let (action, details) = if success {
            ("login", "User logged in successfully")
        } else {
            ("login_failed", "Failed login attempt")
        };

        self.record(
            user_id,
            Some(username),
            action,
            details,
            ActivityModule::Authentication,
            ActivityStatus::from_outcome(success),
            ctx,
        )
        .await
    }

    /// Records a logout.
    pub async fn log_logout(&self, user_id: i64, username: &str, ctx: &RequestContext) -> bool {
        self.record(
            Some(user_id),
            Some(username),
            "logout",
            "User logged out",
            ActivityModule::Authentication,
            ActivityStatus::Success,
            ctx,
        )
        .await
    }

    /// Records a catalog action on a book (e.g. `"view_book"`).
    pub async fn log_book_activity(
        &self,
        user_id: Option<i64>,
        username: Option<&str>,
        action: &str,
        book_id: i64,
        book_title: &str,
        ctx: &RequestContext,
    ) -> bool {
        self.record(
            user_id,
            username,
            action,
            &book_details(book_id, book_title),
            ActivityModule::Catalog,
            ActivityStatus::Success,
            ctx,
        )
        .await
    }

    /// Records a circulation action (e.g. `"borrow_book"`, `"return_book"`).
    #[allow(clippy::too_many_arguments)]
    pub async fn log_borrowing_activity(
        &self,
        user_id: i64,
        username: &str,
        action: &str,
        book_id: i64,
        book_title: &str,
        success: bool,
        ctx: &RequestContext,
    ) -> bool {
        self.record(
            Some(user_id),
            Some(username),
            action,
            &book_details(book_id, book_title),
            ActivityModule::Circulation,
            ActivityStatus::from_outcome(success),
            ctx,
        )
        .await
    }
}

fn book_details(book_id: i64, book_title: &str) -> String {
    format!("Book #{book_id}: {book_title}")
}
