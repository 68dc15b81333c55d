//! Blocking message dialogs.
//!
//! Failures and destructive actions go through these; successes go through
//! the toast surface instead.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

/// Ask the user to confirm a destructive action. Resolves to `true` only on
/// an explicit "Yes".
pub async fn confirm(description: &str) -> bool {
    let result = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Medstock")
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;

    matches!(result, MessageDialogResult::Yes)
}

/// Failure alert the user has to acknowledge.
pub async fn alert(description: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Medstock")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}
