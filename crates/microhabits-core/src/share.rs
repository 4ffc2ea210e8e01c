//! Group invitations through the platform share sheet, falling back to the
//! clipboard.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::group::Group;

/// Platform share facility.
pub trait ShareSheet {
    fn share(&self, title: &str, text: &str) -> Result<(), String>;
}

/// Platform clipboard.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareOutcome {
    Shared,
    /// Share sheet unavailable or failed; text was copied instead.
    CopiedToClipboard,
    Failed,
}

/// Share the invitation for `group`. `sheet` is `None` on platforms
/// without a share facility.
pub fn share_invite(
    group: &Group,
    sheet: Option<&dyn ShareSheet>,
    clipboard: &dyn Clipboard,
) -> ShareOutcome {
    let text = group.invite_text();
    if let Some(sheet) = sheet {
        match sheet.share(&group.invite_title(), &text) {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => debug!(group_id = %group.id, error = %e, "share sheet failed, using clipboard"),
        }
    }
    match clipboard.copy(&text) {
        Ok(()) => ShareOutcome::CopiedToClipboard,
        Err(e) => {
            warn!(group_id = %group.id, error = %e, "could not copy invite");
            ShareOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupDraft;
    use crate::habit::HabitCategory;
    use std::cell::RefCell;

    struct Sheet(Result<(), String>);

    impl ShareSheet for Sheet {
        fn share(&self, _title: &str, _text: &str) -> Result<(), String> {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct Board {
        copied: RefCell<Option<String>>,
        fail: bool,
    }

    impl Clipboard for Board {
        fn copy(&self, text: &str) -> Result<(), String> {
            if self.fail {
                return Err("denied".into());
            }
            *self.copied.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    fn group() -> Group {
        Group::create(&GroupDraft {
            name: "Vida Saludable".into(),
            description: "".into(),
            category: HabitCategory::Health,
        })
        .unwrap()
    }

    #[test]
    fn shares_when_sheet_works() {
        let board = Board::default();
        let outcome = share_invite(&group(), Some(&Sheet(Ok(()))), &board);
        assert_eq!(outcome, ShareOutcome::Shared);
        assert!(board.copied.borrow().is_none());
    }

    #[test]
    fn falls_back_to_clipboard() {
        let g = group();
        let board = Board::default();
        let outcome = share_invite(&g, Some(&Sheet(Err("cancelled".into()))), &board);
        assert_eq!(outcome, ShareOutcome::CopiedToClipboard);
        assert_eq!(board.copied.borrow().as_deref(), Some(g.invite_text().as_str()));

        assert_eq!(share_invite(&g, None, &board), ShareOutcome::CopiedToClipboard);
    }

    #[test]
    fn reports_failure_when_both_fail() {
        let board = Board {
            fail: true,
            ..Board::default()
        };
        assert_eq!(share_invite(&group(), None, &board), ShareOutcome::Failed);
    }
}
