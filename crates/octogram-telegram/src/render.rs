// SPDX-FileCopyrightText: 2026 Octogram Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering engine replies into Telegram markup.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Build an inline keyboard with one button per row.
///
/// Account logins and repository names vary in length; a single column
/// keeps the labels readable.
pub fn choices_keyboard(options: &[(String, String)]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        options
            .iter()
            .map(|(label, data)| vec![InlineKeyboardButton::callback(label.clone(), data.clone())]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn one_button_per_row() {
        let options = vec![
            ("alice (user)".to_string(), "alice:user".to_string()),
            ("acme (org)".to_string(), "acme:org".to_string()),
        ];
        let keyboard = choices_keyboard(&options);

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        for row in &keyboard.inline_keyboard {
            assert_eq!(row.len(), 1);
        }

        let first = &keyboard.inline_keyboard[0][0];
        assert_eq!(first.text, "alice (user)");
        assert_eq!(
            first.kind,
            InlineKeyboardButtonKind::CallbackData("alice:user".to_string())
        );
    }

    #[test]
    fn empty_options_build_an_empty_keyboard() {
        let keyboard = choices_keyboard(&[]);
        assert!(keyboard.inline_keyboard.is_empty());
    }
}
