//! Rule action table.
//!
//! Pure mapping from content type to an ordered list of deterministic
//! actions. Consulted synchronously at popup creation so the action list is
//! populated before any asynchronous suggestion arrives.

use crate::content::ContentType;

use super::suggestion::ActionSuggestion;

/// Deterministic actions for a content type.
///
/// Total and non-empty for every type. Hotkeys are assigned sequentially
/// starting at "1" in table order.
pub fn rules_for(content_type: ContentType) -> Vec<ActionSuggestion> {
    match content_type {
        ContentType::Url => vec![
            ActionSuggestion::rule("open_browser", "Open Link", "🌐", "1"),
            ActionSuggestion::rule("save_bookmark", "Save Bookmark", "⭐", "2"),
        ],
        ContentType::Email => vec![
            ActionSuggestion::rule("compose_email", "Compose Email", "✉️", "1"),
            ActionSuggestion::rule("save_contact", "Save Contact", "👤", "2"),
        ],
        ContentType::Phone => vec![
            ActionSuggestion::rule("call_phone", "Call Phone", "📞", "1"),
            ActionSuggestion::rule("save_contact", "Save Contact", "👤", "2"),
            ActionSuggestion::rule("send_sms", "Send SMS", "💬", "3"),
        ],
        ContentType::Financial => vec![
            ActionSuggestion::rule("save_expense", "Record Expense", "💰", "1"),
            ActionSuggestion::rule("currency_convert", "Currency Conversion", "🔄", "2"),
        ],
        ContentType::DateTime => vec![
            ActionSuggestion::rule("add_calendar", "Add to Calendar", "📅", "1"),
            ActionSuggestion::rule("set_reminder", "Set Reminder", "⏰", "2"),
        ],
        ContentType::Code => vec![
            ActionSuggestion::rule("open_vscode", "Open in VSCode", "💻", "1"),
            ActionSuggestion::rule("format_code", "Format Code", "✨", "2"),
        ],
        ContentType::Address => vec![
            ActionSuggestion::rule("open_maps", "Open in Maps", "🗺️", "1"),
            ActionSuggestion::rule("save_location", "Save Location", "📍", "2"),
        ],
        // PlainText is the AI extension point: the rule table only
        // guarantees the floor, richer suggestions arrive asynchronously.
        ContentType::PlainText => vec![ActionSuggestion::rule(
            "save_text",
            "Save Text",
            "💾",
            "1",
        )],
    }
}
