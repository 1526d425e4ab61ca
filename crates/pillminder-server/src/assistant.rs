//! Canned replies for the demo chatbot and the SMS placeholder.

use log::info;

pub const CHATBOT_GREETING: &str = "Hi there! How can I help you today? 😊";
pub const CHATBOT_REMINDER_HELP: &str = "I can help you set reminders for your medicines!";
pub const CHATBOT_FALLBACK: &str =
    "I'm a simple demo bot 🤖. Ask me about medicines or reminders!";

/// Keyword reply: "hello" wins over "reminder", anything else gets the fallback.
pub fn chatbot_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();
    if message.contains("hello") {
        CHATBOT_GREETING
    } else if message.contains("reminder") {
        CHATBOT_REMINDER_HELP
    } else {
        CHATBOT_FALLBACK
    }
}

/// No provider is wired up; the request is only logged.
pub(crate) fn record_sms(phone: Option<&str>, message: Option<&str>) {
    info!(
        "sms placeholder accepted (phone_len={}, message_len={})",
        phone.map_or(0, str::len),
        message.map_or(0, str::len)
    );
}
