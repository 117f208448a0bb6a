//! Serde default helpers for the config structs.

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_log_dir() -> String {
    ".".to_string()
}

pub(super) fn default_poll_interval() -> u64 {
    600
}

pub(super) fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}
