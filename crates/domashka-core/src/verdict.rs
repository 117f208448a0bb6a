//! The closed set of review verdicts the status API may report.

/// Known status codes and their human-readable verdict sentences.
///
/// This set is closed: any other code coming from the API is an error,
/// never a silent skip.
pub const HOMEWORK_VERDICTS: &[(&str, &str)] = &[
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Look up the verdict sentence for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    HOMEWORK_VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(
            verdict_for("approved"),
            Some("Работа проверена: ревьюеру всё понравилось. Ура!")
        );
        assert_eq!(
            verdict_for("reviewing"),
            Some("Работа взята на проверку ревьюером.")
        );
        assert_eq!(
            verdict_for("rejected"),
            Some("Работа проверена: у ревьюера есть замечания.")
        );
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(verdict_for("unknown_code"), None);
        assert_eq!(verdict_for(""), None);
        // Lookup is case-sensitive: the API codes are lowercase.
        assert_eq!(verdict_for("Approved"), None);
    }
}
