//! Fallback advisory texts for responses that carry no message.

use promodesk::locale::Language;

/// Successful mutation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Notice {
    Created,
    Updated,
    Deleted,
}

impl Notice {
    pub(super) const fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Created, Language::English) => "Promotion added successfully",
            (Self::Created, Language::French) => "Promotion ajoutée avec succès",
            (Self::Updated, Language::English) => "Promotion updated successfully",
            (Self::Updated, Language::French) => "Promotion mise à jour avec succès",
            (Self::Deleted, Language::English) => "Promotion deleted successfully",
            (Self::Deleted, Language::French) => "Promotion supprimée avec succès",
        }
    }

    /// The service's message, or this notice in `language`.
    pub(super) fn or_message(self, message: Option<String>, language: Language) -> String {
        message.unwrap_or_else(|| self.text(language).to_string())
    }
}
