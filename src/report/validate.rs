//! Submit-time validation of the report draft.

use url::Url;

use crate::i18n::Strings;

use super::draft::ReportDraft;

/// Fields that can carry an inline validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Site,
    Title,
    Category,
    Description,
    PageUrl,
}

/// Inline error messages keyed by field.
///
/// Cleared per-field as soon as that field is edited; recomputed as a whole
/// on every submission attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    site: Option<String>,
    title: Option<String>,
    category: Option<String>,
    description: Option<String>,
    page_url: Option<String>,
}

impl FieldErrors {
    /// True when the draft is submittable.
    pub fn is_empty(&self) -> bool {
        self.site.is_none()
            && self.title.is_none()
            && self.category.is_none()
            && self.description.is_none()
            && self.page_url.is_none()
    }

    /// Message for one field, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Drop the message for one field, leaving the others untouched.
    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    fn set(&mut self, field: Field, message: &str) {
        *self.slot_mut(field) = Some(message.to_string());
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Site => &self.site,
            Field::Title => &self.title,
            Field::Category => &self.category,
            Field::Description => &self.description,
            Field::PageUrl => &self.page_url,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Site => &mut self.site,
            Field::Title => &mut self.title,
            Field::Category => &mut self.category,
            Field::Description => &mut self.description,
            Field::PageUrl => &mut self.page_url,
        }
    }
}

/// Check the whole draft, evaluating every rule independently.
///
/// Messages come from the passed string table so the result is ready to
/// render next to the offending fields.
pub fn validate(draft: &ReportDraft, strings: &Strings) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.site_id.is_empty() {
        errors.set(Field::Site, strings.err_site_required);
    }
    if draft.title.trim().is_empty() {
        errors.set(Field::Title, strings.err_title_required);
    }
    if draft.category.is_none() {
        errors.set(Field::Category, strings.err_category_required);
    }
    if draft.description.trim().is_empty() {
        errors.set(Field::Description, strings.err_description_required);
    }
    let page_url = draft.page_url.trim();
    if !page_url.is_empty()
        && !draft.site_id.is_empty()
        && !matches_site_domain(page_url, &draft.site_id)
    {
        errors.set(Field::PageUrl, strings.err_page_url_domain);
    }

    errors
}

/// True when `url`'s hostname equals `site` or is a subdomain of it.
///
/// An unparseable URL fails the same way a foreign hostname does; the two
/// cases are one rule.
pub fn matches_site_domain(url: &str, site: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };
    let Some(hostname) = parsed.host_str() else {
        return false;
    };
    let hostname = hostname.to_lowercase();
    let site = site.to_lowercase();
    hostname == site || hostname.ends_with(&format!(".{site}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, table};
    use crate::report::draft::{Category, ReportDraft};

    fn filled_draft() -> ReportDraft {
        ReportDraft {
            site_id: "example.com".into(),
            title: "Button broken".into(),
            description: "Clicking save does nothing.".into(),
            category: Some(Category::Functionality),
            ..ReportDraft::default()
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let strings = table(Language::En);
        let errors = validate(&ReportDraft::default(), strings);
        assert_eq!(errors.get(Field::Site), Some(strings.err_site_required));
        assert_eq!(errors.get(Field::Title), Some(strings.err_title_required));
        assert_eq!(
            errors.get(Field::Category),
            Some(strings.err_category_required)
        );
        assert_eq!(
            errors.get(Field::Description),
            Some(strings.err_description_required)
        );
        assert_eq!(errors.get(Field::PageUrl), None);
    }

    #[test]
    fn whitespace_only_title_and_description_are_rejected() {
        let mut draft = filled_draft();
        draft.title = "   ".into();
        draft.description = "\t\n".into();
        let errors = validate(&draft, table(Language::En));
        assert!(errors.get(Field::Title).is_some());
        assert!(errors.get(Field::Description).is_some());
        assert!(errors.get(Field::Site).is_none());
    }

    #[test]
    fn filled_draft_is_submittable() {
        let errors = validate(&filled_draft(), table(Language::En));
        assert!(errors.is_empty());
    }

    #[test]
    fn subdomain_page_url_passes() {
        let mut draft = filled_draft();
        draft.page_url = "https://shop.example.com/x".into();
        assert!(validate(&draft, table(Language::En)).is_empty());
    }

    #[test]
    fn foreign_page_url_fails() {
        let mut draft = filled_draft();
        draft.site_id = "other.com".into();
        draft.page_url = "https://shop.example.com/x".into();
        let errors = validate(&draft, table(Language::En));
        assert!(errors.get(Field::PageUrl).is_some());
    }

    #[test]
    fn unparseable_page_url_fails_like_a_mismatch() {
        let mut draft = filled_draft();
        draft.page_url = "not a url".into();
        let errors = validate(&draft, table(Language::En));
        assert_eq!(
            errors.get(Field::PageUrl),
            Some(table(Language::En).err_page_url_domain)
        );
    }

    #[test]
    fn page_url_is_not_checked_without_a_site() {
        let mut draft = ReportDraft::default();
        draft.page_url = "not a url".into();
        let errors = validate(&draft, table(Language::En));
        assert!(errors.get(Field::PageUrl).is_none());
    }

    #[test]
    fn domain_matching_is_case_insensitive() {
        assert!(matches_site_domain("https://Shop.EXAMPLE.com/a", "example.com"));
        assert!(matches_site_domain("https://example.com", "EXAMPLE.COM"));
        assert!(!matches_site_domain("https://badexample.com", "example.com"));
    }

    #[test]
    fn clearing_one_field_keeps_the_others() {
        let strings = table(Language::En);
        let mut errors = validate(&ReportDraft::default(), strings);
        errors.clear(Field::Title);
        assert!(errors.get(Field::Title).is_none());
        assert!(errors.get(Field::Site).is_some());
    }
}
