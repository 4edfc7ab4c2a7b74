//! Helpers to map core data onto display strings.

use crate::config::ThemeChoice;
use crate::i18n::Strings;
use crate::report::{Category, ReportType};

/// Localized label for a report category.
pub fn category_label(category: Category, strings: &Strings) -> &'static str {
    match category {
        Category::Design => strings.cat_design,
        Category::Functionality => strings.cat_functionality,
        Category::Performance => strings.cat_performance,
        Category::Content => strings.cat_content,
        Category::Mobile => strings.cat_mobile,
        Category::Security => strings.cat_security,
        Category::Other => strings.cat_other,
    }
}

/// Localized label for the report type toggle.
pub fn report_type_label(report_type: ReportType, strings: &Strings) -> &'static str {
    match report_type {
        ReportType::Bug => strings.type_bug,
        ReportType::Request => strings.type_request,
    }
}

/// Localized label for the theme picker.
pub fn theme_label(choice: ThemeChoice, strings: &Strings) -> &'static str {
    match choice {
        ThemeChoice::Light => strings.theme_light,
        ThemeChoice::Dark => strings.theme_dark,
        ThemeChoice::System => strings.theme_system,
    }
}

/// Title placeholder for the current report type.
pub fn title_placeholder(report_type: ReportType, strings: &Strings) -> &'static str {
    match report_type {
        ReportType::Bug => strings.title_placeholder_bug,
        ReportType::Request => strings.title_placeholder_request,
    }
}

/// Description placeholder for the current report type.
pub fn description_placeholder(report_type: ReportType, strings: &Strings) -> &'static str {
    match report_type {
        ReportType::Bug => strings.desc_placeholder_bug,
        ReportType::Request => strings.desc_placeholder_request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, table};

    #[test]
    fn placeholders_follow_the_report_type() {
        let strings = table(Language::En);
        assert_ne!(
            title_placeholder(ReportType::Bug, strings),
            title_placeholder(ReportType::Request, strings)
        );
        assert_ne!(
            description_placeholder(ReportType::Bug, strings),
            description_placeholder(ReportType::Request, strings)
        );
    }

    #[test]
    fn every_category_has_a_label() {
        let strings = table(Language::Tr);
        for category in Category::ALL {
            assert!(!category_label(category, strings).is_empty());
        }
    }
}
