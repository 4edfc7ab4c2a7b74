//! The in-progress report draft and its enumerated fields.

use super::attachments::Attachment;

/// The kind of report the user is filing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportType {
    /// Something is broken on the site.
    #[default]
    Bug,
    /// A feature request or suggestion.
    Request,
}

impl ReportType {
    /// Wire value used in the submission form.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Request => "request",
        }
    }
}

/// Report category chosen by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Design,
    Functionality,
    Performance,
    Content,
    Mobile,
    Security,
    Other,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Category; 7] = [
        Category::Design,
        Category::Functionality,
        Category::Performance,
        Category::Content,
        Category::Mobile,
        Category::Security,
        Category::Other,
    ];

    /// Wire value used in the submission form.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Functionality => "functionality",
            Self::Performance => "performance",
            Self::Content => "content",
            Self::Mobile => "mobile",
            Self::Security => "security",
            Self::Other => "other",
        }
    }
}

/// Maximum title length enforced by the input widget.
pub const MAX_TITLE_CHARS: usize = 200;
/// Maximum description length enforced by the input widget.
pub const MAX_DESCRIPTION_CHARS: usize = 5000;
/// Maximum contact name/email length enforced by the input widgets.
pub const MAX_CONTACT_CHARS: usize = 200;
/// Maximum phone length enforced by the input widget.
pub const MAX_PHONE_CHARS: usize = 30;

/// The mutable in-progress report before successful submission.
///
/// `site_id` and `category` use the empty value for "unset"; the contact
/// fields are independently optional.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportDraft {
    pub site_id: String,
    pub report_type: ReportType,
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    pub page_url: String,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub attachments: Vec<Attachment>,
    /// Opaque proof from the bot-challenge step; empty = not yet verified.
    pub verification_token: String,
}

impl ReportDraft {
    /// An empty draft for the given report type.
    pub fn empty(report_type: ReportType) -> Self {
        Self {
            report_type,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_report_type_is_bug() {
        assert_eq!(ReportDraft::default().report_type, ReportType::Bug);
    }

    #[test]
    fn wire_names_are_lowercase_identifiers() {
        assert_eq!(ReportType::Request.wire_name(), "request");
        for category in Category::ALL {
            let name = category.wire_name();
            assert!(name.chars().all(|ch| ch.is_ascii_lowercase()));
        }
    }
}
