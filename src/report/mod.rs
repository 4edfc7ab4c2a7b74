//! Report draft state, validation, and attachment staging.
//!
//! Everything in this module is plain data and pure logic: no UI types, no
//! network calls, no ambient configuration. The egui controller owns a
//! [`form::ReportForm`] and is the only place that connects it to the
//! transport.

pub mod attachments;
pub mod draft;
pub mod form;
pub mod validate;

pub use attachments::{Attachment, AttachmentAddOutcome, CandidateImage, ImageKind};
pub use draft::{Category, ReportDraft, ReportType};
pub use form::{ReportForm, SubmitGate, SubmitPhase};
pub use validate::{Field, FieldErrors};
