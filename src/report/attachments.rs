//! Staged screenshot attachments and the rules for adding them.

use std::path::Path;
use std::sync::Arc;

/// Maximum number of images per report.
pub const MAX_IMAGES: usize = 5;
/// Maximum size of a single image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Accepted image kinds, keyed by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl ImageKind {
    /// MIME type sent with the image part.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    /// Derive the kind from a file extension, case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "webp" => Some(Self::Webp),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    /// Derive the kind from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// One staged image, accepted into the draft.
///
/// Bytes are shared so submission can snapshot the list without copying
/// megabytes per attachment.
#[derive(Clone, Debug, PartialEq)]
pub struct Attachment {
    /// Stable id used to key preview textures across removals.
    pub id: u64,
    pub file_name: String,
    pub kind: ImageKind,
    pub bytes: Arc<[u8]>,
}

/// A file offered by the picker or a window drop, before acceptance.
#[derive(Clone, Debug)]
pub struct CandidateImage {
    pub file_name: String,
    /// `None` when the extension is not a recognized image kind.
    pub kind: Option<ImageKind>,
    pub bytes: Arc<[u8]>,
}

impl CandidateImage {
    /// Build a candidate from a file path and its contents.
    pub fn from_path(path: &Path, bytes: Vec<u8>) -> Self {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("image")
            .to_string();
        Self {
            file_name,
            kind: ImageKind::from_path(path),
            bytes: bytes.into(),
        }
    }
}

/// Result of one [`add_files`] batch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttachmentAddOutcome {
    /// How many candidates were accepted.
    pub added: usize,
    /// The 5-image cap stopped the batch; surface the "maximum images" notice.
    pub limit_hit: bool,
}

/// Add candidates to the staged list, in order.
///
/// Once the list holds [`MAX_IMAGES`] the rest of the batch is dropped and
/// `limit_hit` is set. Candidates with an unrecognized kind or over
/// [`MAX_IMAGE_BYTES`] are skipped without feedback.
pub fn add_files(
    current: &mut Vec<Attachment>,
    candidates: Vec<CandidateImage>,
    next_id: &mut u64,
) -> AttachmentAddOutcome {
    let mut outcome = AttachmentAddOutcome::default();
    for candidate in candidates {
        if current.len() >= MAX_IMAGES {
            outcome.limit_hit = true;
            break;
        }
        let Some(kind) = candidate.kind else {
            continue;
        };
        if candidate.bytes.len() > MAX_IMAGE_BYTES {
            continue;
        }
        let id = *next_id;
        *next_id += 1;
        current.push(Attachment {
            id,
            file_name: candidate.file_name,
            kind,
            bytes: candidate.bytes,
        });
        outcome.added += 1;
    }
    outcome
}

/// Remove the attachment at `index`, preserving the order of the rest.
pub fn remove_file(current: &mut Vec<Attachment>, index: usize) {
    if index < current.len() {
        current.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, kind: Option<ImageKind>, len: usize) -> CandidateImage {
        CandidateImage {
            file_name: name.to_string(),
            kind,
            bytes: vec![0u8; len].into(),
        }
    }

    #[test]
    fn six_valid_candidates_cap_at_five_with_notice() {
        let mut staged = Vec::new();
        let mut next_id = 1;
        let batch = (0..6)
            .map(|i| candidate(&format!("shot{i}.png"), Some(ImageKind::Png), 16))
            .collect();
        let outcome = add_files(&mut staged, batch, &mut next_id);
        assert_eq!(staged.len(), 5);
        assert_eq!(outcome.added, 5);
        assert!(outcome.limit_hit);
    }

    #[test]
    fn oversized_image_is_silently_dropped() {
        let mut staged = Vec::new();
        let mut next_id = 1;
        let batch = vec![candidate("big.png", Some(ImageKind::Png), MAX_IMAGE_BYTES + 1)];
        let outcome = add_files(&mut staged, batch, &mut next_id);
        assert!(staged.is_empty());
        assert_eq!(outcome, AttachmentAddOutcome::default());
    }

    #[test]
    fn unrecognized_kind_is_silently_dropped() {
        let mut staged = Vec::new();
        let mut next_id = 1;
        let batch = vec![candidate("notes.pdf", None, 16)];
        let outcome = add_files(&mut staged, batch, &mut next_id);
        assert!(staged.is_empty());
        assert_eq!(outcome.added, 0);
        assert!(!outcome.limit_hit);
    }

    #[test]
    fn boundary_size_is_accepted() {
        let mut staged = Vec::new();
        let mut next_id = 1;
        let batch = vec![candidate("edge.webp", Some(ImageKind::Webp), MAX_IMAGE_BYTES)];
        let outcome = add_files(&mut staged, batch, &mut next_id);
        assert_eq!(outcome.added, 1);
        assert_eq!(staged[0].kind, ImageKind::Webp);
    }

    #[test]
    fn remove_preserves_order_and_assigned_ids() {
        let mut staged = Vec::new();
        let mut next_id = 1;
        let batch = (0..3)
            .map(|i| candidate(&format!("s{i}.gif"), Some(ImageKind::Gif), 8))
            .collect();
        add_files(&mut staged, batch, &mut next_id);
        remove_file(&mut staged, 1);
        let names: Vec<_> = staged.iter().map(|a| a.file_name.as_str()).collect();
        assert_eq!(names, ["s0.gif", "s2.gif"]);
        assert_eq!(staged[1].id, 3);
        // Out-of-range removal is a no-op.
        remove_file(&mut staged, 9);
        assert_eq!(staged.len(), 2);
    }

    #[test]
    fn extension_mapping_is_case_insensitive() {
        assert_eq!(ImageKind::from_extension("JPG"), Some(ImageKind::Jpeg));
        assert_eq!(
            ImageKind::from_path(Path::new("/tmp/Pic.PNG")),
            Some(ImageKind::Png)
        );
        assert_eq!(ImageKind::from_extension("bmp"), None);
    }
}
