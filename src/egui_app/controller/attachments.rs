//! Attachment staging: file picker, window drops, and preview thumbnails.

use std::path::PathBuf;

use rfd::FileDialog;

use super::{EguiController, StatusTone};
use crate::report::CandidateImage;

/// Longest edge of a decoded preview thumbnail, in pixels.
const PREVIEW_EDGE: u32 = 160;

impl EguiController {
    /// Let the user pick image files with the native dialog.
    pub fn add_attachments_via_dialog(&mut self) {
        let Some(paths) = FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp", "gif"])
            .pick_files()
        else {
            return;
        };
        self.stage_candidate_paths(paths);
    }

    /// Stage files dropped onto the window or picked from the dialog.
    pub fn stage_candidate_paths(&mut self, paths: Vec<PathBuf>) {
        let mut candidates = Vec::new();
        for path in paths {
            match std::fs::read(&path) {
                Ok(bytes) => candidates.push(CandidateImage::from_path(&path, bytes)),
                Err(err) => {
                    tracing::warn!("Failed to read {}: {err}", path.display());
                    self.set_status(err.to_string(), StatusTone::Error);
                }
            }
        }
        self.stage_candidates(candidates);
    }

    /// Run a batch through the staging rules and refresh previews.
    pub fn stage_candidates(&mut self, candidates: Vec<CandidateImage>) {
        if candidates.is_empty() {
            return;
        }
        let outcome = self.form.add_attachments(candidates);
        if outcome.limit_hit {
            let notice = self.strings().max_images.to_string();
            self.set_status(notice, StatusTone::Warning);
        }
        self.refresh_previews();
    }

    /// Remove the staged image at `index` and release its preview.
    pub fn remove_attachment(&mut self, index: usize) {
        self.form.remove_attachment(index);
        self.refresh_previews();
    }

    /// Decode previews for new attachments and drop previews for removed
    /// ones, so preview memory tracks the staged list exactly.
    fn refresh_previews(&mut self) {
        let staged: Vec<(u64, std::sync::Arc<[u8]>)> = self
            .form
            .draft
            .attachments
            .iter()
            .map(|attachment| (attachment.id, attachment.bytes.clone()))
            .collect();
        self.previews
            .retain(|id, _| staged.iter().any(|(staged_id, _)| staged_id == id));
        for (id, bytes) in staged {
            if self.previews.contains_key(&id) {
                continue;
            }
            if let Some(preview) = decode_preview(&bytes) {
                self.previews.insert(id, preview);
            }
        }
    }
}

fn decode_preview(bytes: &[u8]) -> Option<egui::ColorImage> {
    let decoded = image::load_from_memory(bytes).ok()?;
    let thumb = decoded.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE).to_rgba8();
    let size = [thumb.width() as usize, thumb.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, thumb.as_raw()))
}
