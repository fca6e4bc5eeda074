// SPDX-License-Identifier: MPL-2.0
//! The orphanage registration draft.
//!
//! An [`OrphanageDraft`] lives only as long as the registration form. Every
//! setter touches exactly one field (last write wins). Images and their
//! previews are kept index-aligned: they are always replaced together, and
//! previews handed out by a [`PreviewRegistry`] are released before new ones
//! are acquired.

use super::geo::Coordinate;
use std::fmt;
use std::sync::Arc;

/// Maximum length of the "about" text, in characters.
pub const ABOUT_MAX_CHARS: usize = 300;

// =============================================================================
// Images and previews
// =============================================================================

/// Downscaled RGBA pixels used to render a preview.
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// An image file picked by the user, ready to be uploaded.
#[derive(Clone)]
pub struct SelectedImage {
    /// File name sent with the multipart part.
    pub file_name: String,
    /// MIME type sniffed from the file content.
    pub mime: String,
    /// Raw file bytes, shared so cloning a draft stays cheap.
    pub bytes: Arc<[u8]>,
    pub thumbnail: Thumbnail,
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Process-local reference to an image preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewId(u64);

impl PreviewId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview://{}", self.0)
    }
}

/// Allocates and frees preview resources for selected images.
///
/// Every id returned by `acquire` must eventually be passed to `release`
/// exactly once.
pub trait PreviewRegistry {
    fn acquire(&mut self, image: &SelectedImage) -> PreviewId;
    fn release(&mut self, id: PreviewId);
}

// =============================================================================
// OrphanageDraft
// =============================================================================

/// Form-local state of a new orphanage record.
#[derive(Debug, Clone)]
pub struct OrphanageDraft {
    name: String,
    about: String,
    instructions: String,
    opening_hours: String,
    open_on_weekends: bool,
    position: Coordinate,
    images: Vec<SelectedImage>,
    image_previews: Vec<PreviewId>,
}

impl Default for OrphanageDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            about: String::new(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            position: Coordinate::unset(),
            images: Vec::new(),
            image_previews: Vec::new(),
        }
    }
}

impl OrphanageDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets the description, truncated to [`ABOUT_MAX_CHARS`] characters.
    pub fn set_about(&mut self, about: impl Into<String>) {
        let about = about.into();
        self.about = match about.char_indices().nth(ABOUT_MAX_CHARS) {
            Some((byte_index, _)) => about[..byte_index].to_string(),
            None => about,
        };
    }

    pub fn set_instructions(&mut self, instructions: impl Into<String>) {
        self.instructions = instructions.into();
    }

    pub fn set_opening_hours(&mut self, opening_hours: impl Into<String>) {
        self.opening_hours = opening_hours.into();
    }

    pub fn set_open_on_weekends(&mut self, open: bool) {
        self.open_on_weekends = open;
    }

    /// Records the latest position picked on the map.
    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Replaces the whole image selection.
    ///
    /// An empty selection (cancelled dialog) is ignored. Otherwise all
    /// previous previews are released and one preview per new image is
    /// acquired, in selection order. Returns whether the draft changed.
    pub fn replace_images(
        &mut self,
        images: Vec<SelectedImage>,
        registry: &mut impl PreviewRegistry,
    ) -> bool {
        if images.is_empty() {
            return false;
        }

        for id in self.image_previews.drain(..) {
            registry.release(id);
        }
        self.image_previews = images.iter().map(|image| registry.acquire(image)).collect();
        self.images = images;
        true
    }

    /// Releases every preview and drops the image selection.
    ///
    /// Called when the form is reset or torn down.
    pub fn release_images(&mut self, registry: &mut impl PreviewRegistry) {
        for id in self.image_previews.drain(..) {
            registry.release(id);
        }
        self.images.clear();
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn about(&self) -> &str {
        &self.about
    }

    #[must_use]
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    #[must_use]
    pub fn opening_hours(&self) -> &str {
        &self.opening_hours
    }

    #[must_use]
    pub fn open_on_weekends(&self) -> bool {
        self.open_on_weekends
    }

    #[must_use]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[must_use]
    pub fn images(&self) -> &[SelectedImage] {
        &self.images
    }

    #[must_use]
    pub fn image_previews(&self) -> &[PreviewId] {
        &self.image_previews
    }

    /// Remaining characters allowed in the "about" field.
    #[must_use]
    pub fn about_remaining(&self) -> usize {
        ABOUT_MAX_CHARS.saturating_sub(self.about.chars().count())
    }
}

// =============================================================================
// Tests
// =============================================================================
