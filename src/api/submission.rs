// SPDX-License-Identifier: MPL-2.0
//! The multipart payload sent when an orphanage is registered.
//!
//! Text fields come first, in a fixed order, with numbers and booleans
//! rendered as text. One `images` part follows per selected image, in
//! selection order.

use crate::domain::orphanage::OrphanageDraft;
use crate::error::SubmitError;
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

/// Field name shared by every image part.
pub const IMAGES_FIELD: &str = "images";

/// One file attached to the submission.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub file_name: String,
    pub mime: String,
    pub bytes: Arc<[u8]>,
}

/// Serialized form state, ready to be posted.
#[derive(Debug, Clone)]
pub struct Submission {
    fields: Vec<(&'static str, String)>,
    images: Vec<ImagePart>,
}

impl Submission {
    /// Captures the current draft values.
    #[must_use]
    pub fn from_draft(draft: &OrphanageDraft) -> Self {
        let position = draft.position();
        let fields = vec![
            ("name", draft.name().to_string()),
            ("about", draft.about().to_string()),
            ("latitude", position.latitude().to_string()),
            ("longitude", position.longitude().to_string()),
            ("instructions", draft.instructions().to_string()),
            ("opening_hours", draft.opening_hours().to_string()),
            ("open_on_weekends", draft.open_on_weekends().to_string()),
        ];

        let images = draft
            .images()
            .iter()
            .map(|image| ImagePart {
                file_name: image.file_name.clone(),
                mime: image.mime.clone(),
                bytes: Arc::clone(&image.bytes),
            })
            .collect();

        Self { fields, images }
    }

    /// Text fields in wire order.
    #[must_use]
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Value of a text field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Image parts in selection order.
    #[must_use]
    pub fn images(&self) -> &[ImagePart] {
        &self.images
    }

    /// Converts the payload into a `reqwest` multipart form.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidPayload`] if an image carries a MIME
    /// type `reqwest` cannot parse.
    pub fn into_form(self) -> Result<Form, SubmitError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for image in self.images {
            let part = Part::bytes(image.bytes.to_vec())
                .file_name(image.file_name)
                .mime_str(&image.mime)
                .map_err(|err| SubmitError::InvalidPayload(err.to_string()))?;
            form = form.part(IMAGES_FIELD, part);
        }
        Ok(form)
    }
}
