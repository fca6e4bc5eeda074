// SPDX-License-Identifier: MPL-2.0
//! Turning picked files into uploadable images.
//!
//! Each file is sniffed for its format, decoded once to build a thumbnail,
//! and kept as raw bytes for the multipart upload. Decoding is CPU bound, so
//! [`load_selected_images`] is meant to run on a blocking thread.

use crate::domain::orphanage::{SelectedImage, Thumbnail};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Longest edge of generated preview thumbnails, in pixels.
pub const THUMBNAIL_MAX_EDGE: u32 = 192;

/// Extensions offered by the image selection dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// A file read from disk, before decoding.
#[derive(Debug, Clone)]
pub struct PickedFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Decodes one picked file into a [`SelectedImage`].
///
/// # Errors
///
/// Returns [`Error::Image`] when the content is not a supported image.
pub fn load_selected_image(file: PickedFile) -> Result<SelectedImage> {
    let format = image_rs::guess_format(&file.bytes)?;
    let decoded = image_rs::load_from_memory_with_format(&file.bytes, format)?;
    let preview = decoded
        .thumbnail(THUMBNAIL_MAX_EDGE, THUMBNAIL_MAX_EDGE)
        .to_rgba8();

    Ok(SelectedImage {
        file_name: file.file_name,
        mime: format.to_mime_type().to_string(),
        thumbnail: Thumbnail {
            width: preview.width(),
            height: preview.height(),
            rgba: preview.into_raw(),
        },
        bytes: Arc::from(file.bytes),
    })
}

/// Decodes every picked file, preserving order.
///
/// Fails as a whole on the first unreadable file so the previous selection
/// stays in place.
pub fn load_selected_images(files: Vec<PickedFile>) -> Result<Vec<SelectedImage>> {
    files.into_iter().map(load_selected_image).collect()
}

/// Opens the native multi-file dialog and reads the chosen images.
///
/// A cancelled dialog yields an empty list.
pub async fn pick_images(title: String) -> Result<Vec<SelectedImage>> {
    let Some(handles) = rfd::AsyncFileDialog::new()
        .set_title(&title)
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_files()
        .await
    else {
        return Ok(Vec::new());
    };

    let mut files = Vec::with_capacity(handles.len());
    for handle in handles {
        files.push(PickedFile {
            file_name: handle.file_name(),
            bytes: handle.read().await,
        });
    }

    tokio::task::spawn_blocking(move || load_selected_images(files))
        .await
        .map_err(|err| Error::Io(err.to_string()))?
}
