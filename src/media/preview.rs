// SPDX-License-Identifier: MPL-2.0
//! Preview handle storage for selected images.
//!
//! The store hands out [`PreviewId`]s backed by Iced image handles built from
//! the decoded thumbnails. Handles stay alive until explicitly released, so
//! [`PreviewStore::live`] drops back to zero once the form has released
//! everything it acquired.

use crate::domain::orphanage::{PreviewId, PreviewRegistry, SelectedImage};
use iced::widget::image::Handle;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct PreviewStore {
    next_id: u64,
    handles: HashMap<PreviewId, Handle>,
}

impl PreviewStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the image handle behind a preview, if it is still alive.
    #[must_use]
    pub fn handle(&self, id: PreviewId) -> Option<&Handle> {
        self.handles.get(&id)
    }

    /// Number of previews acquired and not yet released.
    #[must_use]
    pub fn live(&self) -> usize {
        self.handles.len()
    }
}

impl PreviewRegistry for PreviewStore {
    fn acquire(&mut self, image: &SelectedImage) -> PreviewId {
        self.next_id += 1;
        let id = PreviewId::from_raw(self.next_id);
        let thumbnail = &image.thumbnail;
        let handle = Handle::from_rgba(thumbnail.width, thumbnail.height, thumbnail.rgba.clone());
        self.handles.insert(id, handle);
        id
    }

    fn release(&mut self, id: PreviewId) {
        if self.handles.remove(&id).is_none() {
            tracing::warn!(preview = %id, "released a preview that was not live");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::orphanage::{OrphanageDraft, Thumbnail};
    use std::sync::Arc;

    fn image() -> SelectedImage {
        SelectedImage {
            file_name: "photo.png".into(),
            mime: "image/png".into(),
            bytes: Arc::from(vec![0_u8; 8]),
            thumbnail: Thumbnail {
                width: 2,
                height: 1,
                rgba: vec![255; 8],
            },
        }
    }

    #[test]
    fn acquire_returns_unique_ids_with_handles() {
        let mut store = PreviewStore::new();
        let a = store.acquire(&image());
        let b = store.acquire(&image());
        assert_ne!(a, b);
        assert!(store.handle(a).is_some());
        assert_eq!(store.live(), 2);
    }

    #[test]
    fn release_drops_the_handle() {
        let mut store = PreviewStore::new();
        let id = store.acquire(&image());
        store.release(id);
        assert!(store.handle(id).is_none());
        assert_eq!(store.live(), 0);
    }

    #[test]
    fn repeated_selection_does_not_leak_previews() {
        let mut store = PreviewStore::new();
        let mut draft = OrphanageDraft::new();

        for _ in 0..5 {
            draft.replace_images(vec![image(), image(), image()], &mut store);
            assert_eq!(store.live(), 3);
        }

        draft.release_images(&mut store);
        assert_eq!(store.live(), 0);
    }
}
