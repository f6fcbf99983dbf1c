use std::path::{Path, PathBuf};

use crate::foundation::error::{ReelError, ReelResult};

/// Opaque handle to a texture owned by a [`ResourceLoader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct TextureHandle(pub u32);

/// Opaque handle to a font owned by a [`ResourceLoader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FontHandle(pub u32);

/// External asset loader.
///
/// Loading happens while objects are being built, never during playback. Objects only
/// keep the returned handles; decoding and storage belong to the loader, which releases
/// everything in [`ResourceLoader::unload_all`] at scene teardown.
pub trait ResourceLoader {
    /// Load a texture from `path`.
    fn load_texture(&mut self, path: &Path) -> ReelResult<TextureHandle>;

    /// Load a font from `path`.
    fn load_font(&mut self, path: &Path) -> ReelResult<FontHandle>;

    /// Release every loaded resource.
    fn unload_all(&mut self);
}

/// Loader that performs no IO and hands out sequential handles.
///
/// Paths are remembered so headless runs can report what a real loader would have opened.
#[derive(Debug, Default)]
pub struct NullLoader {
    textures: Vec<PathBuf>,
    fonts: Vec<PathBuf>,
    unloads: u32,
}

impl NullLoader {
    /// Empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture paths currently registered.
    pub fn textures(&self) -> &[PathBuf] {
        &self.textures
    }

    /// Font paths currently registered.
    pub fn fonts(&self) -> &[PathBuf] {
        &self.fonts
    }

    /// How many times [`ResourceLoader::unload_all`] ran.
    pub fn unloads(&self) -> u32 {
        self.unloads
    }
}

fn next_handle(len: usize) -> ReelResult<u32> {
    u32::try_from(len).map_err(|_| ReelError::resource("resource handle overflow"))
}

impl ResourceLoader for NullLoader {
    fn load_texture(&mut self, path: &Path) -> ReelResult<TextureHandle> {
        if path.as_os_str().is_empty() {
            return Err(ReelError::resource("texture path is empty"));
        }
        let handle = TextureHandle(next_handle(self.textures.len())?);
        self.textures.push(path.to_path_buf());
        Ok(handle)
    }

    fn load_font(&mut self, path: &Path) -> ReelResult<FontHandle> {
        if path.as_os_str().is_empty() {
            return Err(ReelError::resource("font path is empty"));
        }
        let handle = FontHandle(next_handle(self.fonts.len())?);
        self.fonts.push(path.to_path_buf());
        Ok(handle)
    }

    fn unload_all(&mut self) {
        tracing::debug!(
            textures = self.textures.len(),
            fonts = self.fonts.len(),
            "unloading resources"
        );
        self.textures.clear();
        self.fonts.clear();
        self.unloads += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/resources/loader.rs"]
mod tests;
