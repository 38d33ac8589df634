//! 一時ファイルによるプレビュー
//!
//! デコードできる画像はPNGサムネイルに縮小して保存し、
//! できない場合は元のバイト列をそのまま書き出す。
//! 一時ファイルはプレビューのDropで削除される。

use image::ImageFormat;
use ks_detect_common::{Error, ImageFile, Preview, PreviewFactory, Result};
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};
use tracing::debug;

/// サムネイルの最大辺（px）
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 512;

#[derive(Debug)]
pub struct TempFilePreview {
    file: NamedTempFile,
    url: String,
}

impl TempFilePreview {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Preview for TempFilePreview {
    fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThumbnailPreviewFactory {
    max_size: u32,
}

impl ThumbnailPreviewFactory {
    pub fn new(max_size: u32) -> Self {
        Self { max_size }
    }
}

impl Default for ThumbnailPreviewFactory {
    fn default() -> Self {
        Self::new(DEFAULT_THUMBNAIL_SIZE)
    }
}

impl PreviewFactory for ThumbnailPreviewFactory {
    type Preview = TempFilePreview;

    fn create(&self, file: &ImageFile) -> Result<TempFilePreview> {
        let (bytes, suffix) = match image::load_from_memory(file.content()) {
            Ok(img) => {
                let thumb = img.thumbnail(self.max_size, self.max_size);
                let mut buf = Cursor::new(Vec::new());
                thumb
                    .write_to(&mut buf, ImageFormat::Png)
                    .map_err(|e| Error::Preview(format!("サムネイル生成エラー: {}", e)))?;
                (buf.into_inner(), ".png".to_string())
            }
            Err(e) => {
                debug!(name = %file.name, "preview fallback to raw bytes: {}", e);
                let suffix = Path::new(&file.name)
                    .extension()
                    .map(|ext| format!(".{}", ext.to_string_lossy()))
                    .unwrap_or_default();
                (file.content().to_vec(), suffix)
            }
        };

        let mut tmp = Builder::new().prefix("ks-preview-").suffix(&suffix).tempfile()?;
        tmp.write_all(&bytes)?;
        tmp.flush()?;

        let url = tmp.path().display().to_string();
        Ok(TempFilePreview { file: tmp, url })
    }
}
