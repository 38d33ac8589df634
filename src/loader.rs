//! 画像ファイルの読み込み
//!
//! メディアタイプは拡張子から判定し、不明な場合は内容から推定する。
//! 検証（画像か・5MB以下か）はワークフロー側で行う。
//! inspect_image()は先頭バイトとメタデータだけを読む。

use crate::error::{KsDetectError, Result};
use ks_detect_common::{media_type_from_extension, ImageFile};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// 形式判定に読む先頭バイト数
const HEADER_BYTES: u64 = 64;

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(KsDetectError::FileNotFound(path.display().to_string()))
    }
}

/// 内容を全て読まずにメディアタイプとサイズを調べる
pub fn inspect_image(path: &Path) -> Result<(String, u64)> {
    ensure_file(path)?;

    let size = std::fs::metadata(path)?.len();
    let mut header = Vec::new();
    File::open(path)?.take(HEADER_BYTES).read_to_end(&mut header)?;

    Ok((detect_media_type(path, &header), size))
}

pub fn load_image(path: &Path) -> Result<ImageFile> {
    ensure_file(path)?;

    let content = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let media_type = detect_media_type(path, &content);

    Ok(ImageFile::new(name, media_type, content))
}

/// 拡張子 → 内容の順でメディアタイプを判定
pub fn detect_media_type(path: &Path, content: &[u8]) -> String {
    if let Some(media_type) = path
        .extension()
        .and_then(|ext| media_type_from_extension(&ext.to_string_lossy()))
    {
        return media_type.to_string();
    }

    match image::guess_format(content) {
        Ok(format) => format.to_mime_type().to_string(),
        Err(_) => UNKNOWN_MEDIA_TYPE.to_string(),
    }
}
