//! 画像ファイルの検証
//!
//! 検証順: メディアタイプ → サイズ

use crate::error::{Error, Result};
use crate::types::ImageFile;

/// 最大ファイルサイズ (5MB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// 拡張子 → メディアタイプ
const EXTENSION_MEDIA_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
];

/// メディアタイプが画像を示すか
pub fn is_image_media_type(media_type: &str) -> bool {
    media_type
        .get(..6)
        .map(|prefix| prefix.eq_ignore_ascii_case("image/"))
        .unwrap_or(false)
}

/// 拡張子からメディアタイプを推定（大文字小文字を区別しない）
pub fn media_type_from_extension(ext: &str) -> Option<&'static str> {
    let ext = ext.to_ascii_lowercase();
    EXTENSION_MEDIA_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, media_type)| *media_type)
}

/// 宣言されたメディアタイプとサイズを検証（内容を読む前に使える）
pub fn validate_declared(media_type: &str, size: u64) -> Result<()> {
    if !is_image_media_type(media_type) {
        return Err(Error::InvalidType {
            media_type: media_type.to_string(),
        });
    }

    if size > MAX_IMAGE_BYTES {
        return Err(Error::TooLarge {
            size,
            limit: MAX_IMAGE_BYTES,
        });
    }

    Ok(())
}

/// 選択された画像を検証
pub fn validate_image(file: &ImageFile) -> Result<()> {
    validate_declared(&file.media_type, file.size())
}
