//! プレビューリソース
//!
//! プレビューはDropで解放される。ワークフローは常に1つだけ保持する。

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::error::Result;
use crate::types::ImageFile;

/// 表示用のプレビュー参照
pub trait Preview {
    /// 画面表示に使うURL（Data URL / Object URL / ファイルパス）
    fn url(&self) -> &str;
}

/// プレビュー生成
pub trait PreviewFactory {
    type Preview: Preview;

    fn create(&self, file: &ImageFile) -> Result<Self::Preview>;
}

/// Data URLによるプレビュー（解放すべき外部リソースを持たない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrlPreview {
    url: String,
}

impl Preview for DataUrlPreview {
    fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlPreviewFactory;

impl PreviewFactory for DataUrlPreviewFactory {
    type Preview = DataUrlPreview;

    fn create(&self, file: &ImageFile) -> Result<DataUrlPreview> {
        Ok(DataUrlPreview {
            url: to_data_url(&file.media_type, file.content()),
        })
    }
}

/// "data:image/jpeg;base64,..." 形式に変換
pub fn to_data_url(media_type: &str, content: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(content))
}
