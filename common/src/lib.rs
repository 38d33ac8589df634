//! KS Detect Common Library
//!
//! CLIとWeb(WASM)で共有される型・ワークフロー・ページ内容

pub mod types;
pub mod error;
pub mod validation;
pub mod preview;
pub mod notify;
pub mod service;
pub mod workflow;
pub mod session;
pub mod route;
pub mod content;

pub use types::{AnalysisResult, ImageFile, WorkflowState, format_size_mb, confidence_percent};
pub use error::{Error, Result};
pub use validation::{validate_image, validate_declared, is_image_media_type, media_type_from_extension, MAX_IMAGE_BYTES};
pub use preview::{Preview, PreviewFactory, DataUrlPreview, DataUrlPreviewFactory};
pub use notify::{Notice, Notifier, Severity};
pub use service::{AnalysisService, DemoConfig, StubAnalysisService, parse_analysis_response};
pub use workflow::{AnalysisTicket, Completion, UploadWorkflow};
pub use session::{StartOutcome, ToolSession};
pub use route::Route;
pub use content::{PageContent, Section, SectionBody, CallToAction};
