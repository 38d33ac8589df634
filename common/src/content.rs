//! 各画面の静的コンテンツ
//!
//! 表示層（CLI/Web）はこの構造を描画するだけで、文言を持たない。

use serde::Serialize;
use crate::route::Route;

/// アップロード欄の案内
pub const UPLOAD_HINT: &str = "Supported formats: JPG, PNG, WEBP • Max size: 5MB";

#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub route: Route,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// 画面上部の注意書き
    pub alerts: Vec<&'static str>,
    pub sections: Vec<Section>,
    pub actions: Vec<CallToAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub heading: &'static str,
    pub body: Vec<SectionBody>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum SectionBody {
    Paragraph(&'static str),
    Subheading(&'static str),
    Bullets(Vec<&'static str>),
    /// (見出し, 本文) のカード
    Cards(Vec<(&'static str, &'static str)>),
    Alert(&'static str),
}

#[derive(Debug, Clone, Serialize)]
pub struct CallToAction {
    pub label: &'static str,
    pub target: Route,
}

impl PageContent {
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Landing => landing(),
            Route::Learn => learn(),
            Route::Tool => tool(),
        }
    }
}

pub fn landing() -> PageContent {
    PageContent {
        route: Route::Landing,
        title: "Kaposi Sarcoma Awareness & Detection",
        subtitle: "Early detection saves lives. Learn about Kaposi Sarcoma and use our AI-powered tool to analyze skin lesions.",
        alerts: vec![],
        sections: vec![
            Section {
                heading: "Why Early Detection Matters",
                body: vec![SectionBody::Cards(vec![
                    ("Better Outcomes", "Early detection and treatment of Kaposi Sarcoma significantly improves patient outcomes and quality of life."),
                    ("AI-Powered Analysis", "Our advanced AI model helps identify potential KS lesions, supporting healthcare professionals in diagnosis."),
                    ("Accessible Care", "Democratizing access to preliminary screening tools, especially important in underserved communities."),
                ])],
            },
            Section {
                heading: "Take Action Today",
                body: vec![SectionBody::Paragraph(
                    "Knowledge and early detection are your best defenses against Kaposi Sarcoma.",
                )],
            },
        ],
        actions: vec![
            CallToAction { label: "Learn About KS", target: Route::Learn },
            CallToAction { label: "Try AI Tool", target: Route::Tool },
        ],
    }
}

pub fn learn() -> PageContent {
    PageContent {
        route: Route::Learn,
        title: "Understanding Kaposi Sarcoma",
        subtitle: "Learn about this important cancer, its causes, and why early detection is crucial for effective treatment.",
        alerts: vec![
            "This information is for educational purposes only. Always consult with healthcare professionals for medical advice, diagnosis, or treatment.",
        ],
        sections: vec![
            Section {
                heading: "What is Kaposi Sarcoma?",
                body: vec![
                    SectionBody::Paragraph("Kaposi Sarcoma (KS) is a type of cancer that develops from the cells that line lymph or blood vessels. It usually appears as painless, flat, purple or dark lesions on the skin, but can also affect internal organs."),
                    SectionBody::Paragraph("Unlike many other cancers, KS is caused by a viral infection - specifically the human herpesvirus 8 (HHV-8), also known as Kaposi Sarcoma-associated herpesvirus (KSHV)."),
                    SectionBody::Subheading("Common Characteristics:"),
                    SectionBody::Bullets(vec![
                        "Purple, red, or brown lesions on the skin",
                        "Painless, flat or raised patches",
                        "May appear anywhere on the body",
                        "Can affect mucous membranes and internal organs",
                        "Lesions may be few or numerous",
                    ]),
                ],
            },
            Section {
                heading: "The HHV-8 Connection",
                body: vec![
                    SectionBody::Paragraph("Human herpesvirus 8 (HHV-8) is the infectious cause of all forms of Kaposi Sarcoma. However, not everyone infected with HHV-8 will develop KS."),
                    SectionBody::Subheading("Key Facts about HHV-8:"),
                    SectionBody::Bullets(vec![
                        "Transmitted through saliva, sexual contact, or blood transfusions",
                        "More common in certain geographical regions (Mediterranean, Africa, Middle East)",
                        "Most people with HHV-8 never develop symptoms",
                        "KS typically only develops when the immune system is compromised",
                        "Can remain dormant for years before causing disease",
                    ]),
                    SectionBody::Paragraph("The risk of developing KS increases significantly in people with weakened immune systems, including those with HIV/AIDS, organ transplant recipients, or certain genetic conditions."),
                ],
            },
            Section {
                heading: "Types of Kaposi Sarcoma",
                body: vec![SectionBody::Cards(vec![
                    ("Classic KS", "Affects older men of Mediterranean or Eastern European descent. Typically progresses slowly and mainly affects the legs and feet."),
                    ("Endemic KS", "Found in certain parts of Africa, affects people of all ages. Can be more aggressive and may involve lymph nodes."),
                    ("Epidemic KS", "Associated with HIV/AIDS. Can be aggressive and may affect multiple organs including lungs and digestive tract."),
                    ("Iatrogenic KS", "Occurs in people taking immunosuppressive medications, typically organ transplant recipients."),
                ])],
            },
            Section {
                heading: "Why Early Detection Matters",
                body: vec![
                    SectionBody::Paragraph("Early detection and treatment of Kaposi Sarcoma can significantly improve outcomes and quality of life:"),
                    SectionBody::Bullets(vec![
                        "Better Treatment Response: Early-stage KS often responds better to treatment",
                        "Prevent Spread: Early intervention can prevent lesions from spreading to internal organs",
                        "Improved Quality of Life: Prompt treatment reduces symptoms and cosmetic concerns",
                        "Reduced Complications: Prevents serious complications like lung or digestive involvement",
                    ]),
                    SectionBody::Alert("If you notice any persistent, unusual skin lesions, especially if you're at higher risk, consult with a healthcare professional promptly."),
                ],
            },
            Section {
                heading: "Ready to Try Our AI Detection Tool?",
                body: vec![SectionBody::Paragraph(
                    "Use our advanced AI model to analyze skin lesions for potential signs of Kaposi Sarcoma.",
                )],
            },
        ],
        actions: vec![CallToAction { label: "Try AI Detection Tool", target: Route::Tool }],
    }
}

pub fn tool() -> PageContent {
    PageContent {
        route: Route::Tool,
        title: "KS Detection Tool",
        subtitle: "Upload an image of a skin lesion for AI-powered analysis. This tool supports healthcare professionals in preliminary screening.",
        alerts: vec![
            "Medical Disclaimer: This AI tool is for educational and screening purposes only. It cannot replace professional medical diagnosis. Always consult healthcare professionals for proper evaluation and treatment.",
            "Privacy: Images are processed securely and are not stored on our servers. Your privacy and medical information are protected.",
        ],
        sections: vec![Section {
            heading: "Guidelines for Best Results",
            body: vec![SectionBody::Bullets(vec![
                "Use good lighting when taking the photo",
                "Ensure the lesion is clearly visible and in focus",
                "Include some surrounding normal skin for context",
                "Avoid shadows or reflections on the skin",
                "Take the photo from a reasonable distance",
                "Use a ruler or coin for size reference if possible",
            ])],
        }],
        actions: vec![CallToAction { label: "Learn About KS", target: Route::Learn }],
    }
}
