/// Metadatos de página que consume el `<head>` del documento
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HOME_META: PageMeta = PageMeta {
    title: "AI-Resume",
    description: "AI Powered Resume Tracking System",
};

pub const AUTH_META: PageMeta = PageMeta {
    title: "AI-Resume | Auth",
    description: "Log in to track your resumes and AI feedback",
};
