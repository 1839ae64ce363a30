use std::fmt;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BannerId(pub(crate) u64);

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(&self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BannerKind::Success => "fas fa-check-circle",
            BannerKind::Error => "fas fa-exclamation-circle",
        }
    }
}

/// Transient notice shown immediately before the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}
