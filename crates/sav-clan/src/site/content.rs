//! Static collaborator data consumed read-only by the page renderer.

pub const CLAN_NAME: &str = "Sav Oficial";
pub const HERO_TAGLINE: &str =
    "Dominate the battlefield. Join the top competitive BloodStrike clan.";
pub const HERO_CTA: &str = "Apply for Tryouts";
pub const REGISTRATION_TITLE: &str = "Apply for Tryouts";
pub const REGISTRATION_INTRO: &str =
    "Think you have what it takes? Fill in the form to apply for a trial period with Sav Oficial.";
pub const CONTENT_TERMS_DETAIL: &str = "I commit to creating a TikTok account with my in-game \
     name and the clan initials (Sav) and to uploading content promoting the clan.";

/// Navigation entry rendered in the header and the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 1] = [NavLink {
    name: "Apply",
    href: "#register",
}];

/// Footer social destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub aria_label: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        name: "TikTok",
        href: "https://www.tiktok.com/@sav_oficial",
        aria_label: "TikTok",
    },
    SocialLink {
        name: "YouTube",
        href: "https://youtube.com/@mrlsbrandonma",
        aria_label: "YouTube",
    },
];

/// Placeholder image descriptor supplied by the static data collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePlaceholder {
    pub id: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub image_hint: &'static str,
}

pub const PLACEHOLDER_IMAGES: [ImagePlaceholder; 1] = [ImagePlaceholder {
    id: "hero-background",
    description: "Squad of fighters silhouetted against a burning skyline",
    image_url: "https://picsum.photos/seed/sav-hero/1920/1080",
    image_hint: "esports battle",
}];

pub fn placeholder_image(id: &str) -> Option<&'static ImagePlaceholder> {
    PLACEHOLDER_IMAGES.iter().find(|image| image.id == id)
}
