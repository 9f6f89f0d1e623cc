//! Configuration module

mod site;

pub use site::HeroConfig;
pub use site::SiteConfig;
pub use site::SocialConfig;
