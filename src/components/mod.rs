mod hero_content;
mod nav_bar;
mod video_landing;

pub use hero_content::HeroContent;
pub use nav_bar::NavBar;
pub use video_landing::VideoLanding;
