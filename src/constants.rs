/// DOM hooks and rendering defaults for the web front-end.
///
/// Element ids and class names the static page and the Rust code agree on
/// live here so neither side hardcodes the other's strings.
// Product render
pub const PRODUCT_CONTAINER_ID: &str = "product-render";
pub const PRODUCT_LOADING_ID: &str = "product-loading";
pub const PRODUCT_CANVAS_CLASS: &str = "product-canvas";

// Page shell
pub const NAV_ID: &str = "site-nav";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MENU_OPEN_ID: &str = "menu-open";
pub const MENU_CLOSE_ID: &str = "menu-close";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const MOBILE_LINKS_ID: &str = "mobile-links";
pub const HERO_FEATURES_ID: &str = "hero-features";
pub const BRAND_TRACK_ID: &str = "brand-track";
pub const STORY_STATS_ID: &str = "story-stats";
pub const COLLECTION_GRID_ID: &str = "collection-grid";
pub const REVIEWS_TRACK_ID: &str = "reviews-track";
pub const REVIEWS_TRACK_REVERSE_ID: &str = "reviews-track-reverse";

// Fade-in regions
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_DELAY_ATTR: &str = "data-delay";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";

// GPU
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
pub const BUMP_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R8Unorm;
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;
