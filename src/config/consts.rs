// src/config/consts.rs

// Net config
pub const DEFAULT_URL: &str = "https://www.flipkart.com/search?q=samsung+mobiles";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const ACCEPT_ENCODING: &str = "gzip, deflate, br";
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";

// Records
pub const NA: &str = "N/A";
pub const HEADERS: [&str; 3] = ["Product_Name", "Price (₹)", "Rating"];

// Status messages
pub const MSG_NO_URL: &str = "Please enter a URL to start scraping.";
pub const MSG_BLOCKED: &str = "Scraping failed. The website is blocking the request with a CAPTCHA. Try again later or from a different network.";
pub const MSG_EXHAUSTED: &str = "All scraping methods failed. The website's structure is too complex or it's actively blocking script access.";
pub const MSG_SUCCESS: &str = "Scraping successful!";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "scraped_products";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_FILTER: &str = "shop_scrape=debug";
