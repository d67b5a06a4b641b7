//! Screenshot capture of product pages through a WebDriver endpoint.
//!
//! The capture drives a headless Chrome session: open the page, wait for the first product
//! image, screenshot that element only and return it base64 encoded. One session per capture;
//! the session always quits, success or not.

use std::{error::Error as StdError, time::Duration};

use base64::{engine::general_purpose, Engine};
use thirtyfour::{prelude::*, DesiredCapabilities, WebDriver};

/// Options of the capture.
#[derive(Clone)]
pub struct ScreenshotOptions {
    /// The WebDriver endpoint, for example `http://localhost:9515`.
    pub webdriver_url: String,
    /// Page load/element wait timeout in seconds.
    pub timeout_secs: u64,
}

/// CSS selector of the product image element to capture.
const IMAGE_CSS: &'static str = ".media-image_image";
/// Browser viewport.
const WINDOW_SIZE: &'static str = "window-size=1280,800";

/// To capture the first product image of the page. Returns the image bytes base64 encoded.
pub async fn capture(opts: &ScreenshotOptions, url: &str) -> Result<String, Box<dyn StdError>> {
    let mut caps = DesiredCapabilities::chrome();
    caps.set_headless()?;
    caps.set_no_sandbox()?;
    caps.set_disable_dev_shm_usage()?;
    caps.add_chrome_arg(WINDOW_SIZE)?;

    let driver = WebDriver::new(opts.webdriver_url.as_str(), caps).await?;
    let result = capture_element(&driver, opts, url).await;
    let quit_result = driver.quit().await;
    let bytes = result?;
    quit_result?;
    Ok(general_purpose::STANDARD.encode(bytes))
}

async fn capture_element(
    driver: &WebDriver,
    opts: &ScreenshotOptions,
    url: &str,
) -> WebDriverResult<Vec<u8>> {
    let timeout = Duration::from_secs(opts.timeout_secs);
    driver.set_page_load_timeout(timeout).await?;
    driver.set_implicit_wait_timeout(timeout).await?;
    driver.goto(url).await?;
    let element = driver.find(By::Css(IMAGE_CSS)).await?;
    element.screenshot_as_png().await
}
