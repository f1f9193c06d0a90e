use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use config::{Config, Environment};
use regex::Regex;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://bgc.gg";
pub const DEFAULT_SHOP_URL: &str = "https://bgc.gg/shop/";
pub const DEFAULT_OUTPUT_PATH: &str = "lib/ripped_products.json";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Listing pages walked per run. A guess at "enough", not the site's real page count.
pub const DEFAULT_MAX_PAGES: u32 = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub shop_url: String,
    pub output_path: PathBuf,
    pub max_pages: u32,
    pub user_agent: String,
}

impl Settings {
    /// Defaults overlaid with `RIPPER_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Environment::with_prefix("RIPPER"))
    }

    fn load_from(env: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("shop_url", DEFAULT_SHOP_URL)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("max_pages", i64::from(DEFAULT_MAX_PAGES))?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid RIPPER_* settings")?;

        if settings.max_pages == 0 {
            bail!("RIPPER_MAX_PAGES must be at least 1");
        }
        Ok(settings)
    }

    pub fn storefront(&self) -> Result<Storefront> {
        Storefront::new(&self.base_url, &self.shop_url)
    }
}

/// URL shapes of one storefront. Patterns are anchored on the base URL so the
/// same rules work against a mirror or a local test server.
#[derive(Debug, Clone)]
pub struct Storefront {
    shop_url: String,
    product_link_re: Regex,
    upload_image_re: Regex,
}

impl Storefront {
    pub fn new(base_url: &str, shop_url: &str) -> Result<Self> {
        let base = base_url.trim_end_matches('/');
        let escaped = regex::escape(base);

        let product_link_re = Regex::new(&format!(r#"href="({}/product/[^/"]+/?)""#, escaped))
            .context("Invalid product link pattern")?;
        let upload_image_re = Regex::new(&format!(
            r#"{}/wp-content/uploads/[0-9]{{4}}/[0-9]{{2}}/[^"'\s]+\.(?:jpg|jpeg|png)"#,
            escaped
        ))
        .context("Invalid upload image pattern")?;

        let shop_url = if shop_url.ends_with('/') {
            shop_url.to_string()
        } else {
            format!("{}/", shop_url)
        };

        Ok(Storefront {
            shop_url,
            product_link_re,
            upload_image_re,
        })
    }

    /// Page 1 is the bare shop URL, later pages use `{shop}page/{n}/`.
    pub fn listing_url(&self, page: u32) -> String {
        if page > 1 {
            format!("{}page/{}/", self.shop_url, page)
        } else {
            self.shop_url.clone()
        }
    }

    pub fn product_link_re(&self) -> &Regex {
        &self.product_link_re
    }

    pub fn upload_image_re(&self) -> &Regex {
        &self.upload_image_re
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_urls() {
        let sf = Storefront::new(DEFAULT_BASE_URL, DEFAULT_SHOP_URL).unwrap();
        assert_eq!(sf.listing_url(1), "https://bgc.gg/shop/");
        assert_eq!(sf.listing_url(2), "https://bgc.gg/shop/page/2/");
        assert_eq!(sf.listing_url(3), "https://bgc.gg/shop/page/3/");
    }

    #[test]
    fn shop_url_gets_trailing_slash() {
        let sf = Storefront::new("http://127.0.0.1:8080/", "http://127.0.0.1:8080/shop").unwrap();
        assert_eq!(sf.listing_url(1), "http://127.0.0.1:8080/shop/");
        assert_eq!(sf.listing_url(2), "http://127.0.0.1:8080/shop/page/2/");
    }

    #[test]
    fn base_url_is_escaped() {
        // "." in the host must not match arbitrary characters
        let sf = Storefront::new(DEFAULT_BASE_URL, DEFAULT_SHOP_URL).unwrap();
        assert!(!sf
            .product_link_re()
            .is_match(r#"href="https://bgcXgg/product/towel/""#));
        assert!(sf
            .product_link_re()
            .is_match(r#"href="https://bgc.gg/product/towel/""#));
    }

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("RIPPER").source(Some(map))
    }

    #[test]
    fn defaults_without_env() {
        let s = Settings::load_from(env(&[])).unwrap();
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.shop_url, DEFAULT_SHOP_URL);
        assert_eq!(s.max_pages, 3);
        assert_eq!(s.output_path, PathBuf::from("lib/ripped_products.json"));
        assert_eq!(s.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn env_overrides_defaults() {
        let s = Settings::load_from(env(&[
            ("RIPPER_MAX_PAGES", "7"),
            ("RIPPER_OUTPUT_PATH", "x/y.json"),
        ]))
        .unwrap();
        assert_eq!(s.max_pages, 7);
        assert_eq!(s.output_path, PathBuf::from("x/y.json"));
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn zero_max_pages_rejected() {
        assert!(Settings::load_from(env(&[("RIPPER_MAX_PAGES", "0")])).is_err());
    }
}
