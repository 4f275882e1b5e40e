use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {name} has invalid value `{value}`")]
    InvalidValue { name: &'static str, value: String },
    #[error("PAGE_SIZE must be at least 1")]
    ZeroPageSize,
}

/// Values stamped onto a variant row the first time its combination shows up.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantDefaults {
    pub price: String,
    pub stock: String,
}

impl Default for VariantDefaults {
    fn default() -> Self {
        Self {
            price: "2,199".to_string(),
            stock: "10".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    pub free_shipping_threshold: Decimal,
    pub flat_shipping: Decimal,
    pub tax_rate: Decimal,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::new(100, 0),
            flat_shipping: Decimal::new(999, 2),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub page_size: usize,
    pub variant_defaults: VariantDefaults,
    pub pricing: Pricing,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            page_size: 10,
            variant_defaults: VariantDefaults::default(),
            pricing: Pricing::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to
    /// the defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let page_size = parse_or(&lookup, "PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            page_size,
            variant_defaults: VariantDefaults {
                price: lookup("VARIANT_DEFAULT_PRICE").unwrap_or(defaults.variant_defaults.price),
                stock: lookup("VARIANT_DEFAULT_STOCK").unwrap_or(defaults.variant_defaults.stock),
            },
            pricing: Pricing {
                free_shipping_threshold: parse_or(
                    &lookup,
                    "FREE_SHIPPING_THRESHOLD",
                    defaults.pricing.free_shipping_threshold,
                )?,
                flat_shipping: parse_or(&lookup, "FLAT_SHIPPING", defaults.pricing.flat_shipping)?,
                tax_rate: parse_or(&lookup, "TAX_RATE", defaults.pricing.tax_rate)?,
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}
