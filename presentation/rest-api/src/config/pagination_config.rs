use std::env;

use business::domain::shared::pagination::PageRequest;

/// Page size limits applied to listing endpoints
#[derive(Debug, Clone, Copy)]
pub struct PaginationConfig {
    pub default_size: u32,
    pub max_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: 12,
            max_size: 100,
        }
    }
}

impl PaginationConfig {
    /// Load page size limits from environment variables
    ///
    /// Environment variables:
    /// - PAGE_SIZE_DEFAULT: Size used when the request has none (default: 12)
    /// - PAGE_SIZE_MAX: Upper bound for requested sizes (default: 100)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let max_size = read_u32("PAGE_SIZE_MAX").unwrap_or(defaults.max_size).max(1);
        let default_size = read_u32("PAGE_SIZE_DEFAULT")
            .unwrap_or(defaults.default_size)
            .clamp(1, max_size);

        Self {
            default_size,
            max_size,
        }
    }

    /// Builds a page request from raw query values. Negative pages become
    /// the first page; sizes are clamped to `1..=max_size`.
    pub fn page_request(&self, page: Option<i64>, size: Option<i64>) -> PageRequest {
        let page = page
            .map(|p| p.clamp(0, i64::from(u32::MAX)) as u32)
            .unwrap_or(0);
        let size = size
            .map(|s| s.clamp(1, i64::from(self.max_size)) as u32)
            .unwrap_or(self.default_size);

        PageRequest::new(page, size)
    }
}

fn read_u32(key: &str) -> Option<u32> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}
