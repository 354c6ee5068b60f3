//! Page selection for listing readings
//!
//! Query values that fail to parse or fall out of range are ignored and
//! the default is kept; they never reject the request.

/// Maximum readings per page
pub const MAX_LIMIT: i64 = 100;

/// Default readings per page
pub const DEFAULT_LIMIT: i64 = 10;

/// Offset/limit window over readings ordered newest-first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    limit: i64,
    offset: i64,
}

impl Page {
    /// Build a page from raw query values.
    ///
    /// - `limit` is accepted only as an integer in `1..=100`
    /// - `offset` is accepted only as an integer `>= 0`
    pub fn from_raw(limit: Option<&str>, offset: Option<&str>) -> Self {
        let limit = limit
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|l| (1..=MAX_LIMIT).contains(l))
            .unwrap_or(DEFAULT_LIMIT);
        let offset = offset
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|o| *o >= 0)
            .unwrap_or(0);

        Self { limit, offset }
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Get OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Query parameters for paging, kept as raw strings so bad values fall back
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl PageParams {
    /// Pick paging values out of decoded query pairs.
    ///
    /// A repeated key keeps its first value; other keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::from_raw(params.limit.as_deref(), params.offset.as_deref())
    }
}
