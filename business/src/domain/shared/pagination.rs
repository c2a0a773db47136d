/// Requested slice of a listing: zero-based page number and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a page request. A size of zero is raised to one.
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of rows to skip before the first row of this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

/// A bounded slice of a larger result set plus the metadata needed to
/// navigate the rest of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub number: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            total_elements,
            number: request.page(),
            size: request.size(),
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size))
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    /// True when no page follows this one.
    pub fn is_last(&self) -> bool {
        u64::from(self.number) + 1 >= self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Converts the items while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            number: self.number,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_raise_zero_size_to_one() {
        let request = PageRequest::new(3, 0);

        assert_eq!(request.size(), 1);
        assert_eq!(request.offset(), 3);
    }

    #[test]
    fn should_compute_offset_from_page_and_size() {
        let request = PageRequest::new(2, 12);

        assert_eq!(request.offset(), 24);
    }

    #[test]
    fn should_report_single_page_when_total_fits() {
        let page = Page::new(vec!["Phone"], &PageRequest::new(0, 12), 1);

        assert_eq!(page.total_pages(), 1);
        assert!(page.is_first());
        assert!(page.is_last());
        assert!(!page.is_empty());
        assert_eq!(page.number_of_elements(), 1);
    }

    #[test]
    fn should_report_zero_pages_when_collection_empty() {
        let page: Page<&str> = Page::new(vec![], &PageRequest::new(0, 12), 0);

        assert_eq!(page.total_pages(), 0);
        assert!(page.is_last());
        assert!(page.is_empty());
    }

    #[test]
    fn should_not_be_last_when_more_pages_follow() {
        let page = Page::new(vec![1, 2], &PageRequest::new(0, 2), 5);

        assert_eq!(page.total_pages(), 3);
        assert!(!page.is_last());
    }

    #[test]
    fn should_keep_metadata_when_mapping_content() {
        let page = Page::new(vec![1, 2], &PageRequest::new(1, 2), 5);

        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total_elements, 5);
        assert_eq!(mapped.number, 1);
        assert_eq!(mapped.size, 2);
    }

    #[test]
    fn should_parse_sort_direction_ignoring_case() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!(" asc ".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    proptest! {
        #[test]
        fn should_cover_every_element_with_total_pages(total in 0u64..100_000, size in 1u32..500) {
            let page: Page<()> = Page::new(vec![], &PageRequest::new(0, size), total);
            let pages = page.total_pages();

            prop_assert!(pages * u64::from(size) >= total);
            prop_assert!(pages == 0 || (pages - 1) * u64::from(size) < total);
        }

        #[test]
        fn should_flag_last_page_only_at_the_end(total in 1u64..10_000, size in 1u32..100) {
            let pages = total.div_ceil(u64::from(size));
            let last_number = (pages - 1) as u32;

            let last: Page<()> = Page::new(vec![], &PageRequest::new(last_number, size), total);
            prop_assert!(last.is_last());

            if last_number > 0 {
                let before: Page<()> =
                    Page::new(vec![], &PageRequest::new(last_number - 1, size), total);
                prop_assert!(!before.is_last());
            }
        }
    }
}
