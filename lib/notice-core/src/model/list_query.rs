/// Zero-based page selection
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListPagination {
    pub page: u32,
    pub page_size: u32,
}
