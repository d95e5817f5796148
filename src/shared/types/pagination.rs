/// Zero-based page request handed through to the repository untouched.
///
/// The repository collaborator owns pagination semantics; this layer does
/// not re-paginate, clamp or translate the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}
