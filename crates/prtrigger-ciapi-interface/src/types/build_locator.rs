use std::fmt::Display;

/// Build query on a branch, any state, limited to the most recent builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLocator {
    pub branch: String,
    pub count: u32,
}

impl BuildLocator {
    pub fn new<T: Into<String>>(branch: T, count: u32) -> Self {
        Self {
            branch: branch.into(),
            count,
        }
    }
}

impl Display for BuildLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "branch:{},state:any,count:{}", self.branch, self.count)
    }
}
