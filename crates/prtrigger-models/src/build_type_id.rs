/// Identifier of a build configuration on the CI server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildTypeId(String);

impl BuildTypeId {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildTypeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BuildTypeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for BuildTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
