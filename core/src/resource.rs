use std::fmt;

/// Opaque resource key. Kept exactly as configured, so `" a"` and `"a"` are
/// different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn parse(value: &str) -> Result<Self, DescriptorError> {
        if value.is_empty() {
            return Err(DescriptorError::EmptyId);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for ResourceId {
    type Err = DescriptorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which embedding mechanism a resource needs. Both kinds share the same
/// loading protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Document,
    Scene,
}

impl ResourceKind {
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("document") {
            Some(Self::Document)
        } else if trimmed.eq_ignore_ascii_case("scene") {
            Some(Self::Scene)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Scene => "scene",
        }
    }

    /// Value for the iframe `allow` attribute.
    pub fn allow_policy(self) -> &'static str {
        match self {
            Self::Document => "fullscreen",
            Self::Scene => "autoplay; fullscreen; xr-spatial-tracking; accelerometer; gyroscope",
        }
    }

    pub fn default_placeholder(self) -> &'static str {
        match self {
            Self::Document => "Loading document…",
            Self::Scene => "Loading scene…",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceDescriptor {
    id: ResourceId,
    kind: ResourceKind,
    source_url: String,
}

impl ResourceDescriptor {
    /// Only empty strings are rejected. The url is opaque and may be
    /// absolute or relative to the deployment base path.
    pub fn new(id: &str, kind: ResourceKind, source_url: &str) -> Result<Self, DescriptorError> {
        let id = ResourceId::parse(id)?;
        if source_url.is_empty() {
            return Err(DescriptorError::EmptyUrl { id: id.to_string() });
        }
        Ok(Self {
            id,
            kind,
            source_url: source_url.to_string(),
        })
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    EmptyId,
    EmptyUrl { id: String },
}

impl fmt::Display for DescriptorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DescriptorError::EmptyId => write!(f, "resource id cannot be empty"),
            DescriptorError::EmptyUrl { id } => write!(f, "resource '{id}' has an empty url"),
        }
    }
}

impl std::error::Error for DescriptorError {}
