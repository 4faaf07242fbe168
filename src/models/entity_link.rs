use std::fmt;

const LINK_PREFIX: &str = "<#E::";
const LINK_SUFFIX: &str = ">";
const SEPARATOR: &str = "::";

/// Parsed entity link, e.g. `<#E::table::sample.db.orders::columns::id::description>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityLink {
    pub entity_type: String,
    pub fqn: String,
    /// Field path below the entity (`columns`, `id`, `description`)
    pub field_path: Vec<String>,
}

impl EntityLink {
    /// Parse an entity link; returns `None` for anything that isn't one
    pub fn parse(raw: &str) -> Option<Self> {
        let inner = raw.trim().strip_prefix(LINK_PREFIX)?.strip_suffix(LINK_SUFFIX)?;

        let mut parts = inner.split(SEPARATOR);
        let entity_type = parts.next().filter(|s| !s.is_empty())?;
        let fqn = parts.next().filter(|s| !s.is_empty())?;
        let field_path: Vec<String> = parts.map(str::to_string).collect();

        if field_path.iter().any(|p| p.is_empty()) {
            return None;
        }

        Some(Self { entity_type: entity_type.to_string(), fqn: fqn.to_string(), field_path })
    }
}

impl fmt::Display for EntityLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.entity_type, self.fqn)?;
        if !self.field_path.is_empty() {
            write!(f, " › {}", self.field_path.join("."))?;
        }
        Ok(())
    }
}
