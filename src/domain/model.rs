use serde::{Deserialize, Serialize};

pub const PACKAGE_BLUEPRINT: &str = "package";
pub const SERVICE_BLUEPRINT: &str = "service";

/// One `id "..." version "..."` match from a build script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDeclaration {
    pub id: String,
    pub version: String,
}

impl PluginDeclaration {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageProperties {
    pub package: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntity {
    pub identifier: String,
    pub blueprint: String,
    pub properties: PackageProperties,
}

impl From<PluginDeclaration> for PackageEntity {
    fn from(plugin: PluginDeclaration) -> Self {
        Self {
            identifier: plugin.id.clone(),
            blueprint: PACKAGE_BLUEPRINT.to_string(),
            properties: PackageProperties {
                package: plugin.id,
                version: plugin.version,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRelations {
    pub dependencies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntity {
    pub identifier: String,
    pub blueprint: String,
    pub relations: ServiceRelations,
}

impl ServiceEntity {
    pub fn new(identifier: impl Into<String>, dependencies: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            blueprint: SERVICE_BLUEPRINT.to_string(),
            relations: ServiceRelations { dependencies },
        }
    }
}

/// An element of the bulk-upsert array. Untagged so either shape parses back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entity {
    Service(ServiceEntity),
    Package(PackageEntity),
}

impl Entity {
    pub fn identifier(&self) -> &str {
        match self {
            Entity::Service(service) => &service.identifier,
            Entity::Package(package) => &package.identifier,
        }
    }
}

/// Mapped output of one run: the repository service plus its packages in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDocument {
    pub service: ServiceEntity,
    pub packages: Vec<PackageEntity>,
}

impl CatalogDocument {
    /// Service first, then packages.
    pub fn entities(&self) -> Vec<Entity> {
        std::iter::once(Entity::Service(self.service.clone()))
            .chain(self.packages.iter().cloned().map(Entity::Package))
            .collect()
    }
}
