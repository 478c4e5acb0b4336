use crate::core::{CatalogDocument, PackageEntity, PluginDeclaration, ServiceEntity};

pub const DEFAULT_REPOSITORY: &str = "org/default-repo";

/// Last `/`-separated segment of `org/repo`, falling back to [`DEFAULT_REPOSITORY`].
pub fn repository_name(full_name: Option<&str>) -> &str {
    let full_name = full_name.unwrap_or(DEFAULT_REPOSITORY);
    full_name.rsplit('/').next().unwrap_or(full_name)
}

pub fn map_packages(plugins: Vec<PluginDeclaration>) -> Vec<PackageEntity> {
    plugins.into_iter().map(PackageEntity::from).collect()
}

pub fn map_service(full_name: Option<&str>, packages: &[PackageEntity]) -> ServiceEntity {
    let dependencies = packages
        .iter()
        .map(|package| package.identifier.clone())
        .collect();
    ServiceEntity::new(repository_name(full_name), dependencies)
}

pub fn map_entities(plugins: Vec<PluginDeclaration>, full_name: Option<&str>) -> CatalogDocument {
    let packages = map_packages(plugins);
    let service = map_service(full_name, &packages);
    CatalogDocument { service, packages }
}
