//! Registry command implementation

use std::path::PathBuf;

use crate::cli::{RegistryArgs, RegistryCommand};
use crate::config::{DEFAULT_REGISTRY_URL, ProjectConfig, RegistryLocation};
use crate::error::Result;
use crate::ui::logger;

use super::helpers::resolve_project_path;

/// Run registry command
pub fn run(project: Option<PathBuf>, registry: Option<&str>, args: &RegistryArgs) -> Result<()> {
    let project_root = resolve_project_path(project)?;

    match &args.command {
        RegistryCommand::Get => {
            let location = RegistryLocation::resolve(&project_root, registry);
            match location {
                RegistryLocation::Remote {
                    content_url,
                    api_url,
                } => {
                    logger::info(format!("Registry: {content_url}"));
                    logger::info(format!("API: {api_url}"));
                }
                RegistryLocation::Local(path) => {
                    logger::info(format!("Registry: {}", path.display()));
                }
            }
        }
        RegistryCommand::Set { url } => {
            let mut config = ProjectConfig::load(&project_root)?;
            config.registry = Some(url.trim().to_string());
            config.save(&project_root)?;
            logger::success(format!("Registry set to {}", url.trim()));
        }
        RegistryCommand::Reset => {
            let mut config = ProjectConfig::load(&project_root)?;
            config.registry = None;
            config.registry_api = None;
            config.save(&project_root)?;
            logger::success(format!("Registry reset to {DEFAULT_REGISTRY_URL}"));
        }
    }
    Ok(())
}
